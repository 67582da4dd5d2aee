//! CLI configuration.

use anyhow::{Context, Result};
use deals_core::catalog::CountSource;
use deals_core::search::{CategorySelection, ALL_CATEGORIES};
use deals_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["couponhub.toml", ".couponhub.toml", "couponhub.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Category selected when a command does not name one.
    pub fn default_selection(&self) -> CategorySelection {
        CategorySelection::parse(self.display.default_category.clone())
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Category tab selected on start.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Show the full description on each card.
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            show_descriptions: true,
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where category tab counts come from.
    #[serde(default)]
    pub count_source: CountSource,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to stderr.
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default couponhub.toml config file.
pub fn generate_default_config() -> String {
    r#"# CouponHub deals configuration

[display]
# Category tab selected when none is given ("All" selects every deal)
default_category = "All"
show_descriptions = true

[catalog]
# "static" shows the seeded tab counts, "live" counts the catalog
count_source = "static"

[logging]
level = "warn"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = CliConfig::parse("couponhub.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = CliConfig::parse(
            "couponhub.toml",
            "[catalog]\ncount_source = \"live\"\n[display]\ndefault_category = \"Food\"\n",
        )
        .unwrap();
        assert_eq!(config.catalog.count_source, CountSource::Live);
        assert_eq!(config.default_selection(), CategorySelection::named("Food"));
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse("couponhub.json", r#"{"logging": {"level": "debug", "format": "json"}}"#)
                .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.default_selection().is_all());
    }

    #[test]
    fn test_invalid_count_source_is_rejected() {
        let result = CliConfig::parse("couponhub.toml", "[catalog]\ncount_source = \"guess\"\n");
        assert!(result.is_err());
    }
}
