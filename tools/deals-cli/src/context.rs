//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use deals_core::catalog::Catalog;
use deals_core::feedback::SystemClock;
use deals_observability::{LogLevel, SessionId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Structured logger for this invocation.
    pub logger: StructuredLogger,
    /// The deal catalog.
    pub catalog: Catalog,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, command: &str) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let logger = Self::build_logger(&config, &output, command);
        if let Some(path) = &config_path {
            logger.debug(&format!("Loaded config from {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            catalog: Catalog::featured(),
            cwd,
        })
    }

    fn build_logger(config: &CliConfig, output: &Output, command: &str) -> StructuredLogger {
        let clock = SystemClock::new();
        let level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.logging.level
        };

        StructuredLogger::new(SessionId::generate(&clock), clock)
            .with_view(command)
            .with_min_level(level)
            .with_format(config.logging.format)
    }

    /// Find config file in directory tree.
    ///
    /// The nearest file wins; a file that exists but does not parse is an
    /// error rather than a fall back to defaults.
    fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = CliConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deals_core::catalog::CountSource;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("couponhub.toml"),
            "[catalog]\ncount_source = \"live\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.catalog.count_source, CountSource::Live);
        assert_eq!(path, dir.path().join("couponhub.toml"));
    }

    #[test]
    fn test_invalid_discovered_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("couponhub.toml"),
            "[catalog]\ncount_source = \"guess\"\n",
        )
        .unwrap();

        let err = Context::find_config(dir.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse TOML config"));
        assert!(message.contains("couponhub.toml"));
    }

    #[test]
    fn test_nearest_config_wins_over_broken_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("couponhub.toml"), "not toml [").unwrap();
        let nested = dir.path().join("project");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            nested.join("couponhub.json"),
            r#"{"display": {"default_category": "Food"}}"#,
        )
        .unwrap();

        let (config, _) = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.display.default_category, "Food");
    }
}
