//! Category tabs for the filter controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DealError;

/// Icon shown next to a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryIcon {
    TrendingUp,
    ShoppingBag,
    Sparkles,
    Tag,
    Star,
    Percent,
}

impl CategoryIcon {
    /// Stable icon name, used as a CSS class suffix by the web page.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryIcon::TrendingUp => "trending-up",
            CategoryIcon::ShoppingBag => "shopping-bag",
            CategoryIcon::Sparkles => "sparkles",
            CategoryIcon::Tag => "tag",
            CategoryIcon::Star => "star",
            CategoryIcon::Percent => "percent",
        }
    }

    /// Single-glyph stand-in for terminals.
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::TrendingUp => "↗",
            CategoryIcon::ShoppingBag => "🛍",
            CategoryIcon::Sparkles => "✨",
            CategoryIcon::Tag => "🏷",
            CategoryIcon::Star => "★",
            CategoryIcon::Percent => "%",
        }
    }
}

/// A category tab.
///
/// `count` is display data seeded alongside the name; it is not kept in
/// sync with the catalog. Use [`CountSource::Live`] to derive counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, also the value the category filter matches.
    pub name: String,
    /// Tab icon.
    pub icon: CategoryIcon,
    /// Seeded deal count.
    pub count: u32,
}

impl Category {
    /// Create a category tab.
    pub fn new(name: impl Into<String>, icon: CategoryIcon, count: u32) -> Self {
        Self {
            name: name.into(),
            icon,
            count,
        }
    }
}

/// Where category tab counts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountSource {
    /// Seeded counts, shown as-is.
    #[default]
    Static,
    /// Counts derived from the catalog contents.
    Live,
}

impl fmt::Display for CountSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountSource::Static => write!(f, "static"),
            CountSource::Live => write!(f, "live"),
        }
    }
}

impl FromStr for CountSource {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(CountSource::Static),
            "live" => Ok(CountSource::Live),
            _ => Err(DealError::InvalidCountSource(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_source_parsing() {
        assert_eq!("LIVE".parse::<CountSource>(), Ok(CountSource::Live));
        assert_eq!("static".parse::<CountSource>(), Ok(CountSource::Static));
        assert!("derived".parse::<CountSource>().is_err());
    }

    #[test]
    fn test_count_source_toml_style_name() {
        let json = serde_json::to_string(&CountSource::Live).unwrap();
        assert_eq!(json, "\"live\"");
    }
}
