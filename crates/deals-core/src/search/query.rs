//! Query state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Deal};
use crate::search::{matches_category, matches_term, DealResults};

/// Name of the sentinel category tab that selects every deal.
pub const ALL_CATEGORIES: &str = "All";

/// The selected category tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    /// Every category.
    #[default]
    All,
    /// A single category, matched exactly.
    Named(String),
}

impl CategorySelection {
    /// Select a named category.
    pub fn named(name: impl Into<String>) -> Self {
        Self::parse(name)
    }

    /// Map a tab name onto a selection; "All" is the sentinel.
    pub fn parse(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(name)
        }
    }

    /// Tab name for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CategorySelection {
    fn from(s: String) -> Self {
        Self::parse(s)
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        selection.as_str().to_string()
    }
}

/// User-controlled filter inputs: a free-text term and a category tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DealQuery {
    /// Free-text search term, matched case-insensitively.
    pub term: String,
    /// Selected category tab.
    pub category: CategorySelection,
}

impl DealQuery {
    /// Empty term, "All" category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategorySelection>) -> Self {
        self.category = category.into();
        self
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn set_category(&mut self, category: impl Into<CategorySelection>) {
        self.category = category.into();
    }

    /// Whether a deal passes both the search and the category predicate.
    pub fn matches(&self, deal: &Deal) -> bool {
        matches_term(deal, &self.term) && matches_category(deal, &self.category)
    }

    /// Filter the catalog from scratch, keeping catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> DealResults<'a> {
        let deals = catalog.deals().iter().filter(|d| self.matches(d)).collect();
        DealResults::new(deals, self.category.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel() {
        assert_eq!(CategorySelection::parse("All"), CategorySelection::All);
        assert_eq!(
            CategorySelection::parse("all"),
            CategorySelection::Named("all".to_string())
        );
        assert_eq!(CategorySelection::All.as_str(), "All");
    }

    #[test]
    fn test_query_builder() {
        let query = DealQuery::new().with_term("nike").with_category("Fashion");
        assert_eq!(query.term, "nike");
        assert_eq!(query.category, CategorySelection::named("Fashion"));
    }

    #[test]
    fn test_selection_serializes_as_tab_name() {
        let query = DealQuery::new().with_category("Food");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["category"], "Food");

        let back: DealQuery = serde_json::from_str(r#"{"term":"","category":"All"}"#).unwrap();
        assert!(back.category.is_all());
    }

    #[test]
    fn test_apply_combines_predicates() {
        let catalog = Catalog::featured();
        let query = DealQuery::new().with_term("free").with_category("Fashion");
        let results = query.apply(&catalog);
        let codes: Vec<&str> = results.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["NIKESAVE25"]);
    }
}
