//! Filtered deal results.

use serde::Serialize;

use crate::catalog::Deal;
use crate::search::CategorySelection;

/// Deals matching a query, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct DealResults<'a> {
    /// Matching deals.
    pub deals: Vec<&'a Deal>,
    /// Selection the results were produced for.
    pub category: CategorySelection,
    /// Number of matching deals.
    pub total: usize,
}

impl<'a> DealResults<'a> {
    /// Create a result set.
    pub fn new(deals: Vec<&'a Deal>, category: CategorySelection) -> Self {
        let total = deals.len();
        Self {
            deals,
            category,
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Deal> + '_ {
        self.deals.iter().copied()
    }

    /// Result count line, e.g. "0 deals found".
    pub fn summary(&self) -> String {
        format!("{} deals found", self.total)
    }

    /// Section heading: "Featured Deals" for every category, otherwise
    /// "<Category> Deals".
    pub fn heading(&self) -> String {
        match &self.category {
            CategorySelection::All => "Featured Deals".to_string(),
            CategorySelection::Named(name) => format!("{} Deals", name),
        }
    }

    /// Owned copies of the matching deals.
    pub fn to_owned_deals(&self) -> Vec<Deal> {
        self.deals.iter().map(|d| (*d).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_are_representable() {
        let results = DealResults::new(Vec::new(), CategorySelection::named("Travel"));
        assert!(results.is_empty());
        assert_eq!(results.summary(), "0 deals found");
        assert_eq!(results.heading(), "Travel Deals");
    }

    #[test]
    fn test_all_heading() {
        let results = DealResults::new(Vec::new(), CategorySelection::All);
        assert_eq!(results.heading(), "Featured Deals");
    }
}
