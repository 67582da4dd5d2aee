//! Deal catalog module.
//!
//! Contains the deal and category records and the immutable catalog that
//! holds them in display order.

mod category;
mod deal;
mod seed;

pub use category::{Category, CategoryIcon, CountSource};
pub use deal::{Deal, DiscountKind};

use crate::error::DealError;
use crate::search::ALL_CATEGORIES;

/// The full, ordered, immutable collection of deals plus the category tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    deals: Vec<Deal>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog. Deal order is kept as display order.
    pub fn new(deals: Vec<Deal>, categories: Vec<Category>) -> Self {
        Self { deals, categories }
    }

    /// The seeded featured deals and category tabs.
    pub fn featured() -> Self {
        Self::new(seed::featured_deals(), seed::categories())
    }

    /// All deals, in display order.
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Category tabs, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Find a deal by its redemption code.
    pub fn find_by_code(&self, code: &str) -> Result<&Deal, DealError> {
        self.deals
            .iter()
            .find(|d| d.code == code)
            .ok_or_else(|| DealError::DealNotFound(code.to_string()))
    }

    /// Number of deals in a category; the "All" tab counts every deal.
    pub fn live_count(&self, category: &str) -> u32 {
        if category == ALL_CATEGORIES {
            return self.deals.len() as u32;
        }
        self.deals.iter().filter(|d| d.category == category).count() as u32
    }

    /// Category tabs paired with the count to display.
    pub fn category_tabs(&self, source: CountSource) -> Vec<(&Category, u32)> {
        self.categories
            .iter()
            .map(|c| {
                let count = match source {
                    CountSource::Static => c.count,
                    CountSource::Live => self.live_count(&c.name),
                };
                (c, count)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::featured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_order_is_seed_order() {
        let catalog = Catalog::featured();
        let brands: Vec<&str> = catalog.deals().iter().map(|d| d.brand.as_str()).collect();
        assert_eq!(brands, vec!["Amazon", "Nike", "Spotify", "Uber Eats"]);
    }

    #[test]
    fn test_find_by_code() {
        let catalog = Catalog::featured();
        assert_eq!(catalog.find_by_code("WELCOME20").unwrap().brand, "Uber Eats");
        assert_eq!(
            catalog.find_by_code("save30tech"),
            Err(DealError::DealNotFound("save30tech".to_string()))
        );
    }

    #[test]
    fn test_static_tabs_keep_seeded_counts() {
        let catalog = Catalog::featured();
        let tabs = catalog.category_tabs(CountSource::Static);
        let counts: Vec<u32> = tabs.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![156, 42, 38, 29, 25, 22]);
    }

    #[test]
    fn test_live_tabs_count_catalog() {
        let catalog = Catalog::featured();
        let tabs = catalog.category_tabs(CountSource::Live);
        let counts: Vec<(&str, u32)> = tabs.iter().map(|(c, n)| (c.name.as_str(), *n)).collect();
        assert_eq!(
            counts,
            vec![
                ("All", 4),
                ("Electronics", 1),
                ("Fashion", 1),
                ("Food", 1),
                ("Entertainment", 1),
                ("Travel", 0),
            ]
        );
    }
}
