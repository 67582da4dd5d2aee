//! Filter predicates.

use crate::catalog::Deal;
use crate::search::CategorySelection;

/// Search predicate: an empty term matches everything, otherwise the
/// lowercased term must appear in the lowercased brand or title.
pub fn matches_term(deal: &Deal, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    deal.brand.to_lowercase().contains(&needle) || deal.title.to_lowercase().contains(&needle)
}

/// Category predicate: the "All" selection matches everything, a named
/// selection matches the deal's category exactly.
pub fn matches_category(deal: &Deal, selection: &CategorySelection) -> bool {
    match selection {
        CategorySelection::All => true,
        CategorySelection::Named(name) => deal.category == *name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn amazon() -> Deal {
        Catalog::featured().deals()[0].clone()
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(matches_term(&amazon(), ""));
    }

    #[test]
    fn test_term_matches_brand_or_title() {
        let deal = amazon();
        assert!(matches_term(&deal, "AMAZ"));
        assert!(matches_term(&deal, "off elec"));
        assert!(!matches_term(&deal, "laptops"));
    }

    #[test]
    fn test_category_is_exact() {
        let deal = amazon();
        assert!(matches_category(&deal, &CategorySelection::All));
        assert!(matches_category(&deal, &CategorySelection::named("Electronics")));
        assert!(!matches_category(&deal, &CategorySelection::named("electronics")));
    }
}
