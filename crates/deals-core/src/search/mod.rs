//! Search module.
//!
//! Contains the query state and the filter that produces deal results.

mod filter;
mod query;
mod results;

pub use filter::{matches_category, matches_term};
pub use query::{CategorySelection, DealQuery, ALL_CATEGORIES};
pub use results::DealResults;
