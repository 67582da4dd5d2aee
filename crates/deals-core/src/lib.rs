//! Deal catalog types and session logic for CouponHub.
//!
//! This crate holds everything the deals page needs that is not markup:
//!
//! - **Catalog**: the seeded, immutable list of deals and category tabs
//! - **Search**: the query state and the filter that turns it into results
//! - **Feedback**: the "just copied" tracker with per-code expiry
//! - **Clipboard**: the seam the tracker writes redemption codes through
//!
//! # Example
//!
//! ```rust
//! use deals_core::prelude::*;
//!
//! let catalog = Catalog::featured();
//! let query = DealQuery::new()
//!     .with_term("amazon")
//!     .with_category(CategorySelection::named("Electronics"));
//!
//! let results = query.apply(&catalog);
//! assert_eq!(results.summary(), "1 deals found");
//!
//! let clock = ManualClock::new();
//! let mut feedback = CopyFeedback::new(clock.clone());
//! feedback.flag("SAVE30TECH");
//! assert!(feedback.is_flagged("SAVE30TECH"));
//! ```

pub mod clipboard;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod feedback;
pub mod search;

pub use error::DealError;
pub use ids::DealId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::clipboard::{Clipboard, RecordingClipboard};
    pub use crate::error::DealError;
    pub use crate::ids::DealId;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryIcon, CountSource, Deal, DiscountKind};

    // Search
    pub use crate::search::{CategorySelection, DealQuery, DealResults};

    // Feedback
    pub use crate::feedback::{Clock, CopyFeedback, ManualClock, SystemClock, FEEDBACK_DURATION};
}
