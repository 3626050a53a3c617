//! Action groups for Reddit API operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod listings;
mod posts;

pub use listings::ListingActions;
pub use posts::PostActions;
