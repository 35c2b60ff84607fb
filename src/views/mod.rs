//! Listing views
//!
//! Both views are read-only projections: they borrow posts and groupings
//! built by the content loader and return an HTML fragment. Empty input
//! gives an empty fragment.

pub mod categories;
pub mod posts;

/// Appended to an excerpt that was cut short
pub const EXCERPT_OMISSION: &str = "...";
