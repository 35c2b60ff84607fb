//! Helper functions shared by the listing views
//!
//! Date formatting, HTML cleanup and URL building. Everything here is
//! infallible and free of I/O.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
