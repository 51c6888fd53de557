//! Multi-key sort specification building
//!
//! Builds an ordered list of sort keys from the request's sort specs. The
//! list preserves request order and is applied as primary, secondary, and so
//! on; it is never re-sorted.

mod builder;

pub use builder::{SortBuilder, SortDirection, SortKey};
