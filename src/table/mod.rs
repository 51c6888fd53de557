//! Grid pipeline orchestration
//!
//! Composes resolution, filtering, sorting, and windowing into the fixed
//! fetch -> sort -> filter -> paginate pipeline and assembles the reply
//! envelope.
//!
//! # Pipeline order (strict)
//!
//! 1. Fetch the raw collection
//! 2. Apply the ordered sort keys, if any sort spec is present
//! 3. Apply the combined filter condition, if any search term is present
//! 4. Apply the page window, unless the request is unbounded
//!
//! Sort runs before filter on purpose: with tied sort keys the order of
//! these two steps decides which rows land inside a pagination window, so
//! the order is pinned and must not be "fixed".

mod grid;

pub use grid::GridTable;
