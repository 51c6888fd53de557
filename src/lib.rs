//! gridquery - server-side grid fetch translation
//!
//! Turns an interactive data-grid fetch request (global search phrase,
//! per-column search values, multi-column sort order, page window) into a
//! filtered, sorted, paginated view over a backing record collection, plus
//! the row counts the client needs for its UI state.

pub mod column;
pub mod config;
pub mod errors;
pub mod filter;
pub mod observe;
pub mod paginate;
pub mod request;
pub mod response;
pub mod sort;
pub mod source;
pub mod table;
