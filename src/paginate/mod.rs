//! Pagination strategies
//!
//! One strategy instance is selected at construction from configuration and
//! reused for every request; windowing is either computed locally
//! (offset/limit) or delegated to one of the source's two windowing
//! mechanisms.

mod strategy;

pub use strategy::{
    page_index, strategy_for, OffsetPaginator, PagerPaginator, PaginationStrategy,
    WindowedPaginator,
};
