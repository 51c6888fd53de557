//! Windowing strategy implementations

use serde_json::Value;

use crate::config::PaginatorKind;
use crate::errors::GridResult;
use crate::source::DataSource;

/// Computes the 1-based page index for a page window.
pub fn page_index(page_start: i64, per_page: i64) -> usize {
    if per_page <= 0 {
        return 1;
    }
    (page_start / per_page + 1).max(1) as usize
}

/// Windows a collection to one page
pub trait PaginationStrategy {
    fn window(
        &self,
        source: &dyn DataSource,
        records: Vec<Value>,
        page: usize,
        per_page: usize,
    ) -> GridResult<Vec<Value>>;
}

/// Local offset/limit windowing
pub struct OffsetPaginator;

impl PaginationStrategy for OffsetPaginator {
    fn window(
        &self,
        _source: &dyn DataSource,
        records: Vec<Value>,
        page: usize,
        per_page: usize,
    ) -> GridResult<Vec<Value>> {
        if per_page == 0 {
            return Ok(Vec::new());
        }
        let offset = (page - 1) * per_page;
        Ok(records.into_iter().skip(offset).take(per_page).collect())
    }
}

/// Delegates to the source's pager mechanism
pub struct PagerPaginator;

impl PaginationStrategy for PagerPaginator {
    fn window(
        &self,
        source: &dyn DataSource,
        records: Vec<Value>,
        page: usize,
        per_page: usize,
    ) -> GridResult<Vec<Value>> {
        source.pager_window(records, page, per_page)
    }
}

/// Delegates to the source's windowed-page mechanism
pub struct WindowedPaginator;

impl PaginationStrategy for WindowedPaginator {
    fn window(
        &self,
        source: &dyn DataSource,
        records: Vec<Value>,
        page: usize,
        per_page: usize,
    ) -> GridResult<Vec<Value>> {
        source.windowed_page(records, page, per_page)
    }
}

/// Strategy selection, done once at construction
pub fn strategy_for(kind: PaginatorKind) -> Box<dyn PaginationStrategy> {
    match kind {
        PaginatorKind::Offset => Box::new(OffsetPaginator),
        PaginatorKind::Pager => Box::new(PagerPaginator),
        PaginatorKind::Windowed => Box::new(WindowedPaginator),
    }
}
