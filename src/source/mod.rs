//! Backing-source collaborator seams
//!
//! The pipeline core never touches storage directly. It talks to two traits:
//! [`ModelLookup`] for container validation and enum classification, and
//! [`DataSource`] for record retrieval, predicate filtering, ordering,
//! windowing, and row-shape transformation.
//!
//! Every `DataSource` hook has a default body that fails with
//! [`GridError::UnimplementedHook`]: an unimplemented hook surfaces
//! immediately and is never retried.

mod memory;

pub use memory::MemorySource;

use serde_json::Value;

use crate::column::ResolvedField;
use crate::errors::{GridError, GridResult};
use crate::filter::Condition;
use crate::sort::SortKey;

/// Model metadata queries
pub trait ModelLookup {
    /// Whether the backend knows a container by this canonical name
    fn has_container(&self, name: &str) -> bool;

    /// Label-to-code map for an enumerated field. `Some` classifies the
    /// field as enumerated; `None` as plain text.
    fn enum_labels(&self, field: &ResolvedField) -> Option<Vec<(String, i64)>>;
}

/// Record collection operations required by the pipeline
pub trait DataSource: ModelLookup {
    /// Fetches the raw, unsorted, unfiltered collection
    fn raw_records(&self) -> GridResult<Vec<Value>> {
        Err(GridError::unimplemented("raw_records"))
    }

    /// Keeps the records matching the condition tree
    fn filter(&self, _records: Vec<Value>, _condition: &Condition) -> GridResult<Vec<Value>> {
        Err(GridError::unimplemented("filter"))
    }

    /// Orders the records by the given keys, primary first, stable on ties
    fn order(&self, _records: Vec<Value>, _keys: &[SortKey]) -> GridResult<Vec<Value>> {
        Err(GridError::unimplemented("order"))
    }

    /// Pager windowing mechanism (1-based page)
    fn pager_window(
        &self,
        _records: Vec<Value>,
        _page: usize,
        _per_page: usize,
    ) -> GridResult<Vec<Value>> {
        Err(GridError::unimplemented("pager_window"))
    }

    /// Windowed-page mechanism (1-based page)
    fn windowed_page(
        &self,
        _records: Vec<Value>,
        _page: usize,
        _per_page: usize,
    ) -> GridResult<Vec<Value>> {
        Err(GridError::unimplemented("windowed_page"))
    }

    /// Transforms records into the outbound row shape
    fn rows(&self, _records: &[Value]) -> GridResult<Vec<Value>> {
        Err(GridError::unimplemented("rows"))
    }
}
