//! Request wire types and validation

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{GridError, GridResult};

/// Default page length when the request omits one
const DEFAULT_PAGE_LENGTH: i64 = 10;

/// Sentinel page length that disables pagination
pub const UNBOUNDED: i64 = -1;

/// A declared column as sent by the client, immutable once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Position of the column in the client's display
    pub display_index: usize,
    /// Declared descriptor (the wire `data` attribute)
    pub descriptor: String,
    pub searchable: bool,
    pub orderable: bool,
    /// Per-column search value, absent when blank or whitespace-only
    pub search_term: Option<String>,
}

/// One requested sort spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParam {
    /// Display index of the column to sort by
    pub column_index: usize,
    /// Raw requested direction, normalized later
    pub direction: String,
}

/// A parsed grid fetch request, built once per inbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub draw: i64,
    /// Global search phrase, absent when blank
    pub global_search: Option<String>,
    pub columns: Vec<ColumnSpec>,
    pub sort_specs: Vec<SortParam>,
    pub page_start: i64,
    /// `-1` disables pagination
    pub page_length: i64,
}

impl SearchRequest {
    /// Parses a request from a JSON string
    pub fn parse(json: &str) -> GridResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GridError::InvalidRequest(format!("invalid JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Parses a request from a JSON value
    pub fn from_value(value: &Value) -> GridResult<Self> {
        let raw: RawGrid = serde_json::from_value(value.clone())
            .map_err(|e| GridError::InvalidRequest(e.to_string()))?;

        let columns = raw
            .columns
            .map(Indexed::into_ordered)
            .unwrap_or_default()
            .into_iter()
            .map(|(display_index, col)| ColumnSpec {
                display_index,
                descriptor: col.data.unwrap_or_default(),
                searchable: col.searchable.is_some_and(|b| b.as_bool()),
                orderable: col.orderable.is_some_and(|b| b.as_bool()),
                search_term: col
                    .search
                    .and_then(|s| s.value)
                    .filter(|v| !v.trim().is_empty()),
            })
            .collect();

        let sort_specs = raw
            .order
            .map(Indexed::into_ordered)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(_, item)| {
                // Entries without a usable column index are dropped, not errors
                let column_index = item.column?.as_i64()?;
                if column_index < 0 {
                    return None;
                }
                Some(SortParam {
                    column_index: column_index as usize,
                    direction: item.dir.unwrap_or_default(),
                })
            })
            .collect();

        Ok(SearchRequest {
            draw: raw.draw.and_then(|v| v.as_i64()).unwrap_or(0),
            global_search: raw
                .search
                .and_then(|s| s.value)
                .filter(|v| !v.trim().is_empty()),
            columns,
            sort_specs,
            page_start: raw.start.and_then(|v| v.as_i64()).unwrap_or(0),
            page_length: raw
                .length
                .and_then(|v| v.as_i64())
                .unwrap_or(DEFAULT_PAGE_LENGTH),
        })
    }

    /// Whether any sort spec was requested
    pub fn has_sort(&self) -> bool {
        !self.sort_specs.is_empty()
    }

    /// Whether any search term is present, global or per-column
    pub fn has_search(&self) -> bool {
        self.global_search.is_some() || self.columns.iter().any(|c| c.search_term.is_some())
    }

    /// Whether pagination is disabled for this request
    pub fn is_unbounded(&self) -> bool {
        self.page_length == UNBOUNDED
    }
}

/// Integer that may arrive as a JSON number or string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum IntParam {
    Int(i64),
    Str(String),
}

impl IntParam {
    fn as_i64(&self) -> Option<i64> {
        match self {
            IntParam::Int(n) => Some(*n),
            IntParam::Str(s) => s.trim().parse().ok(),
        }
    }
}

/// Boolean that may arrive as a JSON bool or string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BoolParam {
    Bool(bool),
    Str(String),
}

impl BoolParam {
    fn as_bool(&self) -> bool {
        match self {
            BoolParam::Bool(b) => *b,
            BoolParam::Str(s) => s == "true",
        }
    }
}

/// A section that may arrive as an array or a numeric-keyed map
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Indexed<T> {
    List(Vec<T>),
    Map(BTreeMap<String, T>),
}

impl<T> Indexed<T> {
    /// Entries paired with their display index, in numeric index order.
    /// Map keys that are not indices are dropped.
    fn into_ordered(self) -> Vec<(usize, T)> {
        match self {
            Indexed::List(items) => items.into_iter().enumerate().collect(),
            Indexed::Map(map) => {
                let mut entries: Vec<(usize, T)> = map
                    .into_iter()
                    .filter_map(|(key, item)| Some((key.parse().ok()?, item)))
                    .collect();
                entries.sort_by_key(|(index, _)| *index);
                entries
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawSearch {
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawColumn {
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    searchable: Option<BoolParam>,
    #[serde(default)]
    orderable: Option<BoolParam>,
    #[serde(default)]
    search: Option<RawSearch>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawOrder {
    #[serde(default)]
    column: Option<IntParam>,
    #[serde(default)]
    dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawGrid {
    #[serde(default)]
    draw: Option<IntParam>,
    #[serde(default)]
    search: Option<RawSearch>,
    #[serde(default)]
    columns: Option<Indexed<RawColumn>>,
    #[serde(default)]
    order: Option<Indexed<RawOrder>>,
    #[serde(default)]
    start: Option<IntParam>,
    #[serde(default)]
    length: Option<IntParam>,
}
