//! Sort key construction

use crate::column::{ResolvedField, Resolver};
use crate::errors::{GridError, GridResult};
use crate::request::SearchRequest;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Normalizes a requested direction. Case-insensitive `asc`/`desc`;
    /// anything else defaults to ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One key of a multi-key sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: ResolvedField,
    pub direction: SortDirection,
}

/// Builds ordered sort keys from requested sort specs
pub struct SortBuilder<'a> {
    sortable: &'a [String],
}

impl<'a> SortBuilder<'a> {
    pub fn new(sortable: &'a [String]) -> Self {
        Self { sortable }
    }

    /// Builds the ordered key list for a request.
    ///
    /// The index space of a sort spec is the subset of request columns
    /// flagged orderable: the position of the requested display index within
    /// that subset selects the declared sortable descriptor. Descriptors are
    /// resolved primary-then-fallback; failure is fatal for the request.
    pub fn keys(
        &self,
        request: &SearchRequest,
        resolver: &mut Resolver<'_>,
    ) -> GridResult<Vec<SortKey>> {
        let orderable: Vec<usize> = request
            .columns
            .iter()
            .filter(|col| col.orderable)
            .map(|col| col.display_index)
            .collect();

        let mut keys = Vec::with_capacity(request.sort_specs.len());
        for spec in &request.sort_specs {
            let position = orderable
                .iter()
                .position(|&index| index == spec.column_index)
                .ok_or_else(|| {
                    GridError::InvalidRequest(format!(
                        "order references column {} which is not orderable",
                        spec.column_index
                    ))
                })?;
            let descriptor = self.sortable.get(position).ok_or_else(|| {
                GridError::InvalidRequest(format!(
                    "no sortable descriptor declared at position {position}"
                ))
            })?;
            let resolution = resolver.resolve(descriptor)?;
            keys.push(SortKey {
                field: resolution.field,
                direction: SortDirection::parse(&spec.direction),
            });
        }
        Ok(keys)
    }
}
