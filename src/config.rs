//! Construction-time configuration
//!
//! An explicit configuration value handed to [`crate::table::GridTable`] at
//! construction. Lifetime is scoped to the handling instance; there is no
//! process-wide configuration state.

use crate::errors::{GridError, GridResult};

/// Backend adapter identifier, used to select the text-cast type for
/// substring comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    Oracle,
    Postgres,
    Mysql,
    Sqlite,
}

impl Adapter {
    /// Parse an adapter selector. Unrecognized selectors fail fast at
    /// construction rather than producing an unspecified cast type later.
    pub fn from_name(name: &str) -> GridResult<Self> {
        match name {
            "oracle" => Ok(Adapter::Oracle),
            "postgres" => Ok(Adapter::Postgres),
            "mysql" => Ok(Adapter::Mysql),
            "sqlite" => Ok(Adapter::Sqlite),
            other => Err(GridError::UnknownAdapter(other.to_string())),
        }
    }

    /// Text type a field is cast to before substring comparison.
    pub fn text_cast(&self) -> &'static str {
        match self {
            Adapter::Oracle => "VARCHAR2(4000)",
            Adapter::Postgres => "VARCHAR",
            Adapter::Mysql => "CHAR",
            Adapter::Sqlite => "TEXT",
        }
    }
}

/// Pagination strategy selector. Chosen once at construction, never per
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorKind {
    /// Local offset/limit windowing
    Offset,
    /// Delegate to the source's pager mechanism
    Pager,
    /// Delegate to the source's windowed-page mechanism
    Windowed,
}

impl PaginatorKind {
    pub fn from_name(name: &str) -> GridResult<Self> {
        match name {
            "offset" => Ok(PaginatorKind::Offset),
            "pager" => Ok(PaginatorKind::Pager),
            "windowed" => Ok(PaginatorKind::Windowed),
            other => Err(GridError::UnknownPaginator(other.to_string())),
        }
    }
}

/// Configuration for one grid handling instance
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    pub adapter: Adapter,
    pub paginator: PaginatorKind,
}

impl GridConfig {
    pub fn new(adapter: Adapter, paginator: PaginatorKind) -> Self {
        Self { adapter, paginator }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            adapter: Adapter::Postgres,
            paginator: PaginatorKind::Offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_cast_table() {
        assert_eq!(Adapter::Oracle.text_cast(), "VARCHAR2(4000)");
        assert_eq!(Adapter::Postgres.text_cast(), "VARCHAR");
        assert_eq!(Adapter::Mysql.text_cast(), "CHAR");
        assert_eq!(Adapter::Sqlite.text_cast(), "TEXT");
    }

    #[test]
    fn test_adapter_from_name() {
        assert_eq!(Adapter::from_name("sqlite").unwrap(), Adapter::Sqlite);
    }

    #[test]
    fn test_unknown_adapter_fails_fast() {
        let err = Adapter::from_name("mongodb").unwrap_err();
        assert!(err.to_string().contains("mongodb"));
    }

    #[test]
    fn test_unknown_paginator_fails_fast() {
        assert!(PaginatorKind::from_name("cursor").is_err());
        assert_eq!(
            PaginatorKind::from_name("pager").unwrap(),
            PaginatorKind::Pager
        );
    }
}
