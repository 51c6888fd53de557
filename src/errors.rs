//! # Grid Errors
//!
//! Top-level error types for the grid pipeline.
//!
//! All fatal errors propagate to the caller uncaught; the only internal
//! retry anywhere in the crate is the two-phase column resolution fallback,
//! which is not an error until both phases are exhausted.

use thiserror::Error;

pub use crate::column::ColumnResolutionError;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors surfaced by the grid pipeline
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// A required collaborator hook has no implementation
    #[error("collaborator hook `{0}` is not implemented")]
    UnimplementedHook(&'static str),

    /// Both column resolution strategies failed
    #[error(transparent)]
    ColumnResolution(#[from] ColumnResolutionError),

    /// Request payload could not be parsed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Unrecognized backend adapter selector
    #[error("unknown backend adapter `{0}`")]
    UnknownAdapter(String),

    /// Unrecognized pagination strategy selector
    #[error("unknown pagination strategy `{0}`")]
    UnknownPaginator(String),

    /// Label-match pattern failed to compile
    #[error("invalid label pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl GridError {
    /// Shorthand for the unimplemented-hook variant
    pub fn unimplemented(hook: &'static str) -> Self {
        GridError::UnimplementedHook(hook)
    }
}
