//! Column resolution errors

use thiserror::Error;

/// Both resolution strategies failed for a declared column descriptor.
///
/// This is a configuration defect in the declared column list, not a request
/// problem, and is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve column descriptor `{descriptor}`")]
pub struct ColumnResolutionError {
    descriptor: String,
}

impl ColumnResolutionError {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    /// The descriptor that failed to resolve
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}
