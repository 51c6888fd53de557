//! Observability for gridquery
//!
//! Structured JSON logging only. Observability is read-only: no side effects
//! on pipeline execution, no async, no buffering, deterministic output.

mod logger;

pub use logger::{Logger, Severity};

#[cfg(test)]
pub use logger::capture_log;
