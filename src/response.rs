//! Outbound reply envelope
//!
//! Wraps pipeline output with the draw token and row counts the client
//! needs to reconcile out-of-order replies and size its pager.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply envelope for one grid fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridResponse {
    /// Client draw token, echoed back
    pub draw: i64,
    /// Count of the raw, unfiltered collection
    #[serde(rename = "recordsTotal")]
    pub records_total: u64,
    /// Count after filtering, before windowing
    #[serde(rename = "recordsFiltered")]
    pub records_filtered: u64,
    /// Ordered page of transformed rows
    pub data: Vec<Value>,
}

impl GridResponse {
    pub fn new(draw: i64, records_total: u64, records_filtered: u64, data: Vec<Value>) -> Self {
        Self {
            draw,
            records_total,
            records_filtered,
            data,
        }
    }

    /// Convert to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("GridResponse serialization cannot fail")
    }
}
