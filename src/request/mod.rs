//! Inbound grid request parsing
//!
//! Parses the wire shape sent by an interactive grid widget into an
//! immutable [`SearchRequest`]. Parsing is lenient the way grid clients
//! require: integers may arrive as strings, booleans as `"true"`/`"false"`,
//! and columns/order as either arrays or numeric-keyed maps. Absent or
//! malformed search and sort sections mean "no predicate / no sort", never
//! an error.

mod request;

pub use request::{ColumnSpec, SearchRequest, SortParam, UNBOUNDED};
