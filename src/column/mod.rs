//! Column descriptor resolution
//!
//! Maps a declared column descriptor to a backend field path with a
//! two-phase fallback:
//!
//! 1. **Primary**: the descriptor is already a qualified `Container.field`
//!    path usable directly.
//! 2. **Fallback**: legacy dotted notation `container_label.field`, where the
//!    lowercase, underscore-separated (typically plural) label is converted
//!    to the canonical singular container name. Emits one deprecation notice
//!    identifying the calling site.
//!
//! Resolution failure after both phases means a misconfigured declared
//! column and is fatal, never retried.

mod errors;
mod naming;
mod resolver;

pub use errors::ColumnResolutionError;
pub use naming::{container_name, singularize};
pub use resolver::{ResolvedField, Resolution, Resolver, Strategy};
