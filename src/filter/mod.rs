//! Search-term compilation
//!
//! Compiles the request's global search phrase and per-column search values
//! into a composable predicate tree.
//!
//! # Composition rules (strict)
//!
//! - Global search: split on whitespace into atoms; OR across searchable
//!   columns per atom, AND across atoms.
//! - Composite search: AND across the per-column conditions of declared
//!   searchable columns, in declared order.
//! - Final condition = global AND composite; either side may be absent.
//!
//! Column classification (plain text vs. enumerated) is queried from the
//! model collaborator, never computed here.

mod builder;
mod eval;
mod predicate;

pub use builder::{matching_codes, FilterBuilder};
pub use eval::ConditionEvaluator;
pub use predicate::Condition;
