//! Filter predicate tree
//!
//! Tagged variants selected by a pure classification step; composition is
//! explicit AND/OR nodes folded left-to-right so evaluation order is
//! deterministic.

use crate::column::ResolvedField;

/// A composable filter condition
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-insensitive substring containment against the field cast to the
    /// adapter's text type
    Contains {
        field: ResolvedField,
        value: String,
        cast: &'static str,
    },
    /// Field-in-codes membership for an enumerated column. An empty code
    /// set matches nothing, it is not "no predicate".
    MemberOf {
        field: ResolvedField,
        codes: Vec<i64>,
    },
    /// Both sides must match
    And(Box<Condition>, Box<Condition>),
    /// Either side may match
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn and(self, other: Condition) -> Condition {
        Condition::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Condition) -> Condition {
        Condition::Or(Box::new(self), Box::new(other))
    }

    /// Left-to-right AND fold; empty input yields no condition
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Option<Condition> {
        conditions.into_iter().reduce(Condition::and)
    }

    /// Left-to-right OR fold; empty input yields no condition
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Option<Condition> {
        conditions.into_iter().reduce(Condition::or)
    }
}
