//! In-memory condition evaluation
//!
//! Reference semantics for the backing-store capability the pipeline
//! assumes: boolean composition of substring and membership atoms. Used by
//! the in-memory source; a SQL-backed source would translate the same tree
//! instead of evaluating it here.

use serde_json::Value;

use super::predicate::Condition;

/// Evaluates conditions against JSON rows
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Checks whether a row matches the condition tree.
    ///
    /// Evaluation is left-to-right throughout, so results are deterministic
    /// for a fixed tree.
    pub fn matches(row: &Value, condition: &Condition) -> bool {
        match condition {
            Condition::And(left, right) => {
                Self::matches(row, left) && Self::matches(row, right)
            }
            Condition::Or(left, right) => {
                Self::matches(row, left) || Self::matches(row, right)
            }
            Condition::Contains { field, value, .. } => {
                match Self::text_of(row.get(&field.field)) {
                    Some(text) => text.to_lowercase().contains(&value.to_lowercase()),
                    None => false,
                }
            }
            Condition::MemberOf { field, codes } => row
                .get(&field.field)
                .and_then(Value::as_i64)
                .is_some_and(|code| codes.contains(&code)),
        }
    }

    /// Text rendering of a scalar field, standing in for the SQL text cast.
    /// Missing, null, and structured values never match.
    fn text_of(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
