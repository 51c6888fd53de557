//! In-memory data source
//!
//! Executable reference for the collaborator contract: JSON rows, declared
//! containers, enum label maps. Filtering evaluates the condition tree
//! directly; ordering is a stable multi-key sort with deterministic
//! cross-type comparison.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::column::ResolvedField;
use crate::errors::GridResult;
use crate::filter::{Condition, ConditionEvaluator};
use crate::sort::{SortDirection, SortKey};

use super::{DataSource, ModelLookup};

/// In-memory record collection with model metadata
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    containers: BTreeSet<String>,
    enums: HashMap<String, Vec<(String, i64)>>,
    records: Vec<Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, name: &str) -> Self {
        self.containers.insert(name.to_string());
        self
    }

    /// Declares a field of a container as enumerated, with its label-to-code
    /// map in declaration order.
    pub fn with_enum(mut self, container: &str, field: &str, labels: &[(&str, i64)]) -> Self {
        self.containers.insert(container.to_string());
        self.enums.insert(
            format!("{container}.{field}"),
            labels
                .iter()
                .map(|(label, code)| (label.to_string(), *code))
                .collect(),
        );
        self
    }

    pub fn with_records(mut self, records: Vec<Value>) -> Self {
        self.records = records;
        self
    }

    /// Deterministic cross-type value comparison for sorting:
    /// missing < null < bool < number < string; natural order within a type.
    fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        fn type_rank(value: &Value) -> u8 {
            match value {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Number(_) => 2,
                Value::String(_) => 3,
                Value::Array(_) => 4,
                Value::Object(_) => 5,
            }
        }

        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => {
                let rank = type_rank(a).cmp(&type_rank(b));
                if rank != Ordering::Equal {
                    return rank;
                }
                match (a, b) {
                    (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
                    (Value::Number(x), Value::Number(y)) => {
                        let x = x.as_f64().unwrap_or(0.0);
                        let y = y.as_f64().unwrap_or(0.0);
                        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
                    }
                    (Value::String(x), Value::String(y)) => x.cmp(y),
                    _ => Ordering::Equal,
                }
            }
        }
    }

    fn window(records: Vec<Value>, page: usize, per_page: usize) -> Vec<Value> {
        if per_page == 0 {
            return Vec::new();
        }
        let offset = page.saturating_sub(1) * per_page;
        records.into_iter().skip(offset).take(per_page).collect()
    }
}

impl ModelLookup for MemorySource {
    fn has_container(&self, name: &str) -> bool {
        self.containers.contains(name)
    }

    fn enum_labels(&self, field: &ResolvedField) -> Option<Vec<(String, i64)>> {
        self.enums.get(&field.qualified()).cloned()
    }
}

impl DataSource for MemorySource {
    fn raw_records(&self) -> GridResult<Vec<Value>> {
        Ok(self.records.clone())
    }

    fn filter(&self, records: Vec<Value>, condition: &Condition) -> GridResult<Vec<Value>> {
        Ok(records
            .into_iter()
            .filter(|row| ConditionEvaluator::matches(row, condition))
            .collect())
    }

    fn order(&self, mut records: Vec<Value>, keys: &[SortKey]) -> GridResult<Vec<Value>> {
        records.sort_by(|a, b| {
            for key in keys {
                let ordering =
                    Self::compare_values(a.get(&key.field.field), b.get(&key.field.field));
                let ordering = match key.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
        Ok(records)
    }

    fn pager_window(
        &self,
        records: Vec<Value>,
        page: usize,
        per_page: usize,
    ) -> GridResult<Vec<Value>> {
        Ok(Self::window(records, page, per_page))
    }

    fn windowed_page(
        &self,
        records: Vec<Value>,
        page: usize,
        per_page: usize,
    ) -> GridResult<Vec<Value>> {
        Ok(Self::window(records, page, per_page))
    }

    fn rows(&self, records: &[Value]) -> GridResult<Vec<Value>> {
        Ok(records.to_vec())
    }
}
