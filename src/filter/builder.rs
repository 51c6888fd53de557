//! Condition building from search terms

use regex::Regex;

use crate::column::Resolver;
use crate::config::Adapter;
use crate::errors::GridResult;
use crate::request::SearchRequest;
use crate::source::ModelLookup;

use super::predicate::Condition;

/// Selects the codes of an enumerated column whose label matches the term.
///
/// The term is matched as a case-sensitive, unanchored pattern with its
/// metacharacters escaped, so matching is substring semantics. An empty term
/// matches every label.
pub fn matching_codes(labels: &[(String, i64)], term: &str) -> GridResult<Vec<i64>> {
    let pattern = Regex::new(&regex::escape(term))?;
    Ok(labels
        .iter()
        .filter(|(label, _)| pattern.is_match(label))
        .map(|(_, code)| *code)
        .collect())
}

/// Compiles search terms into filter conditions
pub struct FilterBuilder<'a, 'm> {
    resolver: &'a mut Resolver<'m>,
    model: &'m dyn ModelLookup,
    adapter: Adapter,
    searchable: &'a [String],
}

impl<'a, 'm> FilterBuilder<'a, 'm> {
    pub fn new(
        resolver: &'a mut Resolver<'m>,
        model: &'m dyn ModelLookup,
        adapter: Adapter,
        searchable: &'a [String],
    ) -> Self {
        Self {
            resolver,
            model,
            adapter,
            searchable,
        }
    }

    /// Final filter condition: global AND composite. Either side may be
    /// absent, yielding the other alone; both absent yields no condition.
    pub fn combined(&mut self, request: &SearchRequest) -> GridResult<Option<Condition>> {
        let global = match request.global_search.as_deref() {
            Some(phrase) => self.global_condition(phrase)?,
            None => None,
        };
        let composite = self.composite_condition(request)?;

        Ok(match (global, composite) {
            (Some(g), Some(c)) => Some(g.and(c)),
            (Some(g), None) => Some(g),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        })
    }

    /// Global-search condition: per atom, OR across searchable columns;
    /// AND across atoms. Empty phrase or no searchable columns yields no
    /// condition.
    pub fn global_condition(&mut self, phrase: &str) -> GridResult<Option<Condition>> {
        let searchable = self.searchable;
        let mut per_atom = Vec::new();
        for atom in phrase.split_whitespace() {
            let mut per_column = Vec::new();
            for descriptor in searchable {
                if let Some(cond) = self.column_condition(descriptor, atom)? {
                    per_column.push(cond);
                }
            }
            if let Some(cond) = Condition::any(per_column) {
                per_atom.push(cond);
            }
        }
        Ok(Condition::all(per_atom))
    }

    /// Composite condition: for each declared searchable column in order,
    /// the aligned per-column search term (if present) builds one condition;
    /// all present conditions are ANDed.
    pub fn composite_condition(&mut self, request: &SearchRequest) -> GridResult<Option<Condition>> {
        let searchable = self.searchable;
        let mut conditions = Vec::new();
        for (index, descriptor) in searchable.iter().enumerate() {
            let term = request
                .columns
                .get(index)
                .and_then(|col| col.search_term.as_deref());
            if let Some(term) = term {
                if let Some(cond) = self.column_condition(descriptor, term)? {
                    conditions.push(cond);
                }
            }
        }
        Ok(Condition::all(conditions))
    }

    /// Builds the condition for one column and term. A blank or
    /// whitespace-only term builds nothing. Classification (plain vs.
    /// enumerated) comes from the model collaborator against the resolved
    /// field.
    fn column_condition(&mut self, descriptor: &str, term: &str) -> GridResult<Option<Condition>> {
        if term.trim().is_empty() {
            return Ok(None);
        }
        let resolution = self.resolver.resolve_search(descriptor)?;
        let condition = match self.model.enum_labels(&resolution.field) {
            Some(labels) => Condition::MemberOf {
                field: resolution.field,
                codes: matching_codes(&labels, term)?,
            },
            None => Condition::Contains {
                field: resolution.field,
                value: term.to_string(),
                cast: self.adapter.text_cast(),
            },
        };
        Ok(Some(condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ResolvedField;
    use crate::request::{ColumnSpec, SearchRequest};
    use crate::source::ModelLookup;

    struct FakeModel;

    impl ModelLookup for FakeModel {
        fn has_container(&self, name: &str) -> bool {
            matches!(name, "User")
        }

        fn enum_labels(&self, field: &ResolvedField) -> Option<Vec<(String, i64)>> {
            if field.field == "status" {
                Some(vec![("active".to_string(), 0), ("inactive".to_string(), 1)])
            } else {
                None
            }
        }
    }

    fn searchable() -> Vec<String> {
        vec!["User.name".to_string(), "User.status".to_string()]
    }

    fn request(global: Option<&str>, terms: &[Option<&str>]) -> SearchRequest {
        SearchRequest {
            draw: 1,
            global_search: global.map(str::to_string),
            columns: terms
                .iter()
                .enumerate()
                .map(|(i, term)| ColumnSpec {
                    display_index: i,
                    descriptor: format!("col{i}"),
                    searchable: true,
                    orderable: true,
                    search_term: term.map(str::to_string),
                })
                .collect(),
            sort_specs: Vec::new(),
            page_start: 0,
            page_length: 10,
        }
    }

    #[test]
    fn test_matching_codes_substring() {
        let labels = vec![("active".to_string(), 0), ("inactive".to_string(), 1)];
        assert_eq!(matching_codes(&labels, "act").unwrap(), vec![0, 1]);
        assert_eq!(matching_codes(&labels, "inact").unwrap(), vec![1]);
        assert_eq!(matching_codes(&labels, "gone").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_matching_codes_empty_term_matches_all() {
        let labels = vec![("active".to_string(), 0), ("inactive".to_string(), 1)];
        assert_eq!(matching_codes(&labels, "").unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_matching_codes_case_sensitive() {
        let labels = vec![("Active".to_string(), 0)];
        assert_eq!(matching_codes(&labels, "active").unwrap(), Vec::<i64>::new());
        assert_eq!(matching_codes(&labels, "Act").unwrap(), vec![0]);
    }

    #[test]
    fn test_matching_codes_escapes_metacharacters() {
        let labels = vec![("a.b".to_string(), 0), ("axb".to_string(), 1)];
        assert_eq!(matching_codes(&labels, "a.b").unwrap(), vec![0]);
    }

    #[test]
    fn test_global_single_atom_or_across_columns() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        // "act" matches the enum label "active" (code 0) and substrings of name
        let cond = builder.global_condition("act").unwrap().unwrap();
        let expected = Condition::Contains {
            field: ResolvedField::new("User", "name"),
            value: "act".to_string(),
            cast: "VARCHAR",
        }
        .or(Condition::MemberOf {
            field: ResolvedField::new("User", "status"),
            codes: vec![0],
        });
        assert_eq!(cond, expected);
    }

    #[test]
    fn test_global_multiple_atoms_and_fold() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        let cond = builder.global_condition("act ali").unwrap().unwrap();
        assert!(matches!(cond, Condition::And(_, _)));
    }

    #[test]
    fn test_global_blank_phrase_is_no_condition() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        assert_eq!(builder.global_condition("").unwrap(), None);
        assert_eq!(builder.global_condition("   ").unwrap(), None);
    }

    #[test]
    fn test_composite_aligned_terms() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        let request = request(None, &[Some("ali"), None]);
        let cond = builder.composite_condition(&request).unwrap().unwrap();
        assert_eq!(
            cond,
            Condition::Contains {
                field: ResolvedField::new("User", "name"),
                value: "ali".to_string(),
                cast: "VARCHAR",
            }
        );
    }

    #[test]
    fn test_whitespace_only_column_term_builds_nothing() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        let request = request(None, &[Some("   "), None]);
        assert_eq!(builder.composite_condition(&request).unwrap(), None);
    }

    #[test]
    fn test_combined_global_and_composite() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        let request = request(Some("act"), &[Some("ali"), None]);
        let cond = builder.combined(&request).unwrap().unwrap();
        assert!(matches!(cond, Condition::And(_, _)));
    }

    #[test]
    fn test_combined_neither_present() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = searchable();
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        let request = request(None, &[None, None]);
        assert_eq!(builder.combined(&request).unwrap(), None);
    }

    #[test]
    fn test_enum_no_label_match_compiles_to_match_nothing() {
        let model = FakeModel;
        let mut resolver = Resolver::new(&model);
        let searchable = vec!["User.status".to_string()];
        let mut builder =
            FilterBuilder::new(&mut resolver, &model, Adapter::Postgres, &searchable);

        let cond = builder.global_condition("zzz").unwrap().unwrap();
        assert_eq!(
            cond,
            Condition::MemberOf {
                field: ResolvedField::new("User", "status"),
                codes: vec![],
            }
        );
    }
}
