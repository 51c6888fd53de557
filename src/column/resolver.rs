//! Two-phase column descriptor resolution
//!
//! A `Resolver` lives for a single request: it caches resolutions so every
//! descriptor is resolved at most once per path per request, and the
//! deprecation notice for a legacy descriptor fires at most once per request.
//! The sort and filter paths cache separately because they apply different
//! strategies to the same descriptor.

use std::collections::{HashMap, HashSet};
use std::panic::Location;

use crate::observe::Logger;
use crate::source::ModelLookup;

use super::errors::ColumnResolutionError;
use super::naming;

/// A backend-addressable field path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedField {
    /// Canonical container name (`User`)
    pub container: String,
    /// Field name inside the container (`name`)
    pub field: String,
}

impl ResolvedField {
    pub fn new(container: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            field: field.into(),
        }
    }

    /// Qualified `Container.field` form
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.container, self.field)
    }
}

/// Which resolution phase produced the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Descriptor was already a qualified path
    Primary,
    /// Descriptor was legacy dotted notation
    Fallback,
}

/// Tagged resolution outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub field: ResolvedField,
    pub strategy: Strategy,
}

/// Per-request descriptor resolver
pub struct Resolver<'a> {
    model: &'a dyn ModelLookup,
    sort_cache: HashMap<String, Resolution>,
    search_cache: HashMap<String, Resolution>,
    noticed: HashSet<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(model: &'a dyn ModelLookup) -> Self {
        Self {
            model,
            sort_cache: HashMap::new(),
            search_cache: HashMap::new(),
            noticed: HashSet::new(),
        }
    }

    /// Resolves a sort-path descriptor: primary first, then the legacy
    /// fallback. Only exhaustion of both phases is an error.
    #[track_caller]
    pub fn resolve(&mut self, descriptor: &str) -> Result<Resolution, ColumnResolutionError> {
        if let Some(hit) = self.sort_cache.get(descriptor) {
            return Ok(hit.clone());
        }
        let caller = Location::caller();

        let resolution = if let Some(field) = self.primary(descriptor) {
            Resolution {
                field,
                strategy: Strategy::Primary,
            }
        } else if let Some(field) = self.legacy(descriptor) {
            self.notice(descriptor, caller);
            Resolution {
                field,
                strategy: Strategy::Fallback,
            }
        } else {
            return Err(ColumnResolutionError::new(descriptor));
        };

        self.sort_cache
            .insert(descriptor.to_string(), resolution.clone());
        Ok(resolution)
    }

    /// Resolves a filter-path descriptor. A leading lowercase character is a
    /// signal the descriptor is already in legacy form, so the legacy
    /// derivation is constructed directly; otherwise only the primary
    /// strategy applies. This asymmetry with [`Resolver::resolve`] is
    /// deliberate.
    #[track_caller]
    pub fn resolve_search(
        &mut self,
        descriptor: &str,
    ) -> Result<Resolution, ColumnResolutionError> {
        if let Some(hit) = self.search_cache.get(descriptor) {
            return Ok(hit.clone());
        }
        let caller = Location::caller();

        let legacy_hint = descriptor
            .chars()
            .next()
            .is_some_and(|c| !c.is_uppercase());

        let resolution = if legacy_hint {
            let field = self
                .legacy(descriptor)
                .ok_or_else(|| ColumnResolutionError::new(descriptor))?;
            self.notice(descriptor, caller);
            Resolution {
                field,
                strategy: Strategy::Fallback,
            }
        } else {
            let field = self
                .primary(descriptor)
                .ok_or_else(|| ColumnResolutionError::new(descriptor))?;
            Resolution {
                field,
                strategy: Strategy::Primary,
            }
        };

        self.search_cache
            .insert(descriptor.to_string(), resolution.clone());
        Ok(resolution)
    }

    /// Number of deprecation notices emitted by this resolver
    pub fn fallback_notices(&self) -> usize {
        self.noticed.len()
    }

    fn primary(&self, descriptor: &str) -> Option<ResolvedField> {
        let (container, field) = split_descriptor(descriptor)?;
        if self.model.has_container(container) {
            Some(ResolvedField::new(container, field))
        } else {
            None
        }
    }

    fn legacy(&self, descriptor: &str) -> Option<ResolvedField> {
        let (label, field) = split_descriptor(descriptor)?;
        let container = naming::container_name(label);
        if self.model.has_container(&container) {
            Some(ResolvedField::new(container, field))
        } else {
            None
        }
    }

    fn notice(&mut self, descriptor: &str, caller: &Location<'_>) {
        if !self.noticed.insert(descriptor.to_string()) {
            return;
        }
        Logger::warn(
            "LEGACY_COLUMN_NOTATION",
            &[
                ("column", descriptor),
                ("caller", &caller.to_string()),
                ("hint", "declare the qualified Container.field form instead"),
            ],
        );
    }
}

fn split_descriptor(descriptor: &str) -> Option<(&str, &str)> {
    let (container, field) = descriptor.split_once('.')?;
    if container.is_empty() || field.is_empty() || field.contains('.') {
        return None;
    }
    Some((container, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeModel {
        containers: Vec<&'static str>,
    }

    impl ModelLookup for FakeModel {
        fn has_container(&self, name: &str) -> bool {
            self.containers.contains(&name)
        }

        fn enum_labels(&self, _field: &ResolvedField) -> Option<Vec<(String, i64)>> {
            None
        }
    }

    fn model() -> FakeModel {
        FakeModel {
            containers: vec!["User", "Post", "BlogPost"],
        }
    }

    #[test]
    fn test_primary_resolution() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        let res = resolver.resolve("User.name").unwrap();
        assert_eq!(res.strategy, Strategy::Primary);
        assert_eq!(res.field, ResolvedField::new("User", "name"));
        assert_eq!(resolver.fallback_notices(), 0);
    }

    #[test]
    fn test_fallback_resolution() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        let res = resolver.resolve("posts.title").unwrap();
        assert_eq!(res.strategy, Strategy::Fallback);
        assert_eq!(res.field, ResolvedField::new("Post", "title"));
        assert_eq!(resolver.fallback_notices(), 1);
    }

    #[test]
    fn test_legacy_equals_primary_target() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        let legacy = resolver.resolve("posts.title").unwrap().field;
        let direct = resolver.resolve("Post.title").unwrap().field;
        assert_eq!(legacy, direct);
    }

    #[test]
    fn test_fallback_notice_once_per_request() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        resolver.resolve("blog_posts.title").unwrap();
        resolver.resolve("blog_posts.title").unwrap();
        resolver.resolve_search("blog_posts.title").unwrap();
        assert_eq!(resolver.fallback_notices(), 1);
    }

    #[test]
    fn test_both_strategies_exhausted() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        let err = resolver.resolve("ghosts.name").unwrap_err();
        assert_eq!(err.descriptor(), "ghosts.name");
    }

    #[test]
    fn test_search_path_lowercase_goes_straight_to_legacy() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        let res = resolver.resolve_search("users.name").unwrap();
        assert_eq!(res.strategy, Strategy::Fallback);
        assert_eq!(res.field, ResolvedField::new("User", "name"));
        assert_eq!(resolver.fallback_notices(), 1);
    }

    #[test]
    fn test_search_path_uppercase_has_no_fallback() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        // Sort path recovers via fallback; search path does not.
        assert!(resolver.resolve_search("Posts.title").is_err());
        let mut resolver = Resolver::new(&model);
        assert_eq!(
            resolver.resolve("Posts.title").unwrap().strategy,
            Strategy::Fallback
        );
    }

    #[test]
    fn test_sort_resolution_does_not_soften_search_path() {
        let model = model();
        let mut resolver = Resolver::new(&model);

        // The sort path recovers "Posts.title" via the fallback, but the
        // search path must still fail it primary-only within the same request.
        assert_eq!(
            resolver.resolve("Posts.title").unwrap().strategy,
            Strategy::Fallback
        );
        assert!(resolver.resolve_search("Posts.title").is_err());
    }

    #[test]
    fn test_unqualified_descriptor_fails() {
        let model = model();
        let mut resolver = Resolver::new(&model);
        assert!(resolver.resolve("name").is_err());
        assert!(resolver.resolve(".name").is_err());
        assert!(resolver.resolve("User.").is_err());
    }
}
