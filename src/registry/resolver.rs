//! Type-name resolution with caching and fuzzy recovery
//!
//! Resolution is case-insensitive and consults a configurable alias table
//! before giving up. Results are cached for the process lifetime: the
//! cache is append-only, first resolution wins, and concurrent readers
//! never block each other. The underlying type universe must not change
//! after the first resolution.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;
use tracing::debug;

use super::descriptor::TypeDescriptor;
use super::provider::TypeUniverse;
use super::suggest::rank_candidates;
use super::type_name::TypeName;

/// Number of approximate matches carried by a `NotFound` error
const SUGGESTION_LIMIT: usize = 3;

/// Failure to turn a name string into a type descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeResolutionError {
    /// No known type or alias matched the requested name.
    #[error("type `{name}` not found; closest matches: {}", .suggestions.join(", "))]
    NotFound {
        /// The name as requested by the caller
        name: String,
        /// Known names ranked by ascending edit distance
        suggestions: Vec<String>,
    },
}

/// Resolves type-name strings against the host's type universe.
///
/// Construct one per process and share it; the descriptor cache lives for
/// the resolver's lifetime and is never invalidated.
pub struct TypeResolver {
    universe: Arc<dyn TypeUniverse>,
    /// Lowercased alias to canonical name
    aliases: HashMap<String, TypeName>,
    /// Alias display names, kept for suggestion candidates
    alias_names: Vec<String>,
    /// Name suffixes tried on a miss (`Box` + rule `Collider` finds `BoxCollider`)
    suffix_rules: Vec<String>,
    cache: RwLock<HashMap<String, Arc<TypeDescriptor>>>,
}

impl TypeResolver {
    /// Create a resolver over the given universe with no aliases.
    #[must_use]
    pub fn new(universe: Arc<dyn TypeUniverse>) -> Self {
        Self {
            universe,
            aliases: HashMap::new(),
            alias_names: Vec::new(),
            suffix_rules: Vec::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Register an alias for a canonical type name.
    ///
    /// Aliases are matched case-insensitively, after exact names and
    /// before suffix rules.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<TypeName>) -> Self {
        let alias = alias.into();
        self.aliases
            .insert(alias.to_ascii_lowercase(), canonical.into());
        self.alias_names.push(alias);
        self
    }

    /// Register a suffix tried when a name misses outright.
    ///
    /// With the rule `Collider`, a request for `Box` resolves to
    /// `BoxCollider` when that canonical name exists.
    #[must_use]
    pub fn with_suffix_rule(mut self, suffix: impl Into<String>) -> Self {
        self.suffix_rules.push(suffix.into());
        self
    }

    /// Resolve a free-text name to its cached type descriptor.
    ///
    /// # Errors
    ///
    /// [`TypeResolutionError::NotFound`] when neither a canonical name,
    /// an alias, nor a suffix rule matches; the error carries the
    /// closest known names ranked by edit distance.
    pub fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>, TypeResolutionError> {
        let key = name.to_ascii_lowercase();

        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(descriptor) = cache.get(&key) {
                return Ok(Arc::clone(descriptor));
            }
        }

        debug!("type cache miss for `{name}`");
        let canonical = self.find_canonical(&key);
        let descriptor = canonical
            .and_then(|canonical| self.universe.describe(&canonical))
            .ok_or_else(|| self.not_found(name))?;

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let entry = cache
            .entry(key)
            .or_insert_with(|| Arc::new(descriptor));
        Ok(Arc::clone(entry))
    }

    /// Canonical name for a lowercased request, if any form matches.
    fn find_canonical(&self, key: &str) -> Option<TypeName> {
        let names = self.universe.type_names();
        if let Some(exact) = names.iter().find(|n| n.normalized() == key) {
            return Some(exact.clone());
        }
        if let Some(aliased) = self.aliases.get(key) {
            debug!("alias `{key}` resolved to `{aliased}`");
            return Some(aliased.clone());
        }
        for suffix in &self.suffix_rules {
            let completed = format!("{key}{}", suffix.to_ascii_lowercase());
            if let Some(hit) = names.iter().find(|n| n.normalized() == completed) {
                debug!("suffix rule `{suffix}` completed `{key}` to `{hit}`");
                return Some(hit.clone());
            }
        }
        None
    }

    fn not_found(&self, name: &str) -> TypeResolutionError {
        let names = self.universe.type_names();
        let candidates = names
            .iter()
            .map(TypeName::as_str)
            .chain(self.alias_names.iter().map(String::as_str));
        TypeResolutionError::NotFound {
            name: name.to_string(),
            suggestions: rank_candidates(name, candidates, SUGGESTION_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_support::sample_universe;

    fn resolver() -> TypeResolver {
        TypeResolver::new(sample_universe())
            .with_alias("body", "Rigidbody")
            .with_suffix_rule("Collider")
    }

    #[test]
    fn resolves_exact_and_case_insensitive() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("Rigidbody").unwrap().name().as_str(),
            "Rigidbody"
        );
        assert_eq!(
            resolver.resolve("rigidbody").unwrap().name().as_str(),
            "Rigidbody"
        );
    }

    #[test]
    fn resolves_through_alias_and_suffix_rule() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("BODY").unwrap().name().as_str(), "Rigidbody");
        assert_eq!(
            resolver.resolve("Box").unwrap().name().as_str(),
            "BoxCollider"
        );
    }

    #[test]
    fn caches_first_resolution() {
        let resolver = resolver();
        let first = resolver.resolve("Transform").unwrap();
        let again = resolver.resolve("Transform").unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let lower = resolver.resolve("transform").unwrap();
        assert_eq!(lower.name(), first.name());
    }

    #[test]
    fn misspelling_reports_ranked_suggestions() {
        let resolver = resolver();
        let err = resolver.resolve("Rigidboddy").unwrap_err();
        let TypeResolutionError::NotFound { name, suggestions } = err;
        assert_eq!(name, "Rigidboddy");
        assert_eq!(suggestions.first().map(String::as_str), Some("Rigidbody"));
        assert!(suggestions.len() <= 3);
    }
}
