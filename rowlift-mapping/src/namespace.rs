//! Prefixed-name resolution
//!
//! Every resolution site in the engine goes through
//! [`NamespaceRegistry::resolve`], so the `prefix:term` parsing rules
//! live in exactly one place.

use crate::error::{MappingError, MappingResult};
use std::collections::BTreeMap;

/// Registry of prefix → base-URI bindings
///
/// Built once from the configuration before row processing begins and
/// read-only thereafter, so it is safely shared across workers.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    prefixes: BTreeMap<String, String>,
}

impl NamespaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a prefix table
    pub fn from_prefixes(prefixes: &BTreeMap<String, String>) -> Self {
        Self {
            prefixes: prefixes.clone(),
        }
    }

    /// Register a prefix binding
    pub fn register(&mut self, prefix: impl Into<String>, base: impl Into<String>) {
        self.prefixes.insert(prefix.into(), base.into());
    }

    /// The full prefix table, for serializer namespace declarations
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    /// Expand a `prefix:term` reference to a full identifier
    ///
    /// The prefix is the text before the FIRST colon; the term substring
    /// after it is concatenated onto the registered base URI without
    /// further validation or escaping.
    ///
    /// Fails with [`MappingError::MalformedReference`] when the input has
    /// no colon or the colon is the first or last character, and with
    /// [`MappingError::UnknownPrefix`] when the prefix is not registered.
    pub fn resolve(&self, reference: &str) -> MappingResult<String> {
        let colon = reference
            .find(':')
            .ok_or_else(|| MappingError::MalformedReference(reference.to_string()))?;
        if colon == 0 || colon == reference.len() - 1 {
            return Err(MappingError::MalformedReference(reference.to_string()));
        }

        let (prefix, term) = (&reference[..colon], &reference[colon + 1..]);
        let base = self
            .prefixes
            .get(prefix)
            .ok_or_else(|| MappingError::UnknownPrefix {
                prefix: prefix.to_string(),
                reference: reference.to_string(),
            })?;

        Ok(format!("{}{}", base, term))
    }

    /// Expand a datatype reference, which may be an absolute IRI
    ///
    /// References containing a scheme separator (`://`) are passed
    /// through untouched; everything else resolves as a prefixed name.
    pub fn resolve_datatype(&self, reference: &str) -> MappingResult<String> {
        if reference.contains("://") {
            Ok(reference.to_string())
        } else {
            self.resolve(reference)
        }
    }
}
