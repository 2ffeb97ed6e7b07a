//! Run configuration
//!
//! The immutable document that declares how rows become statements. It
//! can be assembled programmatically or loaded from a persisted JSON
//! document with the keys `base_uri`, `class`, `id_column`, `prefixes`,
//! `mappings`, `multi_valued`, and `separator`/`separators` (plus the
//! optional `languages`, `datatypes`, and `sanitize_chars` extensions).

use crate::error::{MappingError, MappingResult};
use crate::namespace::NamespaceRegistry;
use rowlift_vocab::ns;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Split delimiter used when a multi-valued field has no configured one.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Declarative mapping from tabular rows to RDF statements
///
/// Immutable per run; built once before row processing begins. Every
/// prefix referenced by `class_ref`, a mapping property, or a datatype
/// must appear in `prefixes` — [`Configuration::validate`] checks this
/// upfront so failures surface before any row is processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Prefix prepended to every derived subject identifier
    pub base_uri: String,

    /// Prefixed name of the RDF class assigned to every subject
    #[serde(rename = "class")]
    pub class_ref: String,

    /// Row field used to derive each subject's local identifier
    pub id_column: String,

    /// Prefix → base-URI bindings
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,

    /// Source-field name → prefixed name of the target property
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,

    /// Fields whose raw value is split into multiple literals
    #[serde(default)]
    pub multi_valued: BTreeSet<String>,

    /// Per-field split delimiters; fields not listed use
    /// [`DEFAULT_SEPARATOR`]. The singular `separator` key is accepted
    /// as an alias in persisted documents.
    #[serde(default, alias = "separator")]
    pub separators: BTreeMap<String, String>,

    /// Per-field language tags; every literal of a tagged field carries
    /// the tag
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Per-field datatype references (prefixed name or absolute IRI);
    /// mutually exclusive with `languages` per field
    #[serde(default)]
    pub datatypes: BTreeMap<String, String>,

    /// Characters replaced by `_` when deriving subject identifiers
    #[serde(default = "Configuration::default_sanitize_chars")]
    pub sanitize_chars: Vec<char>,
}

impl Configuration {
    /// The default forbidden-character set for identifier sanitization:
    /// `/`, `.`, `@`, and space.
    pub fn default_sanitize_chars() -> Vec<char> {
        vec!['/', '.', '@', ' ']
    }

    /// The built-in prefix table: bibo, dcterms, schema, foaf.
    ///
    /// An explicit starting value, not process-wide state; callers may
    /// extend or replace it per run.
    pub fn default_prefixes() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("bibo".to_string(), ns::BIBO.to_string()),
            ("dcterms".to_string(), ns::DCTERMS.to_string()),
            ("schema".to_string(), ns::SCHEMA.to_string()),
            ("foaf".to_string(), ns::FOAF.to_string()),
        ])
    }

    /// Load a configuration from a JSON document.
    pub fn from_json_str(content: &str) -> MappingResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> MappingResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The split delimiter for a multi-valued field.
    pub fn separator_for(&self, field: &str) -> &str {
        self.separators
            .get(field)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Whether a field is declared multi-valued.
    pub fn is_multi(&self, field: &str) -> bool {
        self.multi_valued.contains(field)
    }

    /// Resolve every reference the configuration makes.
    ///
    /// Checks `class_ref`, each mapping property, and each datatype
    /// reference against the registry, and rejects a field configured
    /// with both a language tag and a datatype. Run this before row
    /// processing so configuration bugs never produce a partial graph.
    pub fn validate(&self, registry: &NamespaceRegistry) -> MappingResult<()> {
        registry.resolve(&self.class_ref)?;

        for property_ref in self.mappings.values() {
            registry.resolve(property_ref)?;
        }

        for (field, datatype_ref) in &self.datatypes {
            if self.languages.contains_key(field) {
                return Err(MappingError::ConflictingTags {
                    field: field.clone(),
                });
            }
            registry.resolve_datatype(datatype_ref)?;
        }

        Ok(())
    }
}
