//! Mapping engine: tabular rows to RDF statements
//!
//! This crate turns one [`Configuration`] plus one row source into a
//! deterministic set of statements. It covers namespace resolution,
//! subject-identifier sanitization, value coercion (including
//! multi-valued field expansion and optional language/datatype tagging),
//! per-row triple generation, and the whole-source pipeline.
//!
//! # Usage
//!
//! Load a [`Configuration`] (interactively assembled or from a persisted
//! JSON document), read rows with `rowlift-tabular`, then call
//! [`materialize`]. Structural problems in the configuration (unknown
//! prefix, malformed reference) surface before any row is processed.
//!
//! ```
//! use rowlift_mapping::{materialize, Configuration};
//! use rowlift_tabular::read_csv_str;
//!
//! let config = Configuration::from_json_str(r#"{
//!     "base_uri": "http://ex.org/p/",
//!     "class": "bibo:Article",
//!     "id_column": "DOI",
//!     "prefixes": {
//!         "bibo": "http://purl.org/ontology/bibo/",
//!         "dcterms": "http://purl.org/dc/terms/"
//!     },
//!     "mappings": { "Title": "dcterms:title" }
//! }"#).unwrap();
//!
//! let rows = read_csv_str("DOI,Title\n10.1/x,Hello\n").unwrap();
//! let graph = materialize(&config, &rows).unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod generate;
pub mod materialize;
pub mod namespace;
pub mod sanitize;

pub use coerce::coerce;
pub use config::Configuration;
pub use error::{MappingError, MappingResult};
pub use generate::generate;
pub use materialize::materialize;
pub use namespace::NamespaceRegistry;
pub use sanitize::sanitize;
