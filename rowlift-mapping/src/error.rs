//! Mapping engine error types

use thiserror::Error;

/// Mapping-specific errors
///
/// Structural errors (bad reference shape, unknown prefix) are
/// unrecoverable for the run and surface before any partial graph is
/// produced. Row-level data absence is never an error.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A prefixed-name string lacks the required `prefix:term` shape
    #[error("malformed reference `{0}`: expected `prefix:term`")]
    MalformedReference(String),

    /// Referenced prefix is not registered
    #[error("unknown prefix `{prefix}` in `{reference}`")]
    UnknownPrefix {
        /// The unregistered prefix
        prefix: String,
        /// The full reference it appeared in
        reference: String,
    },

    /// A mapping property failed to resolve during row processing
    ///
    /// Upfront validation makes this unreachable in the pipeline; it can
    /// only fire when `generate` is called without prior validation.
    #[error("cannot resolve `{reference}` for field `{field}`: {source}")]
    UnresolvedProperty {
        /// The source field whose mapping failed
        field: String,
        /// The property or datatype reference that failed to resolve
        reference: String,
        /// The underlying resolution failure
        #[source]
        source: Box<MappingError>,
    },

    /// A field is configured with both a language tag and a datatype
    #[error("field `{field}` has both a language tag and a datatype")]
    ConflictingTags {
        /// The offending field
        field: String,
    },

    /// Configuration document parse error
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Filesystem error while loading a configuration document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
