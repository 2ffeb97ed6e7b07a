//! RDF term types: IRI and literal
//!
//! Terms are the building blocks of triples. A term is either an IRI
//! (always expanded, never prefixed) or a literal (textual value with an
//! optional datatype IRI or language tag).

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An RDF term (subject, predicate, or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - A literal carries at most one of `datatype` / `language`; constructors
///   enforce this.
/// - The subject and predicate positions of a triple only hold `Term::Iri`.
///
/// The derived `Ord` sorts IRIs before literals, then by content, which
/// gives the `Graph` its stable SPO iteration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    Iri(Arc<str>),

    /// Literal value
    Literal {
        /// Lexical form of the value
        value: Arc<str>,
        /// Optional datatype IRI (expanded); `None` for plain literals
        datatype: Option<Arc<str>>,
        /// Optional language tag; mutually exclusive with `datatype`
        language: Option<Arc<str>>,
    },
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a plain (untyped) string literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: None,
        }
    }

    /// Create a language-tagged string literal
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Create a typed literal with an expanded datatype IRI
    pub fn typed(value: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype: Some(Arc::from(datatype.as_ref())),
            language: None,
        }
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get literal components: (value, datatype, language)
    pub fn as_literal(&self) -> Option<(&str, Option<&str>, Option<&str>)> {
        match self {
            Term::Literal {
                value,
                datatype,
                language,
            } => Some((value, datatype.as_deref(), language.as_deref())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                write!(f, "\"{}\"", value)?;
                if let Some(lang) = language {
                    write!(f, "@{}", lang)
                } else if let Some(dt) = datatype {
                    write!(f, "^^<{}>", dt)
                } else {
                    Ok(())
                }
            }
        }
    }
}
