//! A single RDF statement

use crate::Term;
use serde::{Deserialize, Serialize};

/// A (subject, predicate, object) statement
///
/// The derived `Ord` compares subject, then predicate, then object, so a
/// sorted collection of triples groups each subject's statements together.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term (IRI)
    pub s: Term,
    /// Predicate term (IRI)
    pub p: Term,
    /// Object term (IRI or literal)
    pub o: Term,
}

impl Triple {
    /// Create a triple from its components
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
