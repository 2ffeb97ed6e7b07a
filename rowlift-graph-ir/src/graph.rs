//! RDF graph - a set of triples
//!
//! The `Graph` type uses `BTreeSet<Triple>` so duplicate statements
//! collapse on insertion and iteration is SPO-sorted.

use crate::{Term, Triple};
use std::collections::{BTreeMap, BTreeSet};

/// A set of RDF triples plus prefix bindings
///
/// # Design Decisions
///
/// - **Set storage**: `BTreeSet<Triple>` makes duplicate insertion a no-op
///   and yields deterministic SPO-sorted iteration, so the same statement
///   set always serializes identically.
/// - **Prefixes are metadata**: the prefix table only drives serialization
///   abbreviation; it plays no part in triple identity.
///
/// # Example
///
/// ```
/// use rowlift_graph_ir::{Graph, Term, Triple};
///
/// let mut graph = Graph::new();
///
/// graph.add_triple(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// );
/// graph.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph
    triples: BTreeSet<Triple>,
    /// Prefix mappings for serialization (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Insert a triple into the graph
    ///
    /// Returns `true` if the triple was not already present; inserting a
    /// duplicate is a no-op.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Insert a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) -> bool {
        self.insert(Triple::new(s, p, o))
    }

    /// Get the number of distinct triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Check whether a triple is present
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate over triples in SPO order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get all distinct subjects, in order
    pub fn subjects(&self) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self.triples.iter().map(|t| &t.s).collect();
        subjects.dedup();
        subjects
    }

    /// Group triples by subject
    ///
    /// Yields `(subject, triples_for_subject)` pairs in subject order; the
    /// SPO-sorted set keeps each subject's triples contiguous.
    pub fn group_by_subject(&self) -> SubjectGroups<'_> {
        SubjectGroups {
            inner: self.triples.iter().peekable(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

/// Iterator over triples grouped by subject
pub struct SubjectGroups<'a> {
    inner: std::iter::Peekable<std::collections::btree_set::Iter<'a, Triple>>,
}

impl<'a> Iterator for SubjectGroups<'a> {
    type Item = (&'a Term, Vec<&'a Triple>);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.next()?;
        let subject = &first.s;
        let mut group = vec![first];

        while let Some(t) = self.inner.next_if(|t| t.s == *subject) {
            group.push(t);
        }

        Some((subject, group))
    }
}
