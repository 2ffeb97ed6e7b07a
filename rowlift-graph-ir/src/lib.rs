//! Statement model for tabular-to-RDF lifting
//!
//! This crate provides the canonical types for representing the RDF
//! statements produced by the mapping engine, independent of any
//! serialization format.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Compaction to prefixed names is handled by formatters at output time.
//!
//! 2. **Untyped literals stay untyped** - A literal carries a datatype IRI
//!    or a language tag only when the mapping configured one; plain cell
//!    values serialize as bare strings.
//!
//! 3. **Set semantics** - The `Graph` type stores triples in a `BTreeSet`:
//!    inserting a duplicate is a no-op, and iteration is SPO-sorted so the
//!    same statement set always renders identically.
//!
//! # Example
//!
//! ```
//! use rowlift_graph_ir::{Graph, Term, Triple};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//!
//! assert_eq!(graph.len(), 1);
//! ```

mod graph;
mod term;
mod triple;

pub use graph::Graph;
pub use term::Term;
pub use triple::Triple;
