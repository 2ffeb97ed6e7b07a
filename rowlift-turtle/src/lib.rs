//! Turtle (TTL) writer for rowlift graphs
//!
//! Renders a [`rowlift_graph_ir::Graph`] as a Turtle document: prefix
//! declarations up top, one block per subject, deterministic ordering
//! throughout. The output of [`write_graph`] is a pure function of the
//! graph's statement set and prefix table, so serializing the same set
//! twice yields byte-identical text.
//!
//! # Example
//!
//! ```
//! use rowlift_graph_ir::{Graph, Term};
//! use rowlift_turtle::write_graph;
//!
//! let mut graph = Graph::new();
//! graph.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//!
//! let ttl = write_graph(&graph);
//! assert!(ttl.contains("@prefix foaf:"));
//! ```

mod error;
mod writer;

pub use error::{Result, TurtleError};
pub use writer::{escape_turtle_string, write_graph, write_graph_to_path};
