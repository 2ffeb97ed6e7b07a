//! Graph-to-Turtle rendering
//!
//! Subject blocks use canonical predicate order (`a` first, then the
//! graph's SPO order) so repeated serialization of the same statement set
//! is byte-identical.

use crate::error::Result;
use rowlift_graph_ir::{Graph, Term, Triple};
use rowlift_vocab::rdf;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Render a graph as a Turtle document.
///
/// Declares each prefix that abbreviates at least one identifier in the
/// graph, once, in sorted order; unused prefixes are omitted. Each
/// distinct subject's statements form one block, with `rdf:type` rendered
/// as `a` on the first line.
pub fn write_graph(graph: &Graph) -> String {
    let used = used_prefixes(graph);

    let mut out = String::new();
    for prefix in &used {
        // Safe: `used` only contains keys of the prefix table
        let base = &graph.prefixes[prefix];
        writeln!(out, "@prefix {}: <{}> .", prefix, base).unwrap();
    }

    for (subject, triples) in graph.group_by_subject() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&subject_block(subject, &triples, &graph.prefixes));
    }

    out
}

/// Render a graph as Turtle and write it to `path` (a `.ttl` artifact).
pub fn write_graph_to_path(graph: &Graph, path: &Path) -> Result<()> {
    std::fs::write(path, write_graph(graph))?;
    Ok(())
}

/// Render one subject's statements as a Turtle block.
///
/// Type statements come first (as `a`), remaining predicates follow in
/// the graph's sorted order with `;` continuation and a ` .` terminator.
fn subject_block(subject: &Term, triples: &[&Triple], prefixes: &BTreeMap<String, String>) -> String {
    let mut lines: Vec<(String, String)> = Vec::with_capacity(triples.len());

    for t in triples {
        if t.p.as_iri() == Some(rdf::TYPE) {
            lines.push(("a".to_string(), render_term(&t.o, prefixes)));
        }
    }
    for t in triples {
        if t.p.as_iri() != Some(rdf::TYPE) {
            lines.push((render_term(&t.p, prefixes), render_term(&t.o, prefixes)));
        }
    }

    let subj = render_term(subject, prefixes);
    let mut block = String::with_capacity(128);
    for (i, (pred, obj)) in lines.iter().enumerate() {
        if i == 0 {
            writeln!(block, "{} {} {} ;", subj, pred, obj).unwrap();
        } else {
            writeln!(block, "    {} {} ;", pred, obj).unwrap();
        }
    }

    // Close the subject block
    if block.ends_with(" ;\n") {
        block.truncate(block.len() - 3);
        block.push_str(" .\n");
    }

    block
}

/// Render a single term, compacting IRIs to prefixed names where possible.
fn render_term(term: &Term, prefixes: &BTreeMap<String, String>) -> String {
    match term {
        Term::Iri(iri) => match compact_iri(iri, prefixes) {
            Some((prefix, local)) => format!("{}:{}", prefix, local),
            None => format!("<{}>", iri),
        },
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            let mut s = format!("\"{}\"", escape_turtle_string(value));
            if let Some(lang) = language {
                write!(s, "@{}", lang).unwrap();
            } else if let Some(dt) = datatype {
                match compact_iri(dt, prefixes) {
                    Some((prefix, local)) => write!(s, "^^{}:{}", prefix, local).unwrap(),
                    None => write!(s, "^^<{}>", dt).unwrap(),
                }
            }
            s
        }
    }
}

/// Find the prefix binding that abbreviates `iri`, if any.
///
/// Picks the longest matching base URI whose remainder is a safe local
/// name; an IRI whose remainder needs escaping is kept in `<...>` form.
fn compact_iri<'a>(
    iri: &'a str,
    prefixes: &'a BTreeMap<String, String>,
) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(&str, &str)> = None;

    for (prefix, base) in prefixes {
        if base.is_empty() {
            continue;
        }
        if let Some(local) = iri.strip_prefix(base.as_str()) {
            if is_safe_local(local) && best.map_or(true, |(_, l)| local.len() < l.len()) {
                best = Some((prefix.as_str(), local));
            }
        }
    }

    best
}

/// Check whether a local name can appear unescaped in a prefixed name.
///
/// Conservative subset of Turtle's PN_LOCAL: alphanumerics, `_` and `-`.
fn is_safe_local(local: &str) -> bool {
    !local.is_empty() && local.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Collect the prefixes that abbreviate at least one identifier in the graph.
fn used_prefixes(graph: &Graph) -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    let mut mark = |term: &Term| {
        match term {
            Term::Iri(iri) => {
                if let Some((prefix, _)) = compact_iri(iri, &graph.prefixes) {
                    used.insert(prefix.to_string());
                }
            }
            Term::Literal {
                datatype: Some(dt), ..
            } => {
                if let Some((prefix, _)) = compact_iri(dt, &graph.prefixes) {
                    used.insert(prefix.to_string());
                }
            }
            Term::Literal { .. } => {}
        }
    };

    for t in graph.iter() {
        mark(&t.s);
        mark(&t.p);
        mark(&t.o);
    }

    used
}

/// Escape special characters for Turtle string literals.
///
/// Handles: `\` → `\\`, `"` → `\"`, newline → `\n`, tab → `\t`,
/// carriage return → `\r`, so embedded quotes and newlines round-trip.
pub fn escape_turtle_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowlift_graph_ir::Graph;

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_prefix("ex", "http://example.org/");
        graph.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");

        graph.add_triple(
            Term::iri("http://example.org/alice"),
            Term::iri(rdf::TYPE),
            Term::iri("http://xmlns.com/foaf/0.1/Person"),
        );
        graph.add_triple(
            Term::iri("http://example.org/alice"),
            Term::iri("http://xmlns.com/foaf/0.1/name"),
            Term::string("Alice"),
        );
        graph.add_triple(
            Term::iri("http://example.org/bob"),
            Term::iri("http://xmlns.com/foaf/0.1/name"),
            Term::string("Bob"),
        );

        graph
    }

    #[test]
    fn full_document() {
        let graph = make_test_graph();
        let expected = "\
@prefix ex: <http://example.org/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .

ex:alice a foaf:Person ;
    foaf:name \"Alice\" .

ex:bob foaf:name \"Bob\" .
";
        assert_eq!(write_graph(&graph), expected);
    }

    #[test]
    fn serialization_is_deterministic() {
        let graph = make_test_graph();
        assert_eq!(write_graph(&graph), write_graph(&graph));
    }

    #[test]
    fn unused_prefix_is_omitted() {
        let mut graph = make_test_graph();
        graph.add_prefix("dcterms", "http://purl.org/dc/terms/");

        let ttl = write_graph(&graph);
        assert!(!ttl.contains("@prefix dcterms:"));
    }

    #[test]
    fn uncompactable_iri_uses_angle_brackets() {
        let mut graph = Graph::new();
        graph.add_prefix("ex", "http://example.org/");

        // Local part contains '/', so the subject cannot be a prefixed name
        graph.add_triple(
            Term::iri("http://example.org/a/b"),
            Term::iri("http://example.org/p"),
            Term::string("v"),
        );

        let ttl = write_graph(&graph);
        assert!(ttl.contains("<http://example.org/a/b> ex:p \"v\" ."));
    }

    #[test]
    fn language_and_datatype_literals() {
        let mut graph = Graph::new();
        graph.add_prefix("ex", "http://example.org/");
        graph.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");

        graph.add_triple(
            Term::iri("http://example.org/a"),
            Term::iri("http://example.org/title"),
            Term::lang_string("Hello", "en"),
        );
        graph.add_triple(
            Term::iri("http://example.org/a"),
            Term::iri("http://example.org/year"),
            Term::typed("2020", "http://www.w3.org/2001/XMLSchema#gYear"),
        );

        let ttl = write_graph(&graph);
        assert!(ttl.contains("\"Hello\"@en"));
        assert!(ttl.contains("\"2020\"^^xsd:gYear"));
        // The datatype counts as prefix usage
        assert!(ttl.contains("@prefix xsd:"));
    }

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape_turtle_string("hello"), "hello");
        assert_eq!(escape_turtle_string("he said \"hi\""), "he said \\\"hi\\\"");
        assert_eq!(escape_turtle_string("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_turtle_string("path\\to"), "path\\\\to");
        assert_eq!(escape_turtle_string("a\tb"), "a\\tb");
    }

    #[test]
    fn escaped_literal_in_document() {
        let mut graph = Graph::new();
        graph.add_triple(
            Term::iri("http://example.org/a"),
            Term::iri("http://example.org/note"),
            Term::string("line1\nline2 \"quoted\""),
        );

        let ttl = write_graph(&graph);
        assert!(ttl.contains("\"line1\\nline2 \\\"quoted\\\"\""));
    }

    #[test]
    fn write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ttl");

        let graph = make_test_graph();
        write_graph_to_path(&graph, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, write_graph(&graph));
    }
}
