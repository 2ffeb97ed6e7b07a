//! Whole-source materialization pipeline
//!
//! Validates the configuration, runs the generator over every row, and
//! unions the results into one graph carrying the registry's prefix
//! bindings.

use crate::config::Configuration;
use crate::error::MappingResult;
use crate::generate::generate;
use crate::namespace::NamespaceRegistry;
use rowlift_graph_ir::Graph;
use rowlift_tabular::Row;

/// Materialize a row source into a graph.
///
/// Structural configuration errors (malformed reference, unknown prefix)
/// surface here before any row is processed, so a failure never leaves a
/// partial graph behind. Row-level data absence only affects how many
/// statements each row contributes.
///
/// Rows are processed sequentially; since [`generate`] is pure, callers
/// needing parallel fan-out can run it per row themselves and merge the
/// results by set-union.
pub fn materialize(config: &Configuration, rows: &[Row]) -> MappingResult<Graph> {
    let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
    config.validate(&registry)?;

    let mut graph = Graph::new();
    for (index, row) in rows.iter().enumerate() {
        graph.extend(generate(row, index, config, &registry)?);
    }

    for (prefix, base) in registry.prefixes() {
        graph.add_prefix(prefix.clone(), base.clone());
    }

    tracing::debug!(
        rows = rows.len(),
        statements = graph.len(),
        "materialized graph"
    );
    Ok(graph)
}
