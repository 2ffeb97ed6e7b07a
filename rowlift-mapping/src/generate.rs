//! Per-row triple generation
//!
//! [`generate`] is pure given its inputs: no hidden state, safe to fan
//! out across rows and merge results by set-union.

use crate::coerce::coerce;
use crate::config::Configuration;
use crate::error::{MappingError, MappingResult};
use crate::namespace::NamespaceRegistry;
use crate::sanitize::sanitize;
use rowlift_graph_ir::{Term, Triple};
use rowlift_tabular::Row;
use rowlift_vocab::rdf;

/// Generate the statements one row contributes to the graph.
///
/// Emits the subject's type statement, then one statement per literal of
/// each mapped field. A field whose value is absent or null contributes
/// nothing; a field missing from the row schema entirely is treated the
/// same way.
///
/// Resolution failures are configuration bugs, not per-row conditions:
/// a mapping property that fails to resolve aborts generation with
/// [`MappingError::UnresolvedProperty`]. Pipelines that call
/// [`Configuration::validate`] first never see it.
pub fn generate(
    row: &Row,
    row_index: usize,
    config: &Configuration,
    registry: &NamespaceRegistry,
) -> MappingResult<Vec<Triple>> {
    let subject = Term::iri(subject_iri(row, row_index, config));
    let class = registry.resolve(&config.class_ref)?;

    let mut triples = vec![Triple::new(
        subject.clone(),
        Term::iri(rdf::TYPE),
        Term::iri(class),
    )];

    for (field, property_ref) in &config.mappings {
        let value = row.get(field);
        if value.is_none() {
            continue;
        }

        let predicate = registry
            .resolve(property_ref)
            .map_err(|e| unresolved(field, property_ref, e))?;

        let literals = coerce(value, config.is_multi(field), config.separator_for(field));

        let language = config.languages.get(field);
        let datatype = match config.datatypes.get(field) {
            Some(reference) => Some(
                registry
                    .resolve_datatype(reference)
                    .map_err(|e| unresolved(field, reference, e))?,
            ),
            None => None,
        };

        for literal in literals {
            let object = if let Some(lang) = language {
                Term::lang_string(&literal, lang)
            } else if let Some(dt) = &datatype {
                Term::typed(&literal, dt)
            } else {
                Term::string(&literal)
            };
            triples.push(Triple::new(subject.clone(), Term::iri(&predicate), object));
        }
    }

    Ok(triples)
}

/// Derive the subject identifier for a row.
///
/// Sanitizes the id column's value, or falls back to the positional
/// `row_<index>` identifier when that value is absent or null.
fn subject_iri(row: &Row, row_index: usize, config: &Configuration) -> String {
    match row.get(&config.id_column) {
        Some(value) => format!(
            "{}{}",
            config.base_uri,
            sanitize(&value.to_string(), &config.sanitize_chars)
        ),
        None => format!("{}row_{}", config.base_uri, row_index),
    }
}

fn unresolved(field: &str, reference: &str, source: MappingError) -> MappingError {
    MappingError::UnresolvedProperty {
        field: field.to_string(),
        reference: reference.to_string(),
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowlift_tabular::{RowSchema, Value};
    use std::sync::Arc;

    fn make_config() -> Configuration {
        Configuration::from_json_str(
            r#"{
                "base_uri": "http://ex.org/p/",
                "class": "bibo:Article",
                "id_column": "DOI",
                "prefixes": {
                    "bibo": "http://purl.org/ontology/bibo/",
                    "dcterms": "http://purl.org/dc/terms/",
                    "schema": "http://schema.org/"
                },
                "mappings": {
                    "Title": "dcterms:title",
                    "Author Keywords": "schema:keywords"
                },
                "multi_valued": ["Author Keywords"]
            }"#,
        )
        .unwrap()
    }

    fn make_row(doi: Option<&str>, title: Option<&str>, keywords: Option<&str>) -> Row {
        let schema = Arc::new(
            RowSchema::new(vec![
                "DOI".to_string(),
                "Title".to_string(),
                "Author Keywords".to_string(),
            ])
            .unwrap(),
        );
        Row::new(
            schema,
            vec![
                doi.map(Value::from),
                title.map(Value::from),
                keywords.map(Value::from),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_type_statement_and_subject() {
        let config = make_config();
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(Some("10.1/x"), Some("Hello"), None);

        let triples = generate(&row, 0, &config, &registry).unwrap();
        assert_eq!(triples.len(), 2);

        assert_eq!(triples[0].s.as_iri(), Some("http://ex.org/p/10_1_x"));
        assert_eq!(triples[0].p.as_iri(), Some(rdf::TYPE));
        assert_eq!(
            triples[0].o.as_iri(),
            Some("http://purl.org/ontology/bibo/Article")
        );
    }

    #[test]
    fn test_positional_fallback_subject() {
        let config = make_config();
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(None, Some("Hi"), None);

        let triples = generate(&row, 3, &config, &registry).unwrap();
        assert_eq!(triples[0].s.as_iri(), Some("http://ex.org/p/row_3"));
    }

    #[test]
    fn test_null_fields_are_skipped() {
        let config = make_config();
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(Some("10.1/x"), None, None);

        let triples = generate(&row, 0, &config, &registry).unwrap();
        // Only the type statement remains
        assert_eq!(triples.len(), 1);
    }

    #[test]
    fn test_mapped_field_missing_from_schema() {
        let mut config = make_config();
        config
            .mappings
            .insert("Year".to_string(), "dcterms:issued".to_string());
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(Some("10.1/x"), Some("Hello"), None);

        // Not a configuration error; the field is silently skipped
        let triples = generate(&row, 0, &config, &registry).unwrap();
        assert_eq!(triples.len(), 2);
    }

    #[test]
    fn test_multi_valued_expansion() {
        let config = make_config();
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(Some("10.1/x"), None, Some("graphs, data , rdf"));

        let triples = generate(&row, 0, &config, &registry).unwrap();
        let keywords: Vec<_> = triples
            .iter()
            .filter(|t| t.p.as_iri() == Some("http://schema.org/keywords"))
            .map(|t| t.o.as_literal().unwrap().0.to_string())
            .collect();
        assert_eq!(keywords, vec!["graphs", "data", "rdf"]);
    }

    #[test]
    fn test_language_and_datatype_tagging() {
        let mut config = make_config();
        config
            .prefixes
            .insert("xsd".to_string(), "http://www.w3.org/2001/XMLSchema#".to_string());
        config
            .mappings
            .insert("Year".to_string(), "dcterms:issued".to_string());
        config
            .languages
            .insert("Title".to_string(), "en".to_string());
        config
            .datatypes
            .insert("Year".to_string(), "xsd:gYear".to_string());

        let schema = Arc::new(
            RowSchema::new(vec![
                "DOI".to_string(),
                "Title".to_string(),
                "Year".to_string(),
            ])
            .unwrap(),
        );
        let row = Row::new(
            schema,
            vec![
                Some(Value::from("10.1/x")),
                Some(Value::from("Hello")),
                Some(Value::Integer(2021)),
            ],
        )
        .unwrap();

        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let triples = generate(&row, 0, &config, &registry).unwrap();

        let title = triples
            .iter()
            .find(|t| t.p.as_iri() == Some("http://purl.org/dc/terms/title"))
            .unwrap();
        assert_eq!(title.o.as_literal(), Some(("Hello", None, Some("en"))));

        let year = triples
            .iter()
            .find(|t| t.p.as_iri() == Some("http://purl.org/dc/terms/issued"))
            .unwrap();
        assert_eq!(
            year.o.as_literal(),
            Some((
                "2021",
                Some("http://www.w3.org/2001/XMLSchema#gYear"),
                None
            ))
        );
    }

    #[test]
    fn test_unresolved_property() {
        let mut config = make_config();
        config
            .mappings
            .insert("Title".to_string(), "nope:title".to_string());
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(Some("10.1/x"), Some("Hello"), None);

        let err = generate(&row, 0, &config, &registry).unwrap_err();
        assert!(matches!(
            err,
            MappingError::UnresolvedProperty { ref field, ref reference, .. }
                if field == "Title" && reference == "nope:title"
        ));
    }

    #[test]
    fn test_generate_is_pure() {
        let config = make_config();
        let registry = NamespaceRegistry::from_prefixes(&config.prefixes);
        let row = make_row(Some("10.1/x"), Some("Hello"), Some("a,b"));

        let first = generate(&row, 0, &config, &registry).unwrap();
        let second = generate(&row, 0, &config, &registry).unwrap();
        assert_eq!(first, second);
    }
}
