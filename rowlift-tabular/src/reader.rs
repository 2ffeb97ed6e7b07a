//! CSV row source.
//!
//! Materializes a delimited text file into rows. The header record
//! defines the schema; empty cells become nulls, so a blank `DOI` cell
//! triggers the engine's fallback subject identifier just like a missing
//! column would.

use crate::error::Result;
use crate::row::{Row, RowSchema};
use crate::value::Value;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Read CSV rows from an in-memory string.
pub fn read_csv_str(content: &str) -> Result<Vec<Row>> {
    read_csv(content.as_bytes())
}

/// Read CSV rows from a file.
pub fn read_csv_path(path: &Path) -> Result<Vec<Row>> {
    let file = std::fs::File::open(path)?;
    let rows = read_csv(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read CSV source");
    Ok(rows)
}

fn read_csv<R: Read>(input: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let schema = Arc::new(RowSchema::new(
        reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect(),
    )?);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let values = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    Some(Value::Text(cell.to_string()))
                }
            })
            .collect();
        rows.push(Row::new(Arc::clone(&schema), values)?);
    }

    Ok(rows)
}
