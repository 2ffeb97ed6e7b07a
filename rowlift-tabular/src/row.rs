//! Row and schema types.

use crate::error::{Result, TabularError};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Named-column schema shared by every row of one source.
#[derive(Debug, Clone)]
pub struct RowSchema {
    /// Column names in source order.
    columns: Vec<String>,
    /// Lookup by name.
    name_to_index: HashMap<String, usize>,
}

impl RowSchema {
    /// Create a schema from column names in source order.
    ///
    /// Fails with a schema error on duplicate column names.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut name_to_index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if name_to_index.insert(name.clone(), i).is_some() {
                return Err(TabularError::Schema(format!(
                    "duplicate column name: {}",
                    name
                )));
            }
        }
        Ok(Self {
            columns,
            name_to_index,
        })
    }

    /// Get column index by name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// One row of nullable scalar values over a shared schema.
#[derive(Debug, Clone)]
pub struct Row {
    schema: Arc<RowSchema>,
    values: Vec<Option<Value>>,
}

impl Row {
    /// Create a row over `schema` from values in column order.
    ///
    /// Fails with a schema error if the value count does not match the
    /// column count.
    pub fn new(schema: Arc<RowSchema>, values: Vec<Option<Value>>) -> Result<Self> {
        if values.len() != schema.num_columns() {
            return Err(TabularError::Schema(format!(
                "row has {} values but schema has {} columns",
                values.len(),
                schema.num_columns()
            )));
        }
        Ok(Self { schema, values })
    }

    /// Get the non-null value of a named column.
    ///
    /// Returns `None` both when the column holds a null and when the
    /// schema has no such column; callers treat the two identically.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let idx = self.schema.index_of(name)?;
        self.values[idx].as_ref()
    }

    /// The row's schema.
    pub fn schema(&self) -> &RowSchema {
        &self.schema
    }
}
