//! Row-oriented tabular types for rowlift
//!
//! This crate provides the row source consumed by the mapping engine: a
//! schema of named columns, rows of nullable scalar values, and a CSV
//! reader that materializes a delimited text file into rows.
//!
//! # Design
//!
//! - **Schema shared per source**: every row holds an `Arc<RowSchema>`,
//!   so column-name lookups are resolved once per source, not per row
//! - **Strongly typed scalars**: cell access goes through the `Value`
//!   enum, no `dyn Any`
//! - **Null is normal**: absent columns and empty CSV cells are nulls,
//!   which the engine treats as "no statement", never as an error

mod error;
mod reader;
mod row;
mod value;

pub use error::{Result, TabularError};
pub use reader::{read_csv_path, read_csv_str};
pub use row::{Row, RowSchema};
pub use value::Value;
