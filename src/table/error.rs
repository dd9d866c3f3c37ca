//! Truth table error types.

use thiserror::Error;

/// Errors that can occur when addressing or growing a truth table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Row {row} out of range (table has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Column {column} out of range (table has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("Column '{name}' already exists")]
    DuplicateColumn { name: String },

    #[error("Table cannot hold more than {max} input variables")]
    TooManyVariables { max: usize },

    #[error("Value {value} is not a valid cell value, expected 0 or 1")]
    InvalidValue { value: i64 },
}
