//! Ternary truth table with row addressing by input bits.

use super::error::TableError;
use super::ternary::Ternary;
use std::fmt;

/// Hard ceiling on input variables; 2^30 rows is already far beyond any
/// table that can be minimized in practice.
pub const MAX_VARIABLES: usize = 30;

/// A truth table over boolean input variables with ternary result columns.
///
/// Input columns are implicit: row `r` assigns the first variable the most
/// significant bit of `r` and the last variable the least significant bit.
/// Only result cells are stored, row-major.
///
/// # Growing the table
///
/// [`add_variable`](TruthTable::add_variable) appends a new least significant
/// input and doubles the row count. Row `r` of the old table becomes rows
/// `2r` (new variable 0) and `2r + 1` (new variable 1), both holding a copy of
/// the old row. After adding `k` variables, an original row `R` therefore
/// occupies the contiguous block `R * 2^k .. R * 2^k + 2^k`.
///
/// # Example
///
/// ```rust
/// use fsm_table::table::{Ternary, TruthTable};
///
/// let mut table = TruthTable::new(["S"]).unwrap();
/// let y = table.add_result("Y").unwrap();
/// table.fill(Ternary::Zero);
/// table.set_value(1, y, Ternary::One).unwrap();
///
/// table.add_variable("A").unwrap();
/// assert_eq!(table.rows(), 4);
/// assert_eq!(table.value(2, y).unwrap(), Ternary::One);
/// assert_eq!(table.value(3, y).unwrap(), Ternary::One);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    results: Vec<String>,
    cells: Vec<Ternary>,
}

impl TruthTable {
    /// Create a table over the given input variables with no result columns.
    pub fn new<I, S>(variables: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self {
            variables: Vec::new(),
            results: Vec::new(),
            cells: Vec::new(),
        };
        for name in variables {
            table.push_variable(name.into())?;
        }
        Ok(table)
    }

    /// Number of rows, `2^variables`.
    pub fn rows(&self) -> usize {
        1 << self.variables.len()
    }

    /// Input variable names, most significant first.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Result column names in column order.
    pub fn result_names(&self) -> &[String] {
        &self.results
    }

    /// Index of the result column called `name`.
    pub fn result_index(&self, name: &str) -> Option<usize> {
        self.results.iter().position(|r| r == name)
    }

    /// Append a result column filled with don't-care and return its index.
    pub fn add_result(&mut self, name: impl Into<String>) -> Result<usize, TableError> {
        let name = name.into();
        if self.results.contains(&name) || self.variables.contains(&name) {
            return Err(TableError::DuplicateColumn { name });
        }

        let width = self.results.len();
        let rows = self.rows();
        let mut cells = Vec::with_capacity(rows * (width + 1));
        for row in 0..rows {
            cells.extend_from_slice(&self.cells[row * width..(row + 1) * width]);
            cells.push(Ternary::DontCare);
        }

        self.cells = cells;
        self.results.push(name);
        Ok(width)
    }

    /// Append a new least significant input variable, replicating every
    /// existing row across both of its values.
    pub fn add_variable(&mut self, name: impl Into<String>) -> Result<(), TableError> {
        let name = name.into();
        if self.results.contains(&name) {
            return Err(TableError::DuplicateColumn { name });
        }
        self.push_variable(name)?;

        let width = self.results.len();
        if width == 0 {
            return Ok(());
        }

        let mut cells = Vec::with_capacity(self.cells.len() * 2);
        for row in self.cells.chunks(width) {
            cells.extend_from_slice(row);
            cells.extend_from_slice(row);
        }
        self.cells = cells;
        Ok(())
    }

    fn push_variable(&mut self, name: String) -> Result<(), TableError> {
        if self.variables.contains(&name) {
            return Err(TableError::DuplicateColumn { name });
        }
        if self.variables.len() >= MAX_VARIABLES {
            return Err(TableError::TooManyVariables { max: MAX_VARIABLES });
        }
        self.variables.push(name);
        Ok(())
    }

    /// Set every result cell to `value`.
    pub fn fill(&mut self, value: Ternary) {
        self.cells.fill(value);
    }

    /// Set the result cell at `row`, `column`.
    pub fn set_value(&mut self, row: usize, column: usize, value: Ternary) -> Result<(), TableError> {
        let index = self.cell_index(row, column)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Read the result cell at `row`, `column`.
    pub fn value(&self, row: usize, column: usize) -> Result<Ternary, TableError> {
        let index = self.cell_index(row, column)?;
        Ok(self.cells[index])
    }

    /// All result cells of one row.
    pub fn row(&self, row: usize) -> Result<&[Ternary], TableError> {
        self.check_row(row)?;
        let width = self.results.len();
        Ok(&self.cells[row * width..(row + 1) * width])
    }

    /// Value of input variable `variable` in `row`.
    pub fn input_value(&self, row: usize, variable: usize) -> Result<bool, TableError> {
        self.check_row(row)?;
        let count = self.variables.len();
        if variable >= count {
            return Err(TableError::ColumnOutOfRange {
                column: variable,
                columns: count,
            });
        }
        Ok(row & (1 << (count - 1 - variable)) != 0)
    }

    fn check_row(&self, row: usize) -> Result<(), TableError> {
        let rows = self.rows();
        if row >= rows {
            return Err(TableError::RowOutOfRange { row, rows });
        }
        Ok(())
    }

    fn cell_index(&self, row: usize, column: usize) -> Result<usize, TableError> {
        self.check_row(row)?;
        let width = self.results.len();
        if column >= width {
            return Err(TableError::ColumnOutOfRange {
                column,
                columns: width,
            });
        }
        Ok(row * width + column)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", self.variables.join(" "), self.results.join(" "))?;

        let count = self.variables.len();
        let width = self.results.len();
        for row in 0..self.rows() {
            let inputs: Vec<&str> = (0..count)
                .map(|v| if row & (1 << (count - 1 - v)) != 0 { "1" } else { "0" })
                .collect();
            let values: Vec<String> = self.cells[row * width..(row + 1) * width]
                .iter()
                .map(|t| t.to_string())
                .collect();
            writeln!(f, "{} | {}", inputs.join(" "), values.join(" "))?;
        }
        Ok(())
    }
}
