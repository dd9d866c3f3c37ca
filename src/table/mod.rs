//! Ternary truth tables.
//!
//! The [`TruthTable`] container stores result columns over a growing set of
//! boolean input variables, with cells holding a [`Ternary`] value.

mod error;
mod ternary;
mod truth_table;

pub use error::TableError;
pub use ternary::Ternary;
pub use truth_table::{TruthTable, MAX_VARIABLES};
