//! Errors raised while building a transition table.

use crate::expression::ExpressionError;
use crate::table::TableError;
use thiserror::Error;

/// Errors that can occur when turning a state machine into a transition table.
///
/// All of them abort the build; no partial table is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FsmError {
    #[error("State number {number} is used twice")]
    DuplicateStateNumber { number: usize },

    #[error("No initial state (number 0) defined")]
    MissingInitialState,

    #[error("Transition '{transition}' refers to undefined state {number}")]
    UnknownState { number: usize, transition: String },

    #[error("Transition '{transition}' is not deterministic")]
    NonDeterministicTransition { transition: String },

    #[error("Output '{name}' has value {value}, expected 0 or 1")]
    InvalidOutputValue { name: String, value: i64 },

    #[error("Table needs {variables} variables, limit is {max}")]
    TableTooLarge { variables: usize, max: usize },

    #[error("Guard evaluation failed: {0}")]
    Expression(#[from] ExpressionError),

    #[error("Truth table error: {0}")]
    Table(#[from] TableError),
}
