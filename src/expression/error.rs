//! Errors raised while parsing or evaluating guard expressions.

use thiserror::Error;

/// Errors that can occur when parsing or evaluating an [`Expression`](super::Expression).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpressionError {
    #[error("Variable '{name}' has no value in the evaluation context")]
    UnassignedVariable { name: String },

    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("Expression nests deeper than {max} levels at position {position}")]
    TooDeep { position: usize, max: usize },

    #[error("'{name}' is not a valid variable name")]
    InvalidVariableName { name: String },

    #[error("Expression is empty")]
    Empty,
}
