//! Build errors for state machine and transition builders.

use crate::expression::ExpressionError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No states defined. Add at least the initial state with .state(State::new(0))")]
    NoStates,

    #[error("Transition source state not specified. Call .from(number)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(number)")]
    MissingToState,

    #[error("Invalid guard '{text}': {source}")]
    InvalidGuard {
        text: String,
        #[source]
        source: ExpressionError,
    },
}
