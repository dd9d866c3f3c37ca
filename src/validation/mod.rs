//! Accumulating validation of state machine definitions.
//!
//! [`TransitionTableCreator`](crate::creator::TransitionTableCreator) stops at
//! the first problem it finds. Editing a machine goes faster when every
//! structural problem is reported at once, so this module uses Stillwater's
//! `Validation` to collect them all.
//!
//! # Example
//!
//! ```rust
//! use fsm_table::core::{Fsm, State, Transition};
//! use fsm_table::validation::problems;
//!
//! let fsm = Fsm::new(
//!     vec![State::new(1), State::new(1)],
//!     vec![Transition::new(1, 9)],
//! );
//!
//! // duplicate number, no initial state, unknown target
//! assert_eq!(problems(&fsm).len(), 3);
//! ```

use crate::core::Fsm;
use crate::creator::{endpoint_errors, output_value, FsmError};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a machine.
pub type FsmValidation = Validation<(), NonEmptyVec<FsmError>>;

/// Check a machine, accumulating ALL structural problems.
///
/// Checks state numbering, transition endpoints and output values.
/// Non-determinism depends on guard evaluation and is only detected when the
/// table is created.
pub fn validate(fsm: &Fsm) -> FsmValidation {
    let mut checks: Vec<FsmValidation> = Vec::new();

    let mut seen = HashSet::new();
    for state in fsm.states() {
        if !seen.insert(state.number) {
            checks.push(Validation::fail(FsmError::DuplicateStateNumber {
                number: state.number,
            }));
        }
    }

    if !seen.contains(&0) {
        checks.push(Validation::fail(FsmError::MissingInitialState));
    }

    for err in endpoint_errors(fsm.states(), fsm.transitions()) {
        checks.push(Validation::fail(err));
    }

    let values = fsm
        .states()
        .iter()
        .flat_map(|s| s.values.iter())
        .chain(fsm.transitions().iter().flat_map(|t| t.values.iter()));
    for (name, value) in values {
        if let Err(err) = output_value(name, *value) {
            checks.push(Validation::fail(err));
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

/// All structural problems of a machine, empty if it is valid.
pub fn problems(fsm: &Fsm) -> Vec<FsmError> {
    match validate(fsm) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
