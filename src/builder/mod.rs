//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for assembling an [`Fsm`](crate::core::Fsm)
//! with guards given as text.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::FsmBuilder;
pub use transition::TransitionBuilder;

use crate::core::Transition;

/// Create an unconditional transition.
///
/// # Example
///
/// ```
/// use fsm_table::builder::simple_transition;
///
/// let transition = simple_transition(0, 1);
/// assert!(!transition.is_conditional());
/// ```
pub fn simple_transition(from: usize, to: usize) -> Transition {
    Transition::new(from, to)
}

/// Create a transition guarded by a condition in text form.
///
/// # Example
///
/// ```
/// use fsm_table::builder::guarded_transition;
///
/// let transition = guarded_transition(0, 1, "Start & !Reset").unwrap();
/// assert!(transition.is_conditional());
/// ```
pub fn guarded_transition(from: usize, to: usize, condition: &str) -> Result<Transition, BuildError> {
    TransitionBuilder::new()
        .from(from)
        .to(to)
        .when(condition)
        .build()
}
