//! Finite state machine data model.
//!
//! This module contains the immutable description of a machine:
//! - [`State`]s with their Moore outputs
//! - [`Transition`]s with optional [`Guard`]s and Mealy output overrides
//! - the [`Fsm`] that orders them

mod guard;
mod machine;
mod state;
mod transition;

pub use guard::Guard;
pub use machine::Fsm;
pub use state::{State, ValueMap};
pub use transition::Transition;
