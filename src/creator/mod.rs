//! Transition table creation.
//!
//! Turns an [`Fsm`](crate::core::Fsm) into a ternary
//! [`TruthTable`](crate::table::TruthTable) ready for boolean minimization.
//!
//! # Encoding
//!
//! - State numbers are encoded in the smallest number of bits (at least one)
//!   that holds the largest state number.
//! - Input variables are taken from the guards in the order they first appear
//!   and become the least significant input columns.
//! - The row of state `s` under input assignment `i` is
//!   `s * 2^inputs + i`, first input variable most significant.
//!
//! # Precedence
//!
//! Unconditional transitions are filled in first, then guarded ones. A
//! guarded transition overrides the unconditional one on the rows where its
//! guard holds. Two transitions of the same kind firing on the same row make
//! the machine non-deterministic, which is an error.

mod error;
mod transition_table;

pub use error::FsmError;
pub use transition_table::{collect_input_variables, state_bits, TransitionTableCreator};

pub(crate) use transition_table::{endpoint_errors, output_value};
