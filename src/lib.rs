//! fsm-table: transition tables for finite state machines
//!
//! Turns a finite state machine into a ternary truth table that a boolean
//! minimizer can work on. The table maps the current state bits and the
//! input variables read by transition guards to the next state bits and the
//! output signals. Rows no state can reach are left as don't-care.
//!
//! # Core Concepts
//!
//! - **State**: a numbered state with Moore outputs, see [`core::State`]
//! - **Transition**: a move between states, optionally guarded by a boolean
//!   [`expression::Expression`] and overriding outputs while it fires
//! - **Transition table**: the [`table::TruthTable`] built by
//!   [`creator::TransitionTableCreator`]
//!
//! Unconditional transitions are defaults; guarded transitions override them
//! where their guard holds. Two transitions of the same kind firing from the
//! same state under the same inputs is reported as
//! [`FsmError::NonDeterministicTransition`].
//!
//! # Example
//!
//! ```rust
//! use fsm_table::builder::{FsmBuilder, TransitionBuilder};
//! use fsm_table::core::State;
//! use fsm_table::table::Ternary;
//!
//! let fsm = FsmBuilder::new()
//!     .state(State::new(0).named("Off"))
//!     .state(State::new(1).named("On").with_value("Lamp", 1))
//!     .transition(TransitionBuilder::new().from(0).to(1).when("Press"))?
//!     .transition(TransitionBuilder::new().from(1).to(0).when("Press"))?
//!     .build()?;
//!
//! let table = fsm.transition_table()?;
//! assert_eq!(table.variables(), ["Q0_n", "Press"]);
//! assert_eq!(table.result_names(), ["Q0_n+1", "Lamp"]);
//!
//! // On, Press = 1: back to Off, lamp still lit for this cycle
//! assert_eq!(table.row(3)?, [Ternary::Zero, Ternary::One]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod creator;
pub mod document;
pub mod expression;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Fsm, Guard, State, Transition};
pub use config::CreatorConfig;
pub use creator::{FsmError, TransitionTableCreator};
pub use expression::Expression;
pub use table::{Ternary, TruthTable};
