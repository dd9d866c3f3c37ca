//! Finite state machine definition.

use super::state::State;
use super::transition::Transition;
use crate::creator::{FsmError, TransitionTableCreator};
use crate::table::TruthTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A finite state machine: an ordered list of states and an ordered list of
/// transitions.
///
/// The order of transitions matters: input variables are numbered in the
/// order they first appear in the transitions' guards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fsm {
    #[serde(default)]
    states: Vec<State>,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl Fsm {
    pub fn new(states: Vec<State>, transitions: Vec<Transition>) -> Self {
        Self {
            states,
            transitions,
        }
    }

    pub fn add_state(&mut self, state: State) {
        self.states.push(state);
    }

    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Find the state with the given number.
    pub fn state(&self, number: usize) -> Option<&State> {
        self.states.iter().find(|s| s.number == number)
    }

    /// All output signal names used by any state or transition, sorted.
    pub fn output_names(&self) -> BTreeSet<String> {
        self.states
            .iter()
            .flat_map(|s| s.values.keys())
            .chain(self.transitions.iter().flat_map(|t| t.values.keys()))
            .cloned()
            .collect()
    }

    /// Build the transition table with the default configuration.
    pub fn transition_table(&self) -> Result<TruthTable, FsmError> {
        TransitionTableCreator::new(self).create()
    }
}
