//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Fsm, State, Transition};

/// Builder for constructing state machines with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct FsmBuilder {
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: Vec<State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    ///
    /// Only checks that states exist; numbering problems are reported by
    /// [`validate`](crate::validation::validate) or when the table is created.
    pub fn build(self) -> Result<Fsm, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        Ok(Fsm::new(self.states, self.transitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_states() {
        let result = FsmBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let fsm = FsmBuilder::new()
            .state(State::new(0).named("Idle"))
            .state(State::new(1).named("Run").with_value("Motor", 1))
            .transition(TransitionBuilder::new().from(0).to(1).when("Start"))
            .unwrap()
            .add_transition(Transition::new(1, 0))
            .build()
            .unwrap();

        assert_eq!(fsm.states().len(), 2);
        assert_eq!(fsm.transitions().len(), 2);
        assert!(fsm.transitions()[0].is_conditional());
    }

    #[test]
    fn transition_errors_surface_immediately() {
        let result = FsmBuilder::new()
            .state(State::new(0))
            .transition(TransitionBuilder::new().from(0));

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn add_multiple_states_and_transitions() {
        let fsm = FsmBuilder::new()
            .states(vec![State::new(0), State::new(1), State::new(2)])
            .transitions(vec![
                Transition::new(0, 1),
                Transition::new(1, 2),
                Transition::new(2, 0),
            ])
            .build()
            .unwrap();

        assert_eq!(fsm.states().len(), 3);
        assert_eq!(fsm.transitions().len(), 3);
    }
}
