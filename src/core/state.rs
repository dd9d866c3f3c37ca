//! States of a finite state machine.
//!
//! A state is identified by its number, which is also its binary encoding in
//! the transition table. Each state carries the output values that hold
//! whenever the machine is in it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output signal values, ordered by signal name.
pub type ValueMap = BTreeMap<String, i64>;

/// A state of the machine.
///
/// The state numbered `0` is the initial state.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::State;
///
/// let idle = State::new(0).named("Idle").with_value("Busy", 0);
/// let run = State::new(1).named("Run").with_value("Busy", 1);
///
/// assert!(idle.is_initial());
/// assert!(!run.is_initial());
/// assert_eq!(run.values.get("Busy"), Some(&1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Binary encoding of the state.
    pub number: usize,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Outputs while in this state. Signals not listed are 0.
    #[serde(default)]
    pub values: ValueMap,
}

impl State {
    /// Create an unnamed state without outputs.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            name: None,
            values: ValueMap::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an output value for this state.
    pub fn with_value(mut self, signal: impl Into<String>, value: i64) -> Self {
        self.values.insert(signal.into(), value);
        self
    }

    /// Check if this is the initial state.
    pub fn is_initial(&self) -> bool {
        self.number == 0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.number),
            None => write!(f, "{}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_outputs() {
        let state = State::new(3);
        assert_eq!(state.number, 3);
        assert!(state.name.is_none());
        assert!(state.values.is_empty());
    }

    #[test]
    fn only_zero_is_initial() {
        assert!(State::new(0).is_initial());
        assert!(!State::new(1).is_initial());
    }

    #[test]
    fn values_are_ordered_by_name() {
        let state = State::new(1).with_value("Z", 1).with_value("A", 0);
        let names: Vec<_> = state.values.keys().cloned().collect();
        assert_eq!(names, vec!["A", "Z"]);
    }

    #[test]
    fn display_includes_name_when_present() {
        assert_eq!(State::new(2).to_string(), "2");
        assert_eq!(State::new(2).named("Wait").to_string(), "Wait (2)");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = State::new(1).named("Run").with_value("Y", 1);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn missing_fields_default_when_deserializing() {
        let state: State = serde_json::from_str(r#"{"number": 4}"#).unwrap();
        assert_eq!(state, State::new(4));
    }
}
