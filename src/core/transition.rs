//! Transitions between states.

use super::guard::Guard;
use super::state::ValueMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transition from one state to another.
///
/// Without a guard the transition is unconditional: it is the default
/// successor of its start state. A guarded transition fires only where its
/// guard holds and then takes precedence over the unconditional one.
///
/// `values` override the start state's outputs on the rows where this
/// transition fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Number of the start state.
    pub from: usize,
    /// Number of the target state.
    pub to: usize,
    #[serde(default)]
    pub guard: Option<Guard>,
    #[serde(default)]
    pub values: ValueMap,
}

impl Transition {
    /// Create an unconditional transition.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            guard: None,
            values: ValueMap::new(),
        }
    }

    /// Attach a guard, making the transition conditional.
    pub fn when(mut self, guard: impl Into<Guard>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// Override an output value while this transition fires.
    pub fn with_value(mut self, signal: impl Into<String>, value: i64) -> Self {
        self.values.insert(signal.into(), value);
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.guard.is_some()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(guard) = &self.guard {
            write!(f, " [{guard}]")?;
        }
        if !self.values.is_empty() {
            let values: Vec<String> = self
                .values
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            write!(f, " {{{}}}", values.join(", "))?;
        }
        Ok(())
    }
}
