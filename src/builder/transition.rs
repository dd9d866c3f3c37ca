//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, Transition, ValueMap};
use crate::expression::Expression;

/// Builder for constructing transitions with a fluent API.
///
/// Guards can be given as text with [`when`](TransitionBuilder::when); the
/// text is parsed on [`build`](TransitionBuilder::build). Empty text means
/// no guard.
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<usize>,
    to: Option<usize>,
    guard: Option<Guard>,
    condition: Option<String>,
    values: ValueMap,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: usize) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: usize) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard expression (optional).
    pub fn guard(mut self, expression: Expression) -> Self {
        self.guard = Some(Guard::new(expression));
        self.condition = None;
        self
    }

    /// Add a guard from its text form (optional).
    pub fn when(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self.guard = None;
        self
    }

    /// Override an output while the transition fires (optional).
    pub fn output(mut self, signal: impl Into<String>, value: i64) -> Self {
        self.values.insert(signal.into(), value);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        let guard = match self.condition {
            Some(text) if !text.trim().is_empty() => {
                let guard = Guard::parse(&text)
                    .map_err(|source| BuildError::InvalidGuard { text, source })?;
                Some(guard)
            }
            Some(_) => None,
            None => self.guard,
        };

        Ok(Transition {
            from,
            to,
            guard,
            values: self.values,
        })
    }
}
