//! Guard conditions for controlling state transitions.
//!
//! A guard is a boolean expression over the machine's input variables. A
//! transition with a guard only fires for input assignments where the guard
//! evaluates to true.

use crate::expression::{Context, Expression, ExpressionError};
use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Condition that determines if a transition fires.
///
/// Guards serialize as their text form. The expression is normalized on
/// construction so that text parses back to an equal guard; serializing a
/// guard whose variable names cannot be written as text fails.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::Guard;
/// use fsm_table::expression::Context;
///
/// let guard = Guard::parse("Start & !Stop").unwrap();
///
/// let mut inputs = Context::new();
/// inputs.set("Start", true);
/// inputs.set("Stop", false);
/// assert!(guard.check(&inputs).unwrap());
///
/// inputs.set("Stop", true);
/// assert!(!guard.check(&inputs).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guard {
    expression: Expression,
}

impl Guard {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression: expression.normalize(),
        }
    }

    /// Parse a guard from its text form.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        Expression::parse(text).map(Self::new)
    }

    /// Check if the guard holds under the given inputs.
    pub fn check(&self, inputs: &Context) -> Result<bool, ExpressionError> {
        self.expression.evaluate(inputs)
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Add the input variables this guard reads to `vars`.
    pub fn collect_variables(&self, vars: &mut IndexSet<String>) {
        self.expression.collect_variables(vars);
    }
}

impl From<Expression> for Guard {
    fn from(expression: Expression) -> Self {
        Self::new(expression)
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl Serialize for Guard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.expression
            .check_identifiers()
            .map_err(serde::ser::Error::custom)?;
        serializer.collect_str(&self.expression)
    }
}

impl<'de> Deserialize<'de> for Guard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Guard::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_reports_unassigned_inputs() {
        let guard = Guard::parse("A | B").unwrap();
        let mut inputs = Context::new();
        inputs.set("A", false);

        assert!(matches!(
            guard.check(&inputs),
            Err(ExpressionError::UnassignedVariable { name }) if name == "B"
        ));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::parse("A ^ B").unwrap();
        let inputs: Context = [("A", true), ("B", true)].into_iter().collect();

        assert_eq!(guard.check(&inputs), guard.check(&inputs));
    }

    #[test]
    fn collects_variables_in_order() {
        let guard = Guard::parse("Y & X | Y").unwrap();
        let mut vars = IndexSet::new();
        guard.collect_variables(&mut vars);

        let vars: Vec<_> = vars.into_iter().collect();
        assert_eq!(vars, vec!["Y", "X"]);
    }

    #[test]
    fn serializes_as_text() {
        let guard = Guard::parse("A & !B").unwrap();
        let json = serde_json::to_string(&guard).unwrap();
        assert_eq!(json, r#""A & !B""#);

        let back: Guard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guard);
    }

    #[test]
    fn degenerate_expressions_are_normalized() {
        let guard = Guard::new(Expression::Or(vec![Expression::var("A")]));
        assert_eq!(guard.expression(), &Expression::var("A"));

        let guard = Guard::new(Expression::And(vec![]));
        assert_eq!(guard.to_string(), "1");
    }

    #[test]
    fn unwritable_variable_name_fails_to_serialize() {
        let guard = Guard::new(Expression::var("Start Button"));
        assert!(serde_json::to_string(&guard).is_err());
    }

    #[test]
    fn invalid_text_fails_to_deserialize() {
        let result: Result<Guard, _> = serde_json::from_str(r#""A &""#);
        assert!(result.is_err());
    }
}
