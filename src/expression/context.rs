//! Variable assignments used to evaluate guard expressions.

use std::collections::HashMap;

/// A total (or partial) assignment of boolean values to named input variables.
///
/// # Example
///
/// ```rust
/// use fsm_table::expression::Context;
///
/// let mut context = Context::new();
/// context.set("A", true);
/// assert_eq!(context.get("A"), Some(true));
/// assert_eq!(context.get("B"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    values: HashMap<String, bool>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value, replacing any previous one.
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Look up the value of a variable.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Builds a context from the bits of `assignment`.
    ///
    /// The first name is the most significant bit, matching the row
    /// addressing of a [`TruthTable`](crate::table::TruthTable).
    pub fn from_bits<S: AsRef<str>>(names: &[S], assignment: usize) -> Self {
        let mut context = Self::new();
        let count = names.len();
        for (i, name) in names.iter().enumerate() {
            let bit = count - 1 - i;
            context.set(name.as_ref(), assignment & (1 << bit) != 0);
        }
        context
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Context {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_value() {
        let mut context = Context::new();
        context.set("X", true);
        context.set("X", false);
        assert_eq!(context.get("X"), Some(false));
    }

    #[test]
    fn from_bits_uses_first_name_as_msb() {
        let context = Context::from_bits(&["A", "B", "C"], 0b100);
        assert_eq!(context.get("A"), Some(true));
        assert_eq!(context.get("B"), Some(false));
        assert_eq!(context.get("C"), Some(false));

        let context = Context::from_bits(&["A", "B", "C"], 0b011);
        assert_eq!(context.get("A"), Some(false));
        assert_eq!(context.get("B"), Some(true));
        assert_eq!(context.get("C"), Some(true));
    }

    #[test]
    fn collects_from_pairs() {
        let context: Context = [("A", true), ("B", false)].into_iter().collect();
        assert_eq!(context.get("A"), Some(true));
        assert_eq!(context.get("B"), Some(false));
    }
}
