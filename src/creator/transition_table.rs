//! Transition table construction.

use super::error::FsmError;
use crate::config::CreatorConfig;
use crate::core::{Fsm, State, Transition};
use crate::expression::Context;
use crate::table::{Ternary, TruthTable};
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Creates the transition table of a finite state machine.
///
/// The table's inputs are the current state bits `Qn_n` (highest first)
/// followed by the input variables read by guards. Its results are the next
/// state bits `Qn_n+1` (highest first) followed by the output signals in
/// lexicographic order.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{Fsm, Guard, State, Transition};
/// use fsm_table::creator::TransitionTableCreator;
/// use fsm_table::table::Ternary;
///
/// let fsm = Fsm::new(
///     vec![State::new(0), State::new(1).with_value("Y", 1)],
///     vec![
///         Transition::new(0, 1).when(Guard::parse("Go").unwrap()),
///         Transition::new(1, 0),
///     ],
/// );
///
/// let table = TransitionTableCreator::new(&fsm).create().unwrap();
/// assert_eq!(table.variables(), ["Q0_n", "Go"]);
/// assert_eq!(table.result_names(), ["Q0_n+1", "Y"]);
///
/// // state 0 stays while Go is low and moves to 1 when it is high
/// assert_eq!(table.value(0, 0).unwrap(), Ternary::Zero);
/// assert_eq!(table.value(1, 0).unwrap(), Ternary::One);
/// ```
pub struct TransitionTableCreator<'a> {
    fsm: &'a Fsm,
    states: &'a [State],
    transitions: &'a [Transition],
    config: CreatorConfig,
}

/// Rows claimed by one category of transitions.
///
/// Each category gets its own set, so a guarded transition may overwrite a
/// row written by an unconditional one but never one written by its peers.
struct RowClaims {
    claimed: Vec<bool>,
}

impl RowClaims {
    fn new(rows: usize) -> Self {
        Self {
            claimed: vec![false; rows],
        }
    }

    fn claim(&mut self, row: usize, transition: &Transition) -> Result<(), FsmError> {
        if self.claimed[row] {
            return Err(FsmError::NonDeterministicTransition {
                transition: transition.to_string(),
            });
        }
        self.claimed[row] = true;
        Ok(())
    }
}

/// Column layout of the table under construction.
struct Layout {
    state_bits: usize,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl Layout {
    fn rows_per_state(&self) -> usize {
        1 << self.inputs.len()
    }

    fn output_column(&self, index: usize) -> usize {
        self.state_bits + index
    }
}

impl<'a> TransitionTableCreator<'a> {
    pub fn new(fsm: &'a Fsm) -> Self {
        Self::with_config(fsm, CreatorConfig::default())
    }

    pub fn with_config(fsm: &'a Fsm, config: CreatorConfig) -> Self {
        Self {
            fsm,
            states: fsm.states(),
            transitions: fsm.transitions(),
            config,
        }
    }

    /// Build the transition table.
    pub fn create(&self) -> Result<TruthTable, FsmError> {
        let state_bits = state_bits(self.states)?;
        check_endpoints(self.states, self.transitions)?;
        for (name, value) in self.all_values() {
            output_value(name, value)?;
        }

        let inputs: Vec<String> = collect_input_variables(self.transitions)
            .into_iter()
            .collect();
        let variables = state_bits + inputs.len();
        let max = self.config.variable_limit();
        if variables > max {
            return Err(FsmError::TableTooLarge { variables, max });
        }

        let layout = Layout {
            state_bits,
            inputs,
            outputs: self.fsm.output_names().into_iter().collect(),
        };
        debug!(
            state_bits,
            inputs = layout.inputs.len(),
            outputs = layout.outputs.len(),
            "creating transition table"
        );

        let mut table = TruthTable::new((0..state_bits).rev().map(|i| format!("Q{i}_n")))?;
        for i in (0..state_bits).rev() {
            table.add_result(format!("Q{i}_n+1"))?;
        }
        for name in &layout.outputs {
            table.add_result(name.as_str())?;
        }
        table.fill(Ternary::DontCare);

        // one row per state: its outputs and "stay" as default successor
        for state in self.states {
            let row = state.number;
            write_state_number(&mut table, &layout, row, state.number)?;
            for (i, name) in layout.outputs.iter().enumerate() {
                let value = state.values.get(name).copied().unwrap_or(0);
                table.set_value(row, layout.output_column(i), output_value(name, value)?)?;
            }
        }

        for name in &layout.inputs {
            table.add_variable(name.as_str())?;
        }
        debug!(
            rows = table.rows(),
            rows_per_state = layout.rows_per_state(),
            "expanded table with input variables"
        );

        let mut claims = RowClaims::new(table.rows());
        for transition in self.transitions.iter().filter(|t| !t.is_conditional()) {
            fill_in_transition(&mut table, &layout, transition, &mut claims)?;
        }

        let mut claims = RowClaims::new(table.rows());
        for transition in self.transitions.iter().filter(|t| t.is_conditional()) {
            fill_in_transition(&mut table, &layout, transition, &mut claims)?;
        }

        Ok(table)
    }

    fn all_values(&self) -> impl Iterator<Item = (&'a String, i64)> {
        let states: &'a [State] = self.states;
        let transitions: &'a [Transition] = self.transitions;
        states
            .iter()
            .flat_map(|s| s.values.iter())
            .chain(transitions.iter().flat_map(|t| t.values.iter()))
            .map(|(name, value)| (name, *value))
    }
}

fn fill_in_transition(
    table: &mut TruthTable,
    layout: &Layout,
    transition: &Transition,
    claims: &mut RowClaims,
) -> Result<(), FsmError> {
    let rows_per_state = layout.rows_per_state();
    let start_row = transition.from * rows_per_state;

    for offset in 0..rows_per_state {
        if let Some(guard) = &transition.guard {
            let inputs = Context::from_bits(&layout.inputs, offset);
            if !guard.check(&inputs)? {
                continue;
            }
        }

        let row = start_row + offset;
        claims.claim(row, transition)?;
        trace!(row, %transition, "transition fires");

        write_state_number(table, layout, row, transition.to)?;
        for (i, name) in layout.outputs.iter().enumerate() {
            if let Some(&value) = transition.values.get(name) {
                table.set_value(row, layout.output_column(i), output_value(name, value)?)?;
            }
        }
    }

    Ok(())
}

/// Writes `number` into the next state columns, highest bit first.
fn write_state_number(
    table: &mut TruthTable,
    layout: &Layout,
    row: usize,
    number: usize,
) -> Result<(), FsmError> {
    for column in 0..layout.state_bits {
        let bit = layout.state_bits - 1 - column;
        table.set_value(row, column, Ternary::from(number & (1 << bit) != 0))?;
    }
    Ok(())
}

/// Number of bits needed to encode every state number.
///
/// Fails if a number is used twice or no initial state exists. At least one
/// bit is always used.
pub fn state_bits(states: &[State]) -> Result<usize, FsmError> {
    let mut numbers = HashSet::new();
    let mut max_number = 0;
    for state in states {
        if !numbers.insert(state.number) {
            return Err(FsmError::DuplicateStateNumber {
                number: state.number,
            });
        }
        max_number = max_number.max(state.number);
    }

    if !numbers.contains(&0) {
        return Err(FsmError::MissingInitialState);
    }

    let bits = (usize::BITS - max_number.leading_zeros()) as usize;
    Ok(bits.max(1))
}

/// Input variables read by the transitions' guards, in first-seen order.
pub fn collect_input_variables(transitions: &[Transition]) -> IndexSet<String> {
    let mut vars = IndexSet::new();
    for guard in transitions.iter().filter_map(|t| t.guard.as_ref()) {
        guard.collect_variables(&mut vars);
    }
    vars
}

pub(crate) fn check_endpoints(states: &[State], transitions: &[Transition]) -> Result<(), FsmError> {
    match endpoint_errors(states, transitions).next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub(crate) fn endpoint_errors<'a>(
    states: &'a [State],
    transitions: &'a [Transition],
) -> impl Iterator<Item = FsmError> + 'a {
    let known: HashSet<usize> = states.iter().map(|s| s.number).collect();
    transitions.iter().flat_map(move |t| {
        [t.from, t.to]
            .into_iter()
            .filter(|n| !known.contains(n))
            .map(|number| FsmError::UnknownState {
                number,
                transition: t.to_string(),
            })
            .collect::<Vec<_>>()
    })
}

pub(crate) fn output_value(name: &str, value: i64) -> Result<Ternary, FsmError> {
    Ternary::try_from(value).map_err(|_| FsmError::InvalidOutputValue {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;

    fn guard(text: &str) -> Guard {
        Guard::parse(text).unwrap()
    }

    fn states(numbers: &[usize]) -> Vec<State> {
        numbers.iter().map(|n| State::new(*n)).collect()
    }

    fn next_state(table: &TruthTable, row: usize) -> Option<usize> {
        let bits = table
            .result_names()
            .iter()
            .filter(|r| r.ends_with("_n+1"))
            .count();
        let mut number = 0;
        for column in 0..bits {
            match table.value(row, column).unwrap() {
                Ternary::One => number = number * 2 + 1,
                Ternary::Zero => number *= 2,
                Ternary::DontCare => return None,
            }
        }
        Some(number)
    }

    #[test]
    fn state_bits_cover_largest_number() {
        assert_eq!(state_bits(&states(&[0])).unwrap(), 1);
        assert_eq!(state_bits(&states(&[0, 1])).unwrap(), 1);
        assert_eq!(state_bits(&states(&[0, 1, 2])).unwrap(), 2);
        assert_eq!(state_bits(&states(&[0, 4])).unwrap(), 3);
        assert_eq!(state_bits(&states(&[3, 0, 7])).unwrap(), 3);
        assert_eq!(state_bits(&states(&[0, 8])).unwrap(), 4);
    }

    #[test]
    fn duplicate_state_number_is_rejected() {
        assert_eq!(
            state_bits(&states(&[0, 1, 1])),
            Err(FsmError::DuplicateStateNumber { number: 1 })
        );
    }

    #[test]
    fn missing_initial_state_is_rejected() {
        assert_eq!(
            state_bits(&states(&[1, 2])),
            Err(FsmError::MissingInitialState)
        );
        assert_eq!(state_bits(&[]), Err(FsmError::MissingInitialState));
    }

    #[test]
    fn input_variables_in_first_seen_order() {
        let transitions = vec![
            Transition::new(0, 1).when(guard("B & A")),
            Transition::new(1, 0),
            Transition::new(1, 2).when(guard("C | A")),
        ];
        let vars: Vec<_> = collect_input_variables(&transitions).into_iter().collect();
        assert_eq!(vars, vec!["B", "A", "C"]);
    }

    #[test]
    fn two_state_toggle() {
        let fsm = Fsm::new(
            vec![State::new(0), State::new(1).with_value("Y", 1)],
            vec![Transition::new(0, 1), Transition::new(1, 0)],
        );
        let table = TransitionTableCreator::new(&fsm).create().unwrap();

        assert_eq!(table.rows(), 2);
        assert_eq!(table.variables(), ["Q0_n"]);
        assert_eq!(table.result_names(), ["Q0_n+1", "Y"]);
        assert_eq!(table.row(0).unwrap(), [Ternary::One, Ternary::Zero]);
        assert_eq!(table.row(1).unwrap(), [Ternary::Zero, Ternary::One]);
    }

    #[test]
    fn state_without_transitions_stays() {
        let fsm = Fsm::new(states(&[0, 1, 2]), vec![Transition::new(0, 1)]);
        let table = TransitionTableCreator::new(&fsm).create().unwrap();

        assert_eq!(next_state(&table, 0), Some(1));
        assert_eq!(next_state(&table, 1), Some(1));
        assert_eq!(next_state(&table, 2), Some(2));
        assert_eq!(next_state(&table, 3), None);
    }

    #[test]
    fn unused_state_rows_are_dont_care() {
        let fsm = Fsm::new(
            vec![State::new(0).with_value("Y", 1), State::new(2)],
            vec![Transition::new(0, 2).when(guard("A"))],
        );
        let table = TransitionTableCreator::new(&fsm).create().unwrap();

        // Q1 Q0 A: state 1 and state 3 blocks are rows 2,3 and 6,7
        for row in [2, 3, 6, 7] {
            assert!(table.row(row).unwrap().iter().all(|c| c.is_dont_care()));
        }
    }

    #[test]
    fn guarded_transition_overrides_default() {
        let fsm = Fsm::new(
            states(&[0, 1, 2]),
            vec![
                Transition::new(0, 1),
                Transition::new(0, 2).when(guard("X")),
            ],
        );
        let table = TransitionTableCreator::new(&fsm).create().unwrap();

        assert_eq!(next_state(&table, 0), Some(1));
        assert_eq!(next_state(&table, 1), Some(2));
    }

    #[test]
    fn transition_outputs_overlay_state_outputs() {
        let fsm = Fsm::new(
            vec![
                State::new(0).with_value("A", 1).with_value("B", 1),
                State::new(1),
            ],
            vec![Transition::new(0, 1).when(guard("In")).with_value("B", 0)],
        );
        let table = TransitionTableCreator::new(&fsm).create().unwrap();
        let a = table.result_index("A").unwrap();
        let b = table.result_index("B").unwrap();

        // In = 0: state outputs
        assert_eq!(table.value(0, a).unwrap(), Ternary::One);
        assert_eq!(table.value(0, b).unwrap(), Ternary::One);
        // In = 1: B overridden, A untouched
        assert_eq!(table.value(1, a).unwrap(), Ternary::One);
        assert_eq!(table.value(1, b).unwrap(), Ternary::Zero);
        // state 1 mentions neither signal
        assert_eq!(table.value(2, a).unwrap(), Ternary::Zero);
        assert_eq!(table.value(3, b).unwrap(), Ternary::Zero);
    }

    #[test]
    fn two_unconditional_transitions_are_not_deterministic() {
        let fsm = Fsm::new(
            states(&[0, 1, 2]),
            vec![Transition::new(0, 1), Transition::new(0, 2)],
        );
        let result = TransitionTableCreator::new(&fsm).create();

        assert_eq!(
            result,
            Err(FsmError::NonDeterministicTransition {
                transition: "0 -> 2".to_string()
            })
        );
    }

    #[test]
    fn overlapping_guards_are_not_deterministic() {
        let fsm = Fsm::new(
            states(&[0, 1, 2]),
            vec![
                Transition::new(0, 1).when(guard("A")),
                Transition::new(0, 2).when(guard("B")),
            ],
        );
        let result = TransitionTableCreator::new(&fsm).create();

        assert!(matches!(
            result,
            Err(FsmError::NonDeterministicTransition { transition }) if transition == "0 -> 2 [B]"
        ));
    }

    #[test]
    fn exclusive_guards_are_deterministic() {
        let fsm = Fsm::new(
            states(&[0, 1, 2]),
            vec![
                Transition::new(0, 1).when(guard("A & B")),
                Transition::new(0, 2).when(guard("!A")),
                Transition::new(1, 0).when(guard("A")),
                Transition::new(2, 0).when(guard("A")),
            ],
        );
        let table = TransitionTableCreator::new(&fsm).create().unwrap();

        // Q1 Q0 A B
        assert_eq!(next_state(&table, 0b0000), Some(2));
        assert_eq!(next_state(&table, 0b0001), Some(2));
        assert_eq!(next_state(&table, 0b0010), Some(0));
        assert_eq!(next_state(&table, 0b0011), Some(1));
    }

    #[test]
    fn guards_on_different_states_do_not_conflict() {
        let fsm = Fsm::new(
            states(&[0, 1]),
            vec![
                Transition::new(0, 1).when(guard("A")),
                Transition::new(1, 0).when(guard("A")),
            ],
        );
        assert!(TransitionTableCreator::new(&fsm).create().is_ok());
    }

    #[test]
    fn unknown_target_state_is_rejected() {
        let fsm = Fsm::new(states(&[0, 1]), vec![Transition::new(0, 5)]);
        assert_eq!(
            TransitionTableCreator::new(&fsm).create(),
            Err(FsmError::UnknownState {
                number: 5,
                transition: "0 -> 5".to_string()
            })
        );
    }

    #[test]
    fn non_binary_output_is_rejected() {
        let fsm = Fsm::new(vec![State::new(0).with_value("Y", 3)], vec![]);
        assert_eq!(
            TransitionTableCreator::new(&fsm).create(),
            Err(FsmError::InvalidOutputValue {
                name: "Y".to_string(),
                value: 3
            })
        );
    }

    #[test]
    fn variable_limit_is_enforced() {
        let fsm = Fsm::new(
            states(&[0, 1]),
            vec![Transition::new(0, 1).when(guard("A & B & C"))],
        );
        let config = CreatorConfig::default().max_variables(3);

        assert_eq!(
            TransitionTableCreator::with_config(&fsm, config).create(),
            Err(FsmError::TableTooLarge {
                variables: 4,
                max: 3
            })
        );
    }

    #[test]
    fn input_named_like_state_bit_is_rejected() {
        let fsm = Fsm::new(
            states(&[0, 1]),
            vec![Transition::new(0, 1).when(guard("Q0_n"))],
        );
        assert!(matches!(
            TransitionTableCreator::new(&fsm).create(),
            Err(FsmError::Table(_))
        ));
    }
}
