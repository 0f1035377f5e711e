//! The automaton owning states, transitions, and the designated start state.

use super::error::ModelError;
use super::state::State;
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// A Mealy machine: named states, ordered labeled transitions, and an
/// optional designated start state.
///
/// The model enforces two invariants through its mutation API:
///
/// - State names are unique; adding a duplicate is a silent no-op.
/// - Transitions never dangle; adding one whose endpoints are not known
///   state names is a silent no-op.
///
/// Fields are private so the invariants cannot be bypassed from outside.
/// States keep insertion order (composition relies on "first inserted
/// state"), and transition order is the tie-break order for simulation:
/// of several transitions matching the same state and symbol, the
/// first-added one wins.
///
/// # Example
///
/// ```rust
/// use mealy::Automaton;
///
/// let mut machine = Automaton::new();
/// machine.add_state("A", 0.0, 0.0);
/// machine.add_state("B", 120.0, 0.0);
/// machine.add_transition("A", "B", "1", "x");
/// machine.set_current_state("A").unwrap();
///
/// assert_eq!(machine.states().len(), 2);
/// assert_eq!(machine.current_state(), Some("A"));
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Automaton {
    states: Vec<State>,
    transitions: Vec<Transition>,
    current_state: Option<String>,
}

impl Automaton {
    /// Create an empty machine with no start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state at the given coordinates.
    ///
    /// Returns `false` (and changes nothing, position included) if a state
    /// with this name already exists.
    pub fn add_state(&mut self, name: impl Into<String>, x: f64, y: f64) -> bool {
        let name = name.into();
        if self.contains_state(&name) {
            return false;
        }
        self.states.push(State::new(name, x, y));
        true
    }

    /// Append a transition from `source` to `target`.
    ///
    /// Returns `false` (and changes nothing) if either endpoint is not a
    /// known state name. Duplicates are not collapsed: adding the same
    /// four-tuple twice yields two transitions, and the earlier one stays
    /// ahead in tie-break order.
    pub fn add_transition(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> bool {
        let source = source.into();
        let target = target.into();
        if !self.contains_state(&source) || !self.contains_state(&target) {
            return false;
        }
        self.transitions
            .push(Transition::new(source, target, input, output));
        true
    }

    /// Clear states, transitions, and the start state together.
    pub fn remove_all(&mut self) {
        self.states.clear();
        self.transitions.clear();
        self.current_state = None;
    }

    /// Designate `name` as the start state.
    ///
    /// Unlike the add operations this is not a silent no-op on bad input:
    /// pointing the machine at a state that does not exist is a caller
    /// request that cannot be honored, so it is rejected.
    pub fn set_current_state(&mut self, name: &str) -> Result<(), ModelError> {
        if !self.contains_state(name) {
            return Err(ModelError::UnknownState {
                name: name.to_string(),
            });
        }
        self.current_state = Some(name.to_string());
        Ok(())
    }

    /// The designated start state, if one has been set.
    pub fn current_state(&self) -> Option<&str> {
        self.current_state.as_deref()
    }

    /// Whether a state with this name exists.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.iter().any(|s| s.name == name)
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    /// All states in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// All transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Outgoing transitions of `name`, in insertion order.
    ///
    /// Per-source ordering is what makes simulation's first-match tie-break
    /// deterministic, so this must never reorder.
    pub fn transitions_from(&self, name: &str) -> Vec<&Transition> {
        self.transitions.iter().filter(|t| t.source == name).collect()
    }
}
