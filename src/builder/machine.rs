//! Builder for constructing machines.

use super::error::BuildError;
use crate::core::{Automaton, State, Transition};

/// Builder for constructing machines with a fluent API.
///
/// Declaration order is preserved: states and transitions land in the built
/// machine in the order they were declared, so tie-break behavior and the
/// "first state" used by sequential composition are exactly what the code
/// reads like.
///
/// # Example
///
/// ```rust
/// use mealy::AutomatonBuilder;
///
/// let machine = AutomatonBuilder::new()
///     .state("A", 0.0, 0.0)
///     .state("B", 120.0, 0.0)
///     .transition("A", "B", "1", "x")
///     .start("A")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), Some("A"));
/// ```
#[derive(Default)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    transitions: Vec<Transition>,
    start: Option<String>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state at the given coordinates.
    pub fn state(mut self, name: impl Into<String>, x: f64, y: f64) -> Self {
        self.states.push(State::new(name, x, y));
        self
    }

    /// Declare a transition between two declared states.
    pub fn transition(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        self.transitions
            .push(Transition::new(source, target, input, output));
        self
    }

    /// Designate the start state.
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Build the machine, validating every declaration.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let mut model = Automaton::new();

        for state in self.states {
            if !model.add_state(state.name.clone(), state.position.x, state.position.y) {
                return Err(BuildError::DuplicateState { name: state.name });
            }
        }

        for transition in self.transitions {
            for endpoint in [&transition.source, &transition.target] {
                if !model.contains_state(endpoint) {
                    return Err(BuildError::UnknownEndpoint {
                        name: endpoint.clone(),
                    });
                }
            }
            model.add_transition(
                transition.source,
                transition.target,
                transition.input,
                transition.output,
            );
        }

        if let Some(start) = self.start {
            model
                .set_current_state(&start)
                .map_err(|_| BuildError::UnknownStart { name: start })?;
        }

        Ok(model)
    }
}
