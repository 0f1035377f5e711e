//! Word-processing simulation.
//!
//! Drives a machine with an input word, one symbol at a time, concatenating
//! the output signals of the transitions taken. The walk is deterministic:
//! when several transitions leave the current state on the same symbol, the
//! first-added one wins. Multiple matches are not an error.
//!
//! Simulation never mutates the machine. The walker's notion of "current
//! state" is local to the run; the model's designated start state is a
//! read-only input and is never updated mid-run.

mod error;
mod trace;

pub use error::SimError;
pub use trace::{Step, Trace};

use crate::core::Automaton;

/// Run `input_word` through `model` starting at `start`.
///
/// Returns the concatenated output word, or a structured failure. The
/// contract is all-or-nothing: a word that cannot be fully consumed reports
/// [`SimError::NoTransition`] rather than a partial output. An empty word
/// trivially succeeds with empty output.
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
/// machine.add_transition("B", "A", "0", "y");
///
/// assert_eq!(mealy::sim::run(&machine, "A", "10").unwrap(), "xy");
/// ```
pub fn run(model: &Automaton, start: &str, input_word: &str) -> Result<String, SimError> {
    trace(model, start, input_word).map(|t| t.output())
}

/// Like [`run`], but records every step taken.
///
/// Useful for callers that want to display the path walked alongside the
/// output word.
pub fn trace(model: &Automaton, start: &str, input_word: &str) -> Result<Trace, SimError> {
    if !model.contains_state(start) {
        return Err(SimError::UnknownState {
            name: start.to_string(),
        });
    }

    let mut current = start.to_string();
    let mut steps = Vec::new();

    for symbol in input_word.chars() {
        let transition = model
            .transitions_from(&current)
            .into_iter()
            .find(|t| t.consumes(symbol))
            .ok_or_else(|| SimError::NoTransition {
                state: current.clone(),
                symbol,
            })?;

        let step = Step {
            from: current,
            to: transition.target.clone(),
            input: symbol,
            output: transition.output.clone(),
        };
        current = step.to.clone();
        steps.push(step);
    }

    Ok(Trace::new(start, steps))
}
