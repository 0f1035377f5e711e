//! Step-by-step records of a simulation run.

use serde::{Deserialize, Serialize};

/// One executed simulation step: the transition taken for one input symbol.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Step {
    /// State the step left from.
    pub from: String,
    /// State the step arrived at.
    pub to: String,
    /// The symbol consumed.
    pub input: char,
    /// The signal emitted.
    pub output: String,
}

/// Record of a complete, successful simulation run.
///
/// Traces are immutable values produced by [`trace`](crate::sim::trace);
/// they carry enough to reconstruct both the output word and the path of
/// states visited.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trace {
    start: String,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(start: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            start: start.into(),
            steps,
        }
    }

    /// The state the run started from.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// All steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The concatenated output word.
    pub fn output(&self) -> String {
        self.steps.iter().map(|s| s.output.as_str()).collect()
    }

    /// The states visited, starting state first.
    ///
    /// A run over the empty word visited only its start state.
    pub fn path(&self) -> Vec<&str> {
        let mut path = vec![self.start.as_str()];
        for step in &self.steps {
            path.push(step.to.as_str());
        }
        path
    }
}
