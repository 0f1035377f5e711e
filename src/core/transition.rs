//! Labeled transitions carrying input/output signal pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A transition between two named states, consuming `input` and emitting
/// `output`.
///
/// Endpoints are state *names*, not state references; the owning
/// [`Automaton`](crate::core::Automaton) guarantees they named real states
/// when the transition was created. Signals are free-form strings — they may
/// be multi-character, or the `λ` sentinel used by sequential composition.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub source: String,
    pub target: String,
    pub input: String,
    pub output: String,
}

impl Transition {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            input: input.into(),
            output: output.into(),
        }
    }

    /// Check whether this transition consumes exactly `symbol`.
    ///
    /// Simulation decomposes the input word one character at a time, so a
    /// multi-character input signal never matches a single symbol.
    pub fn consumes(&self, symbol: char) -> bool {
        let mut chars = self.input.chars();
        chars.next() == Some(symbol) && chars.next().is_none()
    }
}

impl fmt::Display for Transition {
    /// Renders the transition-list line: `A -- 1/x --> B`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- {}/{} --> {}",
            self.source, self.input, self.output, self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_matches_single_character_input() {
        let transition = Transition::new("A", "B", "1", "x");
        assert!(transition.consumes('1'));
        assert!(!transition.consumes('0'));
    }

    #[test]
    fn consumes_rejects_multi_character_input() {
        let transition = Transition::new("A", "B", "10", "x");
        assert!(!transition.consumes('1'));
        assert!(!transition.consumes('0'));
    }

    #[test]
    fn consumes_handles_non_ascii_symbols() {
        let transition = Transition::new("A", "B", "λ", "λ");
        assert!(transition.consumes('λ'));
    }

    #[test]
    fn display_renders_list_line() {
        let transition = Transition::new("A", "B", "1", "x");
        assert_eq!(transition.to_string(), "A -- 1/x --> B");
    }

    #[test]
    fn transition_roundtrips_through_json() {
        let transition = Transition::new("S0", "S1", "in", "out");
        let json = serde_json::to_string(&transition).unwrap();
        let back: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, back);
    }
}
