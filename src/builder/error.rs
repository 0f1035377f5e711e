//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building a machine programmatically.
///
/// Unlike the forgiving live-editing API, the builder treats these as hard
/// errors: code that constructs a machine wants its mistakes surfaced, not
/// silently dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{name}' is declared more than once")]
    DuplicateState { name: String },

    #[error("Transition endpoint '{name}' is not a declared state")]
    UnknownEndpoint { name: String },

    #[error("Start state '{name}' is not a declared state")]
    UnknownStart { name: String },
}
