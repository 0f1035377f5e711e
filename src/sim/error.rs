//! Simulation error types.

use thiserror::Error;

/// Errors that can occur while running an input word through a machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Simulation was requested from a machine's designated start state,
    /// but none has been set.
    #[error("No start state is set")]
    NoStartState,

    /// The requested start state does not exist in the machine.
    #[error("Unknown start state '{name}'")]
    UnknownState { name: String },

    /// No outgoing transition of `state` consumes `symbol`.
    #[error("No transition from state '{state}' on symbol '{symbol}'")]
    NoTransition { state: String, symbol: char },
}
