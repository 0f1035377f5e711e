//! Data-model error types.

use thiserror::Error;

/// Errors surfaced by the automaton mutation API.
///
/// Routine outcomes of free-form editing (duplicate state names, transitions
/// naming unknown states) are *not* errors — those operations report an
/// ignored result instead. Only requests that cannot be honored at all land
/// here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The operation referenced a state name not present in the model.
    #[error("Unknown state '{name}'")]
    UnknownState { name: String },
}
