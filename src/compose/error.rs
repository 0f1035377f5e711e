//! Composition error types.

use thiserror::Error;

/// Errors that can occur when merging two machines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// Sequential composition needs the primary machine's start state to
    /// know where the second machine attaches, and none is set.
    #[error("Primary machine has no start state; set one before merging sequentially")]
    NoStartState,

    /// A merge was requested but no secondary machine has been loaded.
    #[error("No secondary machine is loaded")]
    NoSecondaryLoaded,
}
