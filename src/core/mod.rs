//! Core Mealy machine data model.
//!
//! This module contains the automaton data model and its mutation API:
//! - Named states carrying inert 2D positions
//! - Labeled transitions with input/output signal pairs
//! - The `Automaton` owning both, plus an optional designated start state
//!
//! All operations here are pure, synchronous transformations over the model
//! they are called on; nothing performs I/O or touches global state.

mod automaton;
mod error;
mod state;
mod transition;

pub use automaton::Automaton;
pub use error::ModelError;
pub use state::{Position, State};
pub use transition::Transition;
