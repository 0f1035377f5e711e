//! State and position value types.

use serde::{Deserialize, Serialize};

/// A 2D coordinate carried for rendering and persistence.
///
/// Positions have no simulation semantics. The core stores them as inert
/// data on behalf of whatever draws or saves the machine; moving a state
/// around changes nothing about how the machine behaves.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named state of a Mealy machine.
///
/// The name is the only key: lookup, transition endpoints, and identity all
/// go through it. Within one [`Automaton`](crate::core::Automaton) no two
/// states share a name.
///
/// # Example
///
/// ```rust
/// use mealy::State;
///
/// let state = State::new("Idle", 40.0, 80.0);
/// assert_eq!(state.name, "Idle");
/// assert_eq!(state.position.x, 40.0);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub position: Position,
}

impl State {
    /// Create a state at the given coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }
}
