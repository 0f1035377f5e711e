//! Mealy: a Mealy machine modeling library
//!
//! Mealy models finite-state machines whose transitions carry input/output
//! signal pairs, and provides the three operations a machine editor needs
//! behind its UI: transition-table management, sequential/parallel
//! composition of two machines, and driving a machine with an input word to
//! produce an output word.
//!
//! The core is pure and synchronous: every operation is a transformation
//! over explicitly passed values, every failure is an inspectable value,
//! and nothing here renders, blocks, or holds global state. Rendering,
//! dialogs, and on-disk formats are the caller's concern; the caller talks
//! to this crate through the model API and serialization-neutral
//! [`Snapshot`]s.
//!
//! # Core Concepts
//!
//! - **Automaton**: named states with inert positions, ordered labeled
//!   transitions, and an optional designated start state
//! - **Simulation**: deterministic first-match walk producing an output word
//! - **Composition**: disjoint union of two machines, optionally chained
//!   with `λ/λ` bridge transitions
//!
//! # Example
//!
//! ```rust
//! use mealy::{automaton, MergeMode, Workspace};
//!
//! let machine = automaton! {
//!     states: [
//!         "A" => (0.0, 0.0),
//!         "B" => (120.0, 0.0),
//!     ],
//!     transitions: [
//!         "A" - "1" / "x" -> "B",
//!         "B" - "0" / "y" -> "A",
//!     ],
//!     start: "A",
//! }
//! .unwrap();
//!
//! let mut workspace = Workspace::with_model(machine);
//! assert_eq!(workspace.process("10").unwrap(), "xy");
//!
//! let second = workspace.snapshot();
//! workspace.load_secondary(&second).unwrap();
//! workspace.merge(MergeMode::Sequential).unwrap();
//! assert!(workspace.model().contains_state("A_2"));
//! ```

pub mod builder;
pub mod compose;
pub mod core;
pub mod sim;
pub mod snapshot;
pub mod workspace;

// Re-export commonly used types
pub use crate::core::{Automaton, ModelError, Position, State, Transition};
pub use builder::{AutomatonBuilder, BuildError};
pub use compose::{merge, ComposeError, MergeMode, EPSILON};
pub use sim::{run, SimError, Step, Trace};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
pub use workspace::Workspace;
