//! Builder API for programmatic machine construction.
//!
//! The live-editing API on [`Automaton`](crate::core::Automaton) is
//! deliberately forgiving — duplicates and dangling transitions are silent
//! no-ops, the right behavior for free-form interactive editing. Code that
//! constructs machines wants the opposite, so the builder validates every
//! declaration and reports the first problem as a [`BuildError`].

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
