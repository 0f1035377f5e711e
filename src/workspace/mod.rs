//! An editing session over a live machine.
//!
//! The workspace is the core-side counterpart of whatever drives the crate
//! interactively: it owns the machine being edited plus an optionally
//! loaded secondary machine, and wires loading, merging, and word
//! processing together. All real work is delegated to [`compose`],
//! [`sim`], and [`snapshot`]; the workspace only adds the session-level
//! failure cases (merge with nothing loaded, processing with no start
//! state).
//!
//! [`compose`]: crate::compose
//! [`sim`]: crate::sim
//! [`snapshot`]: crate::snapshot

use crate::compose::{self, ComposeError, MergeMode};
use crate::core::Automaton;
use crate::sim::{self, SimError};
use crate::snapshot::{Snapshot, SnapshotError};

/// A live machine plus an optionally loaded secondary machine.
///
/// # Example
///
/// ```rust
/// use mealy::Workspace;
///
/// let mut workspace = Workspace::new();
/// workspace.model_mut().add_state("A", 0.0, 0.0);
/// workspace.model_mut().add_state("B", 120.0, 0.0);
/// workspace.model_mut().add_transition("A", "B", "1", "x");
/// workspace.model_mut().set_current_state("A").unwrap();
///
/// assert_eq!(workspace.process("1").unwrap(), "x");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Workspace {
    model: Automaton,
    secondary: Option<Automaton>,
}

impl Workspace {
    /// Create a workspace with an empty machine and no secondary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace around an existing machine.
    pub fn with_model(model: Automaton) -> Self {
        Self {
            model,
            secondary: None,
        }
    }

    /// The machine being edited.
    pub fn model(&self) -> &Automaton {
        &self.model
    }

    /// Mutable access to the machine being edited.
    pub fn model_mut(&mut self) -> &mut Automaton {
        &mut self.model
    }

    /// The loaded secondary machine, if any.
    pub fn secondary(&self) -> Option<&Automaton> {
        self.secondary.as_ref()
    }

    /// Replace the machine wholesale from a snapshot.
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.model = snapshot.restore()?;
        Ok(())
    }

    /// Load a secondary machine from a snapshot, ready to be merged.
    pub fn load_secondary(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.secondary = Some(snapshot.restore()?);
        Ok(())
    }

    /// Set the secondary machine directly.
    pub fn set_secondary(&mut self, model: Automaton) {
        self.secondary = Some(model);
    }

    /// Snapshot the machine being edited.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.model)
    }

    /// Fold the loaded secondary machine into the live one.
    ///
    /// The secondary stays loaded afterwards, so it can be merged into the
    /// combined result again.
    pub fn merge(&mut self, mode: MergeMode) -> Result<(), ComposeError> {
        let secondary = self
            .secondary
            .as_ref()
            .ok_or(ComposeError::NoSecondaryLoaded)?;
        self.model = compose::merge(&self.model, secondary, mode)?;
        Ok(())
    }

    /// Run `input_word` from the machine's designated start state.
    ///
    /// The start state is a read-only input here: processing a word never
    /// moves it.
    pub fn process(&self, input_word: &str) -> Result<String, SimError> {
        let start = self.model.current_state().ok_or(SimError::NoStartState)?;
        sim::run(&self.model, start, input_word)
    }
}
