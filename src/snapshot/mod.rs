//! Serialization-neutral snapshots of a machine.
//!
//! A snapshot carries the full data model — states with positions, the
//! ordered transition sequence, and the designated start state — in a form
//! an external collaborator can persist however it likes. JSON and compact
//! binary codecs are provided; the field set and semantics, not the on-disk
//! encoding, are the contract.

use crate::core::Automaton;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One state as persisted: name plus coordinates.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StateRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// One transition as persisted.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub source: String,
    pub target: String,
    pub input: String,
    pub output: String,
}

/// Serializable snapshot of a machine.
///
/// States are stored as an *ordered* list of records rather than a map so
/// insertion order survives the round trip — composition depends on a
/// machine's first-inserted state, and a JSON object would not guarantee
/// key order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// States in insertion order
    pub states: Vec<StateRecord>,

    /// Transitions in insertion (tie-break) order
    pub transitions: Vec<TransitionRecord>,

    /// Designated start state, if one was set
    pub current_state: Option<String>,
}

impl Snapshot {
    /// Take a snapshot of `model`.
    pub fn capture(model: &Automaton) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            states: model
                .states()
                .iter()
                .map(|s| StateRecord {
                    name: s.name.clone(),
                    x: s.position.x,
                    y: s.position.y,
                })
                .collect(),
            transitions: model
                .transitions()
                .iter()
                .map(|t| TransitionRecord {
                    source: t.source.clone(),
                    target: t.target.clone(),
                    input: t.input.clone(),
                    output: t.output.clone(),
                })
                .collect(),
            current_state: model.current_state().map(str::to_string),
        }
    }

    /// Reconstruct a machine from this snapshot.
    ///
    /// Restoration replays the same validation as live editing: duplicate
    /// state names, transitions referencing unknown states, and an unknown
    /// start state are silently dropped rather than treated as fatal. Only
    /// an unsupported format version is an error here.
    pub fn restore(&self) -> Result<Automaton, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut model = Automaton::new();
        for state in &self.states {
            model.add_state(state.name.clone(), state.x, state.y);
        }
        for transition in &self.transitions {
            model.add_transition(
                transition.source.clone(),
                transition.target.clone(),
                transition.input.clone(),
                transition.output.clone(),
            );
        }
        if let Some(name) = &self.current_state {
            // An unknown start state in a corrupted snapshot is dropped.
            let _ = model.set_current_state(name);
        }
        Ok(model)
    }

    /// Encode as human-readable JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}
