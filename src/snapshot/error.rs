//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur during snapshot operations.
///
/// Entry-level corruption (a transition naming an unknown state, a duplicate
/// state name) is not an error: restore replays the forgiving mutation API
/// and such entries are silently dropped, exactly as live editing would
/// drop them.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
