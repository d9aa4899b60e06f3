//! Version snapshots and state digests.
//!
//! A snapshot captures one document state together with identity metadata.
//! The digest is a SHA256 hash of the canonical JSON serialization of the
//! state; identical states produce identical digests regardless of when
//! they were captured, which is what makes recording idempotent.

use chrono::{DateTime, Utc};
use retrace_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// One captured version of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    /// Unique snapshot identity
    pub id: Uuid,
    /// The captured document state
    pub state: Value,
    /// Capture time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Optional operator-supplied description ("before deload tweak")
    pub description: Option<String>,
    /// SHA256 digest of the canonical JSON serialization of `state`
    pub digest: String,
}

impl VersionSnapshot {
    /// Capture a document state as a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RetraceError::Serialization` if the state cannot be
    /// serialized for digest computation.
    pub fn capture(state: Value, description: Option<String>) -> Result<Self> {
        let digest = compute_state_digest(&state)?;
        Ok(Self {
            id: Uuid::new_v4(),
            state,
            timestamp: Utc::now(),
            description,
            digest,
        })
    }
}

/// Compute the SHA256 digest of a document state.
///
/// Same state → same digest (canonical JSON serialization). Hex-encoded,
/// 64 characters.
///
/// # Errors
///
/// Returns `RetraceError::Serialization` if JSON serialization fails.
pub fn compute_state_digest(state: &Value) -> Result<String> {
    let canonical = serde_json::to_string(state)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
