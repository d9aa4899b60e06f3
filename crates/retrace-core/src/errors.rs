use thiserror::Error;

/// Result type alias using RetraceError
pub type Result<T> = std::result::Result<T, RetraceError>;

/// Error taxonomy for Retrace operations.
///
/// The diff engine itself is infallible by construction; errors arise only
/// at the edges (history indexing, serialization, file I/O). Each variant
/// maps to a stable error code for programmatic handling and testing.
#[derive(Debug, Error)]
pub enum RetraceError {
    /// Requested version index does not exist in the history
    #[error("Version not found: index {index} (history length {len})")]
    VersionNotFound { index: usize, len: usize },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O error
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl RetraceError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RetraceError::VersionNotFound { .. } => "ERR_VERSION_NOT_FOUND",
            RetraceError::Serialization { .. } => "ERR_SERIALIZATION",
            RetraceError::Io { .. } => "ERR_IO",
        }
    }
}

impl From<serde_json::Error> for RetraceError {
    fn from(err: serde_json::Error) -> Self {
        RetraceError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RetraceError {
    fn from(err: std::io::Error) -> Self {
        RetraceError::Io {
            message: err.to_string(),
        }
    }
}
