//! Error types for the `event-log` crate.

use std::path::PathBuf;

use disaster_events::EventError;

/// Errors that can occur while recording, persisting, or loading events.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The destination could not be read or written.
    #[error("I/O error on event log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log could not be rendered as JSON.
    #[error("failed to serialize event log: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Input could not be read as an event record.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// A record parsed but violates an event invariant.
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] EventError),
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}
