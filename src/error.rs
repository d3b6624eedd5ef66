//! Recorder-internal error taxonomy.
//!
//! Nothing here ever crosses the public API boundary: the entry points in
//! `recorder.rs` convert every error into a counted no-op, so an
//! instrumented call site can never observe a recorder failure.

use thiserror::Error;

/// Errors that can occur inside the capture-serialize-emit pipeline.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Sink I/O failed (directory creation, open, or append).
    #[error("sink i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Event serialization failed.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
