//! # Notes System Errors
//!
//! Error taxonomy for the notes backend, built on `thiserror`.
//!
//! Two domains exist: the note store (`NoteError`) and the external
//! summarization provider (`ProviderError`). Provider failures are always
//! recovered locally and never surface to the end user as errors.

use thiserror::Error;

/// Note store errors
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note not found: {id}")]
    NotFound { id: String }
}

/// External summarization provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Missing API credential: {variable}")]
    MissingCredential { variable: String },

    #[error("Provider request failed: {reason}")]
    Http { reason: String },

    #[error("Provider returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Provider timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Provider returned an empty response")]
    EmptyResponse
}
