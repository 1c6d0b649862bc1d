//! Error types for Jinshi
//!
//! This module defines the error taxonomy for the chat dispatch path.
//! Errors stay typed inside the crate; only the dispatcher's string channel
//! (`ChatDispatcher::send`) renders them for callers.

use thiserror::Error;

/// Errors that can occur while dispatching a chat message
///
/// The `Display` strings of `ApiKeyMissing` and `UpstreamStatus` are a
/// compatibility surface: existing callers match on the rendered text.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The resolved model has no credential configured
    #[error("API key not configured for model: {0}")]
    ApiKeyMissing(String),

    /// The upstream provider returned a non-success HTTP status
    #[error("HTTP error! status: {0}")]
    UpstreamStatus(u16),

    /// Transport-level failure (connect, timeout, body decode)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// History store failure (opaque collaborator)
    #[error("History store error: {0}")]
    History(#[from] anyhow::Error),
}

/// Result type alias for convenience
pub type ChatResult<T> = Result<T, ChatError>;
