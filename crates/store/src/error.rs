//! Store-boundary error types.
//!
//! Read problems never surface here: missing or malformed values are
//! recovered as empty collections at load time. Only write failures
//! propagate, because silently dropping one would leave the in-memory
//! state diverged from what was persisted.

use tangerine_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to persist key '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to remove key '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// Repository-level error: domain failures plus persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
