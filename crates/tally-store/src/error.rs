//! # Store Error Types

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The id is already associated with a value.
    ///
    /// ## When This Occurs
    /// - The id generator produced a duplicate
    /// - A caller reused an id instead of generating a fresh one
    #[error("Receipt id already exists: {0}")]
    AlreadyExists(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
