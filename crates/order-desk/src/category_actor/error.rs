//! Error types for the Category actor.

use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category has no task at index {index} (has {len})")]
    TaskNotFound { index: usize, len: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Category store error: {0}")]
    Store(String),
}
