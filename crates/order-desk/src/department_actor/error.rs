//! Error types for the Department actor.

use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DepartmentError {
    #[error("Department not found: {0}")]
    NotFound(String),

    #[error("Agent {agent} not found in department {department}")]
    AgentNotFound { department: String, agent: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Department store error: {0}")]
    Store(String),
}
