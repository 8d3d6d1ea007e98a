//! Error types for the Order actor.

use crate::category_actor::CategoryError;
use crate::department_actor::DepartmentError;
use crate::ledger_actor::LedgerError;
use crate::lifecycle::TaskNotFound;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The agent is not on any department roster.
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A store call failed, here or in a dependency.
    #[error("Order store error: {0}")]
    Store(String),
}

impl From<TaskNotFound> for OrderError {
    fn from(e: TaskNotFound) -> Self {
        OrderError::TaskNotFound(e.0)
    }
}

impl From<CategoryError> for OrderError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(name) => OrderError::CategoryNotFound(name),
            other => OrderError::Store(other.to_string()),
        }
    }
}

impl From<DepartmentError> for OrderError {
    fn from(e: DepartmentError) -> Self {
        OrderError::Store(e.to_string())
    }
}

impl From<LedgerError> for OrderError {
    fn from(e: LedgerError) -> Self {
        OrderError::Store(e.to_string())
    }
}
