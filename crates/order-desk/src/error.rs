//! Desk-wide error type.
//!
//! Each actor has its own error enum; callers working across actors (the runtime,
//! the binary) see them collapsed into the three kinds below.

use crate::category_actor::CategoryError;
use crate::department_actor::DepartmentError;
use crate::export::ExportError;
use crate::ledger_actor::LedgerError;
use crate::order_actor::OrderError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Store,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeskError {
    /// An order, task, agent, department or category is absent.
    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store or one of its channels failed. Never retried.
    #[error("Store error: {0}")]
    Store(String),
}

impl DeskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeskError::NotFound(_) => ErrorKind::NotFound,
            DeskError::Validation(_) => ErrorKind::Validation,
            DeskError::Store(_) => ErrorKind::Store,
        }
    }
}

impl From<OrderError> for DeskError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => DeskError::NotFound(id),
            OrderError::TaskNotFound(id) => DeskError::NotFound(format!("Task {id}")),
            OrderError::CategoryNotFound(name) => DeskError::NotFound(format!("Category {name}")),
            OrderError::AgentNotFound(name) => DeskError::NotFound(format!("Agent {name}")),
            OrderError::Validation(v) => DeskError::Validation(v),
            OrderError::Store(msg) => DeskError::Store(msg),
        }
    }
}

impl From<DepartmentError> for DeskError {
    fn from(e: DepartmentError) -> Self {
        match e {
            DepartmentError::NotFound(name) => DeskError::NotFound(format!("Department {name}")),
            DepartmentError::AgentNotFound { department, agent } => {
                DeskError::NotFound(format!("Agent {agent} in {department}"))
            }
            DepartmentError::Validation(v) => DeskError::Validation(v),
            DepartmentError::Store(msg) => DeskError::Store(msg),
        }
    }
}

impl From<CategoryError> for DeskError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(name) => DeskError::NotFound(format!("Category {name}")),
            CategoryError::TaskNotFound { index, .. } => {
                DeskError::NotFound(format!("Category task {index}"))
            }
            CategoryError::Validation(v) => DeskError::Validation(v),
            CategoryError::Store(msg) => DeskError::Store(msg),
        }
    }
}

impl From<LedgerError> for DeskError {
    fn from(e: LedgerError) -> Self {
        DeskError::Store(e.to_string())
    }
}

impl From<ExportError> for DeskError {
    fn from(e: ExportError) -> Self {
        DeskError::Store(e.to_string())
    }
}
