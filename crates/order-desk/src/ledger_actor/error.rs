//! Error types for the Ledger actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Recorded events are never rewritten.
    #[error("Ledger is append-only")]
    AppendOnly,

    #[error("Ledger store error: {0}")]
    Store(String),
}
