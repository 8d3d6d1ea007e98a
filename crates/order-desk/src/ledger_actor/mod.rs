//! # Ledger Actor
//!
//! Holds the assignment history as an append-only sequence of [`LedgerEvent`]s.
//! The order actor appends an `Assigned` event for every assignment and a `Completed`
//! event whenever an assigned order reaches `completed`. Agent counters are replayed
//! from this history (see [`crate::stats`]), never stored.
//!
//! Updates and deletes are refused with [`LedgerError::AppendOnly`].
//!
//! ```rust,ignore
//! let (actor, client) = ledger_actor::new(32);
//! tokio::spawn(actor.run(()));
//! let ledger = LedgerClient::new(client);
//! ledger.record(LedgerAppend::assigned(order_id, "Dana", now)).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::LedgerEvent;
use resource_actor::{ResourceActor, ResourceClient};

/// The ledger has no custom actions.
#[derive(Debug)]
pub enum LedgerAction {}

/// Creates a new Ledger actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<LedgerEvent>, ResourceClient<LedgerEvent>) {
    ResourceActor::new(buffer_size)
}
