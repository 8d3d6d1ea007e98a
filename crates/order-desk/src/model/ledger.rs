//! Append-only history of assignments and completions.

use crate::model::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The order was handed to the agent.
    Assigned,
    /// The order reached `completed` while assigned to the agent.
    Completed,
}

/// One recorded event. `seq` is the ledger key and grows with every append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEvent {
    pub seq: u32,
    pub order_id: OrderId,
    pub agent_name: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

/// Payload for appending an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerAppend {
    pub order_id: OrderId,
    pub agent_name: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

impl LedgerAppend {
    pub fn assigned(order_id: OrderId, agent_name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            agent_name: agent_name.into(),
            kind: EventKind::Assigned,
            at,
        }
    }

    pub fn completed(order_id: OrderId, agent_name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            agent_name: agent_name.into(),
            kind: EventKind::Completed,
            at,
        }
    }
}
