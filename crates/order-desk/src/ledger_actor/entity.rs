//! [`ActorEntity`] implementation for [`LedgerEvent`].

use super::{LedgerAction, LedgerError};
use crate::model::{LedgerAppend, LedgerEvent};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for LedgerEvent {
    type Id = u32;
    type Create = LedgerAppend;
    type Update = ();
    type Action = LedgerAction;
    type ActionResult = ();
    type Context = ();
    type Error = LedgerError;

    /// Events are keyed by arrival order.
    fn assign_id(seq: u32, _params: &LedgerAppend) -> u32 {
        seq
    }

    fn from_create_params(seq: u32, params: LedgerAppend, _ctx: &()) -> Result<Self, LedgerError> {
        Ok(Self {
            seq,
            order_id: params.order_id,
            agent_name: params.agent_name,
            kind: params.kind,
            at: params.at,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), LedgerError> {
        Err(LedgerError::AppendOnly)
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), LedgerError> {
        Err(LedgerError::AppendOnly)
    }

    async fn handle_action(&mut self, action: LedgerAction, _ctx: &()) -> Result<(), LedgerError> {
        match action {}
    }
}
