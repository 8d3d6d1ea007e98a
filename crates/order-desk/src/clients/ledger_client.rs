//! # Ledger Client
//!
//! Appends to and reads the assignment history.
use crate::ledger_actor::LedgerError;
use crate::model::{LedgerAppend, LedgerEvent, OrderId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use std::cmp::Reverse;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct LedgerClient {
    inner: ResourceClient<LedgerEvent>,
}

impl LedgerClient {
    pub fn new(inner: ResourceClient<LedgerEvent>) -> Self {
        Self { inner }
    }

    /// Appends an event and returns its sequence number.
    #[instrument(skip(self))]
    pub async fn record(&self, event: LedgerAppend) -> Result<u32, LedgerError> {
        debug!("Sending request");
        self.inner.create(event).await.map_err(Self::map_error)
    }

    /// Every event recorded for one order, newest first.
    #[instrument(skip(self))]
    pub async fn history(&self, order_id: OrderId) -> Result<Vec<LedgerEvent>, LedgerError> {
        let mut events: Vec<LedgerEvent> = self
            .list()
            .await?
            .into_iter()
            .filter(|e| e.order_id == order_id)
            .collect();
        events.sort_by_key(|e| Reverse((e.at, e.seq)));
        Ok(events)
    }
}

#[async_trait]
impl ActorClient<LedgerEvent> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &ResourceClient<LedgerEvent> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error()
            .unwrap_or_else(|e| LedgerError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventKind;
    use chrono::{TimeZone, Utc};
    use resource_actor::mock::MockClient;

    fn event(seq: u32, order: u32, hour: u32) -> LedgerEvent {
        LedgerEvent {
            seq,
            order_id: OrderId(order),
            agent_name: "Dana".into(),
            kind: EventKind::Assigned,
            at: Utc.with_ymd_and_hms(2024, 2, 1, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn history_is_per_order_and_newest_first() {
        let mut mock = MockClient::<LedgerEvent>::new();
        mock.expect_list().return_ok(vec![
            event(1, 1, 9),
            event(2, 2, 10),
            event(3, 1, 11),
            event(4, 1, 11),
        ]);

        let ledger = LedgerClient::new(mock.client());
        let seqs: Vec<u32> = ledger
            .history(OrderId(1))
            .await
            .unwrap()
            .iter()
            .map(|e| e.seq)
            .collect();
        assert_eq!(seqs, [4, 3, 1]);
        mock.verify();
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<LedgerEvent>::new();
        mock.expect_delete(1)
            .return_err(FrameworkError::EntityError(Box::new(LedgerError::AppendOnly)));

        let ledger = LedgerClient::new(mock.client());
        assert_eq!(ledger.delete(1).await, Err(LedgerError::AppendOnly));
        mock.verify();
    }
}
