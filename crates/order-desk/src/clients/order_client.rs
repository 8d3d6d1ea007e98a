//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Validation, checklist assembly and ledger writes happen inside the actor's hooks;
//! this client only shapes requests and replies.
use crate::lifecycle::Transition;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order created");
        Ok(id)
    }

    /// Like `get`, but a missing order is an error.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Edits priority, invoice number or note.
    #[instrument(skip(self))]
    pub async fn update_details(
        &self,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn assign(&self, id: OrderId, agent: &str) -> Result<Transition, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::Assign(agent.to_string()))
            .await
        {
            Ok(OrderActionResult::Assign(transition)) => Ok(transition),
            Ok(other) => Err(OrderError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn toggle_task(
        &self,
        id: OrderId,
        task_id: &str,
        completed: bool,
    ) -> Result<Transition, OrderError> {
        let action = OrderAction::ToggleTask {
            task_id: task_id.to_string(),
            completed,
        };
        match self.inner.perform_action(id, action).await {
            Ok(OrderActionResult::ToggleTask(transition)) => Ok(transition),
            Ok(other) => Err(OrderError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error()
                .unwrap_or_else(|e| OrderError::Store(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, Priority};
    use crate::validation::ValidationError;
    use resource_actor::mock::{create_mock_client, expect_action, expect_update, MockClient};

    #[tokio::test]
    async fn toggle_task_sends_the_task_and_flag() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task =
            tokio::spawn(async move { orders.toggle_task(OrderId(3), "task-1", true).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(3));
        match action {
            OrderAction::ToggleTask { task_id, completed } => {
                assert_eq!(task_id, "task-1");
                assert!(completed);
            }
            other => panic!("Expected ToggleTask, got {other:?}"),
        }

        let transition = Transition {
            from: OrderStatus::InProgress,
            to: OrderStatus::Completed,
        };
        responder
            .send(Ok(OrderActionResult::ToggleTask(transition)))
            .unwrap();
        assert_eq!(task.await.unwrap(), Ok(transition));
    }

    #[tokio::test]
    async fn missing_orders_map_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(9)).return_ok(None);
        mock.expect_action(OrderId(9))
            .return_err(FrameworkError::NotFound("order-9".into()));

        let orders = OrderClient::new(mock.client());
        assert_eq!(
            orders.order(OrderId(9)).await,
            Err(OrderError::NotFound("order-9".into()))
        );
        assert_eq!(
            orders.assign(OrderId(9), "Dana").await,
            Err(OrderError::NotFound("order-9".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn update_details_sends_the_edit_and_maps_validation() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move {
            let update = OrderUpdate {
                priority: Some(Priority::High),
                invoice_number: Some("12".into()),
                note: None,
            };
            orders.update_details(OrderId(4), update).await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, OrderId(4));
        assert_eq!(update.priority, Some(Priority::High));
        assert_eq!(update.invoice_number.as_deref(), Some("12"));
        assert!(update.note.is_none());

        let rejected = OrderError::Validation(ValidationError::InvalidInvoiceNumber("12".into()));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(rejected.clone()))))
            .unwrap();
        assert_eq!(task.await.unwrap(), Err(rejected));
    }

    #[tokio::test]
    async fn update_of_a_missing_order_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId(8))
            .return_err(FrameworkError::NotFound("order-8".into()));

        let orders = OrderClient::new(mock.client());
        assert_eq!(
            orders.update_details(OrderId(8), OrderUpdate::default()).await,
            Err(OrderError::NotFound("order-8".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn closed_actor_is_a_store_error() {
        let (client, receiver) = create_mock_client::<Order>(1);
        drop(receiver);

        let orders = OrderClient::new(client);
        assert!(matches!(orders.list().await, Err(OrderError::Store(_))));
    }
}
