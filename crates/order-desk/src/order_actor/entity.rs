//! [`ActorEntity`] implementation for [`Order`].

use super::{OrderAction, OrderActionResult, OrderContext, OrderError};
use crate::lifecycle::{self, Transition};
use crate::model::{numbered, LedgerAppend, Order, OrderCreate, OrderId, OrderUpdate, TaskItem};
use crate::validation;
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::{debug, info};

impl Order {
    /// Checks the agent is on a roster and records the assignment before applying it.
    async fn assign_to(
        &mut self,
        agent: &str,
        ctx: &OrderContext,
    ) -> Result<Transition, OrderError> {
        let Some((_, card)) = ctx.departments.find_agent(agent).await? else {
            return Err(OrderError::AgentNotFound(agent.to_string()));
        };
        // The roster's spelling is what the ledger and the order keep.
        let agent = card.name.as_str();

        let now = ctx.clock.now();
        ctx.ledger
            .record(LedgerAppend::assigned(self.id, agent, now))
            .await?;
        let transition = lifecycle::assign(self, agent, now);

        info!(order_id = %self.id, agent, status = %transition.to, "Assigned");
        Ok(transition)
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn assign_id(seq: u32, _params: &OrderCreate) -> OrderId {
        OrderId(seq)
    }

    /// Validates the details and builds an unassigned order holding only the custom
    /// tasks; `on_create` completes the checklist.
    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &OrderContext,
    ) -> Result<Self, OrderError> {
        validation::order_details(&params.details)?;

        let custom = params
            .custom_tasks
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let mut order = Order::new(
            id,
            params.category,
            params.priority,
            params.details,
            numbered(custom),
            ctx.clock.now(),
        );
        // Carried to on_create, which performs the real assignment.
        order.assigned_to = params.assign_to;
        Ok(order)
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let category = ctx
            .categories
            .find(&self.category)
            .await?
            .ok_or_else(|| OrderError::CategoryNotFound(self.category.clone()))?;

        let custom = std::mem::take(&mut self.tasks)
            .into_iter()
            .map(|t: TaskItem| t.text);
        self.tasks = numbered(category.tasks.into_iter().chain(custom));
        debug!(order_id = %self.id, tasks = self.tasks.len(), "Checklist built");

        if let Some(agent) = self.assigned_to.take() {
            self.assign_to(&agent, ctx).await?;
        }
        Ok(())
    }

    /// Applies a detail edit after validating all of it.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        validation::order_update(&update)?;

        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(invoice) = update.invoice_number {
            self.details.invoice_number = Some(invoice).filter(|s| !s.is_empty());
        }
        if let Some(note) = update.note {
            self.details.note = Some(note).filter(|s| !s.is_empty());
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Assign(agent) => {
                let transition = self.assign_to(&agent, ctx).await?;
                Ok(OrderActionResult::Assign(transition))
            }
            OrderAction::ToggleTask { task_id, completed } => {
                let now = ctx.clock.now();
                // Work on a copy so a failed ledger write leaves the order as it was.
                let mut next = self.clone();
                let transition = lifecycle::toggle_task(&mut next, &task_id, completed, now)?;

                if transition.completed() {
                    if let Some(agent) = next.assignee() {
                        ctx.ledger
                            .record(LedgerAppend::completed(next.id, agent, now))
                            .await?;
                    }
                }

                *self = next;
                info!(
                    order_id = %self.id,
                    task_id = %task_id,
                    completed,
                    status = %transition.to,
                    "Task toggled"
                );
                Ok(OrderActionResult::ToggleTask(transition))
            }
        }
    }
}
