//! Custom actions for the Order actor.
//!
//! Both actions run the pure rules in [`crate::lifecycle`] and then append to the
//! assignment ledger, so they are actions rather than plain updates.

use crate::lifecycle::Transition;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Hands the order to an agent and records an `Assigned` event.
    Assign(String),
    /// Marks a task complete or incomplete. Records a `Completed` event when this
    /// completes an assigned order.
    ToggleTask { task_id: String, completed: bool },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    Assign(Transition),
    ToggleTask(Transition),
}
