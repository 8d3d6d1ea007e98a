//! # Order Lifecycle
//!
//! Pure rules tying task completion and assignment to an order's status. The order
//! actor calls these from its action handlers; nothing here touches a store or a clock.
//!
//! An order's status is always a function of its checklist and assignee:
//!
//! | Tasks | Assignee | Status |
//! |-------|----------|--------|
//! | non-empty, all complete | any | `completed` |
//! | at least one complete | any | `in-progress` |
//! | none complete | some | `in-progress` |
//! | none complete | none | `unassigned` |
//!
//! `completed_at` on the order is set exactly while the status is `completed`, and
//! keeps the instant the order first got there until it is reopened.

use crate::model::{Order, OrderStatus, TaskItem};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Task not found: {0}")]
pub struct TaskNotFound(pub String);

/// Status before and after a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// True when the operation moved the order into `completed`.
    pub fn completed(&self) -> bool {
        self.changed() && self.to == OrderStatus::Completed
    }

    /// True when the operation moved the order out of `completed`.
    pub fn reopened(&self) -> bool {
        self.changed() && self.from == OrderStatus::Completed
    }
}

pub fn derive_status(tasks: &[TaskItem], assignee: Option<&str>) -> OrderStatus {
    if !tasks.is_empty() && tasks.iter().all(|t| t.completed) {
        OrderStatus::Completed
    } else if tasks.iter().any(|t| t.completed) || assignee.is_some() {
        OrderStatus::InProgress
    } else {
        OrderStatus::Unassigned
    }
}

fn refresh(order: &mut Order, now: DateTime<Utc>) -> Transition {
    let from = order.status;
    order.status = derive_status(&order.tasks, order.assignee());
    match order.status {
        OrderStatus::Completed => {
            order.completed_at.get_or_insert(now);
        }
        _ => order.completed_at = None,
    }
    Transition {
        from,
        to: order.status,
    }
}

/// Marks one task complete or incomplete and recomputes the order status.
///
/// Re-completing an already complete task keeps its original timestamp.
pub fn toggle_task(
    order: &mut Order,
    task_id: &str,
    completed: bool,
    now: DateTime<Utc>,
) -> Result<Transition, TaskNotFound> {
    let task = order
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| TaskNotFound(task_id.to_string()))?;

    if completed {
        task.completed_at.get_or_insert(now);
    } else {
        task.completed_at = None;
    }
    task.completed = completed;

    Ok(refresh(order, now))
}

/// Hands the order to an agent.
///
/// Moves `unassigned` to `in-progress`; `in-progress` and `completed` orders keep
/// their status. Reassigning replaces the previous assignee.
pub fn assign(order: &mut Order, agent_name: &str, now: DateTime<Utc>) -> Transition {
    order.assigned_to = Some(agent_name.to_string());
    refresh(order, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{numbered, OrderDetails, OrderId, Priority};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, hour, 0, 0).unwrap()
    }

    fn order(tasks: &[&str]) -> Order {
        Order::new(
            OrderId(1),
            "SIP Trunk",
            Priority::Medium,
            OrderDetails {
                customer_name: "Acme".into(),
                ticket_number: "00001".into(),
                ..Default::default()
            },
            numbered(tasks.iter().copied()),
            at(8),
        )
    }

    #[test]
    fn status_derivation_table() {
        let mut tasks = numbered(["a", "b"]);
        assert_eq!(derive_status(&tasks, None), OrderStatus::Unassigned);
        assert_eq!(derive_status(&tasks, Some("Dana")), OrderStatus::InProgress);

        tasks[0].completed = true;
        assert_eq!(derive_status(&tasks, None), OrderStatus::InProgress);

        tasks[1].completed = true;
        assert_eq!(derive_status(&tasks, None), OrderStatus::Completed);
        assert_eq!(derive_status(&tasks, Some("Dana")), OrderStatus::Completed);
    }

    #[test]
    fn empty_checklist_never_completes() {
        assert_eq!(derive_status(&[], None), OrderStatus::Unassigned);
        assert_eq!(derive_status(&[], Some("Dana")), OrderStatus::InProgress);
    }

    #[test]
    fn completing_the_last_task_completes_the_order() {
        let mut order = order(&["a", "b"]);
        assign(&mut order, "Dana", at(9));

        let first = toggle_task(&mut order, "task-0", true, at(10)).unwrap();
        assert!(!first.changed());
        assert!(order.completed_at.is_none());

        let last = toggle_task(&mut order, "task-1", true, at(11)).unwrap();
        assert!(last.completed());
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.completed_at, Some(at(11)));
        assert_eq!(order.tasks[1].completed_at, Some(at(11)));
    }

    #[test]
    fn reopening_a_task_returns_to_in_progress() {
        let mut order = order(&["a", "b"]);
        toggle_task(&mut order, "task-0", true, at(9)).unwrap();
        toggle_task(&mut order, "task-1", true, at(10)).unwrap();

        let reopened = toggle_task(&mut order, "task-1", false, at(12)).unwrap();
        assert!(reopened.reopened());
        assert_eq!(order.status, OrderStatus::InProgress);
        assert!(order.completed_at.is_none());
        assert!(order.tasks[1].completed_at.is_none());
        assert_eq!(order.tasks[0].completed_at, Some(at(9)));
    }

    #[test]
    fn completed_at_tracks_completion_for_every_toggle_sequence() {
        let mut order = order(&["a", "b", "c"]);
        let steps = [
            ("task-0", true),
            ("task-1", true),
            ("task-2", true),
            ("task-1", false),
            ("task-1", true),
            ("task-0", false),
        ];
        for (hour, (id, done)) in steps.into_iter().enumerate() {
            toggle_task(&mut order, id, done, at(9 + hour as u32)).unwrap();
            let all_done = order.tasks.iter().all(|t| t.completed);
            assert_eq!(order.status == OrderStatus::Completed, all_done);
            assert_eq!(order.completed_at.is_some(), all_done);
            assert!(order.tasks.iter().all(|t| t.completed == t.completed_at.is_some()));
        }
    }

    #[test]
    fn unknown_task_is_rejected_without_changes() {
        let mut order = order(&["a"]);
        let before = order.clone();
        assert_eq!(
            toggle_task(&mut order, "task-9", true, at(9)),
            Err(TaskNotFound("task-9".into()))
        );
        assert_eq!(order, before);
    }

    #[test]
    fn assigning_moves_unassigned_to_in_progress() {
        let mut order = order(&["a"]);
        let transition = assign(&mut order, "Dana", at(9));
        assert_eq!(
            transition,
            Transition {
                from: OrderStatus::Unassigned,
                to: OrderStatus::InProgress
            }
        );
        assert_eq!(order.assignee(), Some("Dana"));
    }

    #[test]
    fn assigning_a_completed_order_keeps_it_completed() {
        let mut order = order(&["a"]);
        toggle_task(&mut order, "task-0", true, at(9)).unwrap();

        let transition = assign(&mut order, "Dana", at(10));
        assert!(!transition.changed());
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.completed_at, Some(at(9)));
    }
}
