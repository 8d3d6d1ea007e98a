//! Grouping filtered orders into the three board columns.

use crate::model::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: OrderStatus,
    pub orders: Vec<Order>,
}

/// The columns to render, left to right.
///
/// `unassigned` appears only when it has orders, `in-progress` always appears and
/// `completed` only when the show-completed toggle is on. `completed_count` is
/// reported either way so the toggle can show how many orders it hides.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub columns: Vec<Column>,
    pub completed_count: usize,
}

impl Board {
    pub fn column(&self, status: OrderStatus) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }
}

/// Splits an already filtered and sorted list into board columns, preserving order.
pub fn group(orders: &[Order], show_completed: bool) -> Board {
    let pick = |status: OrderStatus| -> Vec<Order> {
        orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    };

    let unassigned = pick(OrderStatus::Unassigned);
    let in_progress = pick(OrderStatus::InProgress);
    let completed = pick(OrderStatus::Completed);
    let completed_count = completed.len();

    let mut columns = Vec::with_capacity(3);
    if !unassigned.is_empty() {
        columns.push(Column {
            status: OrderStatus::Unassigned,
            orders: unassigned,
        });
    }
    columns.push(Column {
        status: OrderStatus::InProgress,
        orders: in_progress,
    });
    if show_completed {
        columns.push(Column {
            status: OrderStatus::Completed,
            orders: completed,
        });
    }

    Board {
        columns,
        completed_count,
    }
}
