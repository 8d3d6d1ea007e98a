//! Customer service orders.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Detail updates ([`OrderUpdate`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::model::TaskItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order-{}", self.0)
    }
}

/// Where an order sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Unassigned,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Unassigned => "unassigned",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Completed => "completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer-facing fields, validated on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub customer_name: String,
    pub ticket_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    /// Name of the category the order was created from.
    #[serde(rename = "type")]
    pub category: String,
    pub status: OrderStatus,
    pub priority: Priority,
    pub details: OrderDetails,
    pub tasks: Vec<TaskItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Creates a new, unassigned Order with the given checklist.
    ///
    /// The title is derived as `"<category> - <customer name>"`.
    pub fn new(
        id: OrderId,
        category: impl Into<String>,
        priority: Priority,
        details: OrderDetails,
        tasks: Vec<TaskItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let category = category.into();
        Self {
            id,
            title: format!("{} - {}", category, details.customer_name),
            category,
            status: OrderStatus::Unassigned,
            priority,
            details,
            tasks,
            assigned_to: None,
            created_at,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    pub fn assignee(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }
}

/// Payload for creating a new order.
///
/// The final checklist is the category's default tasks followed by the non-blank
/// entries of `custom_tasks`.
#[derive(Debug, Clone, Default)]
pub struct OrderCreate {
    pub category: String,
    pub details: OrderDetails,
    pub priority: Priority,
    pub custom_tasks: Vec<String>,
    /// Agent to assign right away; recorded like a regular assignment.
    pub assign_to: Option<String>,
}

/// Editable details of an existing order.
///
/// `None` leaves a field alone. For the optional text fields an empty string clears
/// the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub priority: Option<Priority>,
    pub invoice_number: Option<String>,
    pub note: Option<String>,
}
