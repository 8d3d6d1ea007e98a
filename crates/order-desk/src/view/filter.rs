//! Search box, advanced filters and dashboard scope.

use crate::model::{Department, Order, OrderStatus, Priority};
use crate::view::TimeWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Customer,
    Agent,
    Ticket,
}

/// Free-text search over one field. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub field: SearchField,
    pub term: String,
}

impl Search {
    pub fn new(field: SearchField, term: impl Into<String>) -> Self {
        Self {
            field,
            term: term.into(),
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.term.is_empty() {
            return true;
        }
        match self.field {
            SearchField::Customer => contains_ignore_case(&order.details.customer_name, &self.term),
            SearchField::Agent => order
                .assignee()
                .is_some_and(|agent| contains_ignore_case(agent, &self.term)),
            SearchField::Ticket => order.details.ticket_number.contains(&self.term),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Independent visibility flags, one per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFilter {
    pub unassigned: bool,
    pub in_progress: bool,
    pub completed: bool,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self {
            unassigned: true,
            in_progress: true,
            completed: true,
        }
    }
}

impl StatusFilter {
    pub fn allows(&self, status: OrderStatus) -> bool {
        match status {
            OrderStatus::Unassigned => self.unassigned,
            OrderStatus::InProgress => self.in_progress,
            OrderStatus::Completed => self.completed,
        }
    }
}

/// Advanced filters, all of which must pass.
///
/// The defaults let every order through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    /// Case-insensitive substring of the customer name; empty disables.
    pub customer_name: String,
    /// Exact assignee name.
    pub assigned_to: Option<String>,
    /// Only orders created at most this long before now.
    pub created_within: Option<TimeWindow>,
    /// Only orders closed at most this long after they were created. Orders that
    /// never completed are not affected.
    pub closed_after: Option<TimeWindow>,
    pub status: StatusFilter,
    pub priority: BTreeSet<Priority>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            assigned_to: None,
            created_within: None,
            closed_after: None,
            status: StatusFilter::default(),
            priority: Priority::ALL.into_iter().collect(),
        }
    }
}

impl Filters {
    pub fn matches(&self, order: &Order, now: DateTime<Utc>) -> bool {
        if !self.customer_name.is_empty()
            && !contains_ignore_case(&order.details.customer_name, &self.customer_name)
        {
            return false;
        }

        if let Some(agent) = &self.assigned_to {
            if order.assignee() != Some(agent.as_str()) {
                return false;
            }
        }

        if let Some(window) = self.created_within {
            if now - order.created_at > window.duration() {
                return false;
            }
        }

        if let (Some(window), Some(completed_at)) = (self.closed_after, order.completed_at) {
            if completed_at - order.created_at > window.duration() {
                return false;
            }
        }

        self.status.allows(order.status) && self.priority.contains(&order.priority)
    }
}

/// Which slice of the desk the dashboard is looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DashboardScope {
    #[default]
    All,
    /// Orders assigned to one agent.
    Agent(String),
    /// Orders assigned to any agent of a department.
    Department {
        name: String,
        agents: BTreeSet<String>,
    },
}

impl DashboardScope {
    pub fn department(department: &Department) -> Self {
        DashboardScope::Department {
            name: department.name.clone(),
            agents: department.agents.iter().map(|a| a.name.clone()).collect(),
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            DashboardScope::All => true,
            DashboardScope::Agent(name) => order.assignee() == Some(name.as_str()),
            DashboardScope::Department { agents, .. } => {
                order.assignee().is_some_and(|a| agents.contains(a))
            }
        }
    }
}
