//! Board ordering.

use crate::model::Order;
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Assignee name; unassigned orders sort as the empty string.
    Agent,
    /// Creation instant, newest first.
    Date,
    /// Hour of day of creation (UTC), latest hour first.
    Time,
    #[default]
    Ticket,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The comparison for this field before the direction is applied.
    ///
    /// `Date` and `Time` are already reversed here, so `Asc` on them lists the most
    /// recent orders first and `Desc` flips that.
    fn base(&self, a: &Order, b: &Order) -> Ordering {
        match self.field {
            SortField::Agent => a.assignee().unwrap_or("").cmp(b.assignee().unwrap_or("")),
            SortField::Date => b.created_at.cmp(&a.created_at),
            SortField::Time => b.created_at.hour().cmp(&a.created_at.hour()),
            SortField::Ticket => a.details.ticket_number.cmp(&b.details.ticket_number),
        }
    }

    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        let ordering = self.base(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort: orders that compare equal keep their relative position.
    pub fn apply(&self, orders: &mut [Order]) {
        orders.sort_by(|a, b| self.compare(a, b));
    }
}
