//! Dashboard counters.
//!
//! Global counts come straight from the order snapshot. Agent and department counts
//! are replayed from the assignment ledger, so repeated or duplicated events can never
//! inflate them: an agent's total is the number of distinct orders ever assigned to
//! them, and the completed count is the number of those orders that reached
//! `completed` while assigned to them.

use crate::model::{Department, EventKind, LedgerEvent, Order, OrderId};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub pending_orders: usize,
}

pub fn compute_stats(orders: &[Order]) -> DashboardStats {
    let total_orders = orders.len();
    let completed_orders = orders.iter().filter(|o| o.is_completed()).count();
    DashboardStats {
        total_orders,
        completed_orders,
        pending_orders: total_orders - completed_orders,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub name: String,
    pub total_orders: usize,
    pub completed_orders: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub name: String,
    pub total_orders: usize,
    pub completed_orders: usize,
    pub agents: Vec<AgentStats>,
}

#[derive(Default)]
struct Tally {
    assigned: BTreeSet<OrderId>,
    completed: BTreeSet<OrderId>,
}

/// Replays the ledger into per-agent counters, keyed by agent name.
///
/// A completion only counts for an order that was also assigned to the agent.
pub fn agent_stats<'a>(
    events: impl IntoIterator<Item = &'a LedgerEvent>,
) -> BTreeMap<String, AgentStats> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for event in events {
        let tally = tallies.entry(event.agent_name.as_str()).or_default();
        match event.kind {
            EventKind::Assigned => tally.assigned.insert(event.order_id),
            EventKind::Completed => tally.completed.insert(event.order_id),
        };
    }

    tallies
        .into_iter()
        .map(|(name, tally)| {
            let stats = AgentStats {
                name: name.to_string(),
                total_orders: tally.assigned.len(),
                completed_orders: tally.completed.intersection(&tally.assigned).count(),
            };
            (name.to_string(), stats)
        })
        .collect()
}

/// Rolls agent counters up per department, following each department's roster.
///
/// Agents with no ledger history appear with zero counts.
pub fn department_stats(
    departments: &[Department],
    events: &[LedgerEvent],
) -> Vec<DepartmentStats> {
    let by_agent = agent_stats(events);

    departments
        .iter()
        .map(|department| {
            let agents: Vec<AgentStats> = department
                .agents
                .iter()
                .map(|agent| {
                    by_agent.get(&agent.name).cloned().unwrap_or_else(|| AgentStats {
                        name: agent.name.clone(),
                        ..Default::default()
                    })
                })
                .collect();
            DepartmentStats {
                name: department.name.clone(),
                total_orders: agents.iter().map(|a| a.total_orders).sum(),
                completed_orders: agents.iter().map(|a| a.completed_orders).sum(),
                agents,
            }
        })
        .collect()
}
