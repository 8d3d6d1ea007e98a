//! Per-agent period reports.

use crate::model::{Department, Order, OrderId, OrderStatus};
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl ReportPeriod {
    /// Start of the period ending at `end`. Month-based periods step back on the
    /// calendar, clamping to the last day of shorter months.
    pub fn start(&self, end: DateTime<Utc>) -> DateTime<Utc> {
        let months = match self {
            ReportPeriod::Weekly => return end - Duration::days(7),
            ReportPeriod::Monthly => 1,
            ReportPeriod::Quarterly => 3,
            ReportPeriod::Annual => 12,
        };
        end.checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReportPeriod::Weekly => "Weekly Report",
            ReportPeriod::Monthly => "Monthly Report",
            ReportPeriod::Quarterly => "Quarterly Report",
            ReportPeriod::Annual => "Annual Report",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentReport {
    pub agent_name: String,
    pub department: Option<String>,
    pub period: ReportPeriod,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Orders currently assigned to the agent and created inside the period.
    pub orders: Vec<OrderId>,
    pub open_orders: usize,
    pub completed_orders: usize,
    /// Not completed and created more than the due period before `end`.
    pub past_due_orders: usize,
}

pub fn agent_report(
    agent_name: &str,
    period: ReportPeriod,
    orders: &[Order],
    departments: &[Department],
    past_due_days: u32,
    now: DateTime<Utc>,
) -> AgentReport {
    let start = period.start(now);
    let due = Duration::days(i64::from(past_due_days));

    let in_period: Vec<&Order> = orders
        .iter()
        .filter(|o| o.assignee() == Some(agent_name))
        .filter(|o| o.created_at >= start && o.created_at <= now)
        .collect();

    let count = |status: OrderStatus| in_period.iter().filter(|o| o.status == status).count();

    AgentReport {
        agent_name: agent_name.to_string(),
        department: departments
            .iter()
            .find(|d| d.has_agent(agent_name))
            .map(|d| d.name.clone()),
        period,
        start,
        end: now,
        orders: in_period.iter().map(|o| o.id).collect(),
        open_orders: count(OrderStatus::InProgress),
        completed_orders: count(OrderStatus::Completed),
        past_due_orders: in_period
            .iter()
            .filter(|o| !o.is_completed() && now > o.created_at + due)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{numbered, Agent, OrderDetails, Priority};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
    }

    fn order(id: u32, agent: &str, age_days: i64, status: OrderStatus) -> Order {
        let mut order = Order::new(
            OrderId(id),
            "SIP Trunk",
            Priority::Medium,
            OrderDetails::default(),
            numbered(["a"]),
            now() - Duration::days(age_days),
        );
        order.assigned_to = Some(agent.into());
        order.status = status;
        order
    }

    #[test]
    fn month_periods_follow_the_calendar() {
        assert_eq!(
            ReportPeriod::Monthly.start(now()),
            Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
        );
        assert_eq!(
            ReportPeriod::Annual.start(now()),
            Utc.with_ymd_and_hms(2023, 3, 31, 12, 0, 0).unwrap()
        );
        assert_eq!(ReportPeriod::Weekly.start(now()), now() - Duration::days(7));
    }

    #[test]
    fn weekly_report_counts() {
        let orders = vec![
            order(1, "Dana", 1, OrderStatus::InProgress),
            order(2, "Dana", 6, OrderStatus::Completed),
            order(3, "Dana", 30, OrderStatus::InProgress),
            order(4, "Fox", 1, OrderStatus::InProgress),
        ];
        let departments = vec![Department {
            name: "Support".into(),
            agents: vec![Agent::new("Dana")],
        }];

        let report = agent_report("Dana", ReportPeriod::Weekly, &orders, &departments, 7, now());
        assert_eq!(report.orders, [OrderId(1), OrderId(2)]);
        assert_eq!(report.open_orders, 1);
        assert_eq!(report.completed_orders, 1);
        assert_eq!(report.past_due_orders, 0);
        assert_eq!(report.department.as_deref(), Some("Support"));
    }

    #[test]
    fn past_due_uses_the_configured_period() {
        let orders = vec![
            order(1, "Dana", 20, OrderStatus::InProgress),
            order(2, "Dana", 20, OrderStatus::Completed),
            order(3, "Dana", 2, OrderStatus::InProgress),
        ];
        let report = agent_report("Dana", ReportPeriod::Monthly, &orders, &[], 7, now());
        assert_eq!(report.past_due_orders, 1);

        let lenient = agent_report("Dana", ReportPeriod::Monthly, &orders, &[], 30, now());
        assert_eq!(lenient.past_due_orders, 0);
        assert!(lenient.department.is_none());
    }
}
