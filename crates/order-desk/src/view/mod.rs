//! # Dashboard View
//!
//! Pure functions turning an order snapshot into what the dashboard shows: search,
//! filters and scope narrow the list, a sort orders it, and [`board::group`] splits it
//! into columns.
//!
//! ```rust,ignore
//! let visible = view::apply(&orders, &search, &filters, Sort::default(), clock.now());
//! let board = view::board::group(&visible, false);
//! ```

pub mod board;
pub mod filter;
pub mod sort;
pub mod window;

pub use board::{group, Board, Column};
pub use filter::{DashboardScope, Filters, Search, SearchField, StatusFilter};
pub use sort::{Sort, SortDirection, SortField};
pub use window::{TimeWindow, WindowUnit};

use crate::model::Order;
use chrono::{DateTime, Utc};

/// Filters then sorts a snapshot. The input is left untouched.
pub fn apply(
    orders: &[Order],
    search: &Search,
    filters: &Filters,
    sort: Sort,
    now: DateTime<Utc>,
) -> Vec<Order> {
    let mut visible: Vec<Order> = orders
        .iter()
        .filter(|o| search.matches(o) && filters.matches(o, now))
        .cloned()
        .collect();
    sort.apply(&mut visible);
    visible
}

/// Everything the dashboard remembers between refreshes.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub scope: DashboardScope,
    pub search: Search,
    pub filters: Filters,
    pub sort: Sort,
    pub show_completed: bool,
}

impl DashboardView {
    /// Scope, search and filters applied, then sorted.
    pub fn orders(&self, orders: &[Order], now: DateTime<Utc>) -> Vec<Order> {
        let scoped: Vec<Order> = orders
            .iter()
            .filter(|o| self.scope.matches(o))
            .cloned()
            .collect();
        apply(&scoped, &self.search, &self.filters, self.sort, now)
    }

    pub fn board(&self, orders: &[Order], now: DateTime<Utc>) -> Board {
        group(&self.orders(orders, now), self.show_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{numbered, Agent, Department, OrderDetails, OrderId, OrderStatus, Priority};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn order(id: u32, customer: &str, ticket: &str) -> Order {
        Order::new(
            OrderId(id),
            "SIP Trunk",
            Priority::Medium,
            OrderDetails {
                customer_name: customer.into(),
                ticket_number: ticket.into(),
                ..Default::default()
            },
            numbered(["a"]),
            now() - Duration::hours(1),
        )
    }

    fn with_status(mut o: Order, status: OrderStatus) -> Order {
        o.status = status;
        if status == OrderStatus::Completed {
            o.completed_at = Some(o.created_at + Duration::hours(1));
        }
        o
    }

    fn tickets(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.details.ticket_number.as_str()).collect()
    }

    fn shown(orders: &[Order], search: &Search, filters: &Filters, sort: Sort) -> Vec<String> {
        apply(orders, search, filters, sort, now())
            .into_iter()
            .map(|o| o.details.ticket_number)
            .collect()
    }

    fn everything() -> (Search, Filters) {
        (Search::default(), Filters::default())
    }

    #[test]
    fn ticket_sort_both_directions() {
        let orders = vec![
            order(1, "A", "00005"),
            order(2, "B", "00002"),
            order(3, "C", "00010"),
        ];
        let (search, filters) = everything();

        let asc = apply(&orders, &search, &filters, Sort::default(), now());
        assert_eq!(tickets(&asc), ["00002", "00005", "00010"]);

        let desc = Sort::new(SortField::Ticket, SortDirection::Desc);
        let desc = apply(&orders, &search, &filters, desc, now());
        assert_eq!(tickets(&desc), ["00010", "00005", "00002"]);
    }

    #[test]
    fn hiding_completed_drops_every_completed_order() {
        let orders = vec![
            with_status(order(1, "Acme", "00001"), OrderStatus::Completed),
            with_status(order(2, "Acme", "00002"), OrderStatus::InProgress),
            with_status(order(3, "Bolt", "00003"), OrderStatus::Completed),
            order(4, "Bolt", "00004"),
        ];
        let search = Search::new(SearchField::Customer, "");
        let mut filters = Filters::default();
        filters.status.completed = false;

        let visible = apply(&orders, &search, &filters, Sort::default(), now());
        assert!(visible.iter().all(|o| o.status != OrderStatus::Completed));
        assert_eq!(tickets(&visible), ["00002", "00004"]);

        // Independent flags: hiding unassigned as well leaves just in-progress.
        filters.status.unassigned = false;
        let visible = apply(&orders, &search, &filters, Sort::default(), now());
        assert_eq!(tickets(&visible), ["00002"]);
    }

    #[test]
    fn search_modes() {
        let mut assigned = order(1, "Acme Corp", "12345");
        assigned.assigned_to = Some("Dana Scully".into());
        let orders = vec![assigned, order(2, "Bolt", "54321")];
        let filters = Filters::default();

        let by_customer = Search::new(SearchField::Customer, "acme");
        assert_eq!(shown(&orders, &by_customer, &filters, Sort::default()), ["12345"]);

        // Unassigned orders never match a non-empty agent term.
        let by_agent = Search::new(SearchField::Agent, "SCULLY");
        assert_eq!(shown(&orders, &by_agent, &filters, Sort::default()), ["12345"]);

        let by_ticket = Search::new(SearchField::Ticket, "432");
        assert_eq!(shown(&orders, &by_ticket, &filters, Sort::default()), ["54321"]);
    }

    #[test]
    fn created_within_and_closed_after_windows() {
        let mut old = order(1, "Acme", "00001");
        old.created_at = now() - Duration::days(10);
        let fresh = order(2, "Acme", "00002");

        let mut slow = with_status(order(3, "Acme", "00003"), OrderStatus::Completed);
        slow.created_at = now() - Duration::days(3);
        slow.completed_at = Some(now() - Duration::hours(2));

        let orders = vec![old, fresh, slow];
        let search = Search::default();

        let mut filters = Filters {
            created_within: Some(TimeWindow::days(7)),
            ..Default::default()
        };
        assert_eq!(shown(&orders, &search, &filters, Sort::default()), ["00002", "00003"]);

        // Closed-after only judges orders that have a completion time.
        filters.created_within = None;
        filters.closed_after = Some(TimeWindow::hours(24));
        assert_eq!(shown(&orders, &search, &filters, Sort::default()), ["00001", "00002"]);
    }

    #[test]
    fn oversized_windows_let_everything_through() {
        let mut old = order(1, "Acme", "00001");
        old.created_at = now() - Duration::days(3650);
        let orders = vec![old, order(2, "Acme", "00002")];

        let filters = Filters {
            created_within: Some(TimeWindow::months(4_000_000_001)),
            closed_after: Some(TimeWindow::days(u32::MAX)),
            ..Default::default()
        };
        assert_eq!(
            shown(&orders, &Search::default(), &filters, Sort::default()),
            ["00001", "00002"]
        );
    }

    #[test]
    fn priority_and_assignee_filters() {
        let mut high = order(1, "Acme", "00001");
        high.priority = Priority::High;
        high.assigned_to = Some("Dana".into());
        let mut low = order(2, "Acme", "00002");
        low.priority = Priority::Low;
        low.assigned_to = Some("Danae".into());
        let orders = vec![high, low];

        let filters = Filters {
            priority: [Priority::High].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(shown(&orders, &Search::default(), &filters, Sort::default()), ["00001"]);

        let filters = Filters {
            assigned_to: Some("Danae".into()),
            ..Default::default()
        };
        assert_eq!(shown(&orders, &Search::default(), &filters, Sort::default()), ["00002"]);
    }

    #[test]
    fn date_and_time_sorts_put_recent_first() {
        let mut morning = order(1, "A", "00001");
        morning.created_at = Utc.with_ymd_and_hms(2024, 5, 30, 8, 0, 0).unwrap();
        let mut evening = order(2, "B", "00002");
        evening.created_at = Utc.with_ymd_and_hms(2024, 5, 20, 18, 0, 0).unwrap();
        let mut noon = order(3, "C", "00003");
        noon.created_at = Utc.with_ymd_and_hms(2024, 5, 25, 12, 0, 0).unwrap();
        let orders = vec![morning, evening, noon];
        let (search, filters) = everything();

        let by_date = Sort::new(SortField::Date, SortDirection::Asc);
        assert_eq!(shown(&orders, &search, &filters, by_date), ["00001", "00003", "00002"]);

        let by_time = Sort::new(SortField::Time, SortDirection::Asc);
        assert_eq!(shown(&orders, &search, &filters, by_time), ["00002", "00003", "00001"]);

        let by_time_desc = Sort::new(SortField::Time, SortDirection::Desc);
        assert_eq!(shown(&orders, &search, &filters, by_time_desc), ["00001", "00003", "00002"]);
    }

    #[test]
    fn agent_sort_is_stable_and_puts_unassigned_first() {
        let mut first = order(1, "A", "00003");
        first.assigned_to = Some("Bea".into());
        let second = order(2, "B", "00001");
        let mut third = order(3, "C", "00002");
        third.assigned_to = Some("Bea".into());
        let orders = vec![first, second, third];
        let (search, filters) = everything();

        let by_agent = Sort::new(SortField::Agent, SortDirection::Asc);
        assert_eq!(shown(&orders, &search, &filters, by_agent), ["00001", "00003", "00002"]);
    }

    #[test]
    fn board_columns_follow_visibility_rules() {
        let orders = vec![
            with_status(order(1, "A", "00001"), OrderStatus::InProgress),
            with_status(order(2, "B", "00002"), OrderStatus::Completed),
        ];

        let hidden = group(&orders, false);
        let statuses: Vec<OrderStatus> = hidden.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, [OrderStatus::InProgress]);
        assert_eq!(hidden.completed_count, 1);

        let shown = group(&orders, true);
        assert!(shown.column(OrderStatus::Unassigned).is_none());
        assert_eq!(shown.column(OrderStatus::Completed).map(|c| c.orders.len()), Some(1));

        let with_unassigned = group(&[order(3, "C", "00003")], false);
        assert_eq!(with_unassigned.columns[0].status, OrderStatus::Unassigned);
        let in_progress = with_unassigned.column(OrderStatus::InProgress);
        assert_eq!(in_progress.map(|c| c.orders.len()), Some(0));
    }

    #[test]
    fn department_scope_limits_to_its_agents() {
        let mut dana = order(1, "A", "00001");
        dana.assigned_to = Some("Dana".into());
        let mut fox = order(2, "B", "00002");
        fox.assigned_to = Some("Fox".into());
        let orders = vec![dana, fox, order(3, "C", "00003")];

        let support = Department {
            name: "Support".into(),
            agents: vec![Agent::new("Dana")],
        };
        let view = DashboardView {
            scope: DashboardScope::department(&support),
            ..Default::default()
        };
        assert_eq!(tickets(&view.orders(&orders, now())), ["00001"]);

        let view = DashboardView {
            scope: DashboardScope::Agent("Fox".into()),
            ..Default::default()
        };
        assert_eq!(tickets(&view.orders(&orders, now())), ["00002"]);
    }
}
