use crate::clients::{CategoryClient, DepartmentClient, LedgerClient, OrderClient};
use crate::clock::SharedClock;
use crate::config::{ConfigError, DeskConfig, ReportConfig};
use crate::error::DeskError;
use crate::model::{LedgerEvent, OrderId};
use crate::order_actor::OrderContext;
use crate::report::{self, AgentReport, ReportPeriod};
use crate::runtime::OrderFeed;
use crate::stats::{self, DashboardStats, DepartmentStats};
use crate::view::{Board, DashboardView};
use crate::{category_actor, department_actor, export, ledger_actor, order_actor};
use resource_actor::ActorClient;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Runs the four desk actors and answers the dashboard's read-side questions.
///
/// ```rust,ignore
/// let system = DeskSystem::new(&DeskConfig::default(), Arc::new(SystemClock))?;
/// let id = system.orders.create_order(params).await?;
/// system.orders.assign(id, "Dana").await?;
/// println!("{}", system.export_csv().await?);
/// system.shutdown().await?;
/// ```
pub struct DeskSystem {
    pub orders: OrderClient,
    pub departments: DepartmentClient,
    pub categories: CategoryClient,
    pub ledger: LedgerClient,
    pub clock: SharedClock,
    reports: ReportConfig,
    handles: Vec<JoinHandle<()>>,
}

impl DeskSystem {
    /// Spawns every actor, seeding categories and departments from `config`.
    ///
    /// The config is validated first, so a seeded roster obeys the same rules as one
    /// built at run time. Must be called inside a tokio runtime.
    pub fn new(config: &DeskConfig, clock: SharedClock) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let buffer_size = config.store.buffer_size;
        info!(
            buffer_size,
            categories = config.categories.len(),
            departments = config.departments.len(),
            "Starting desk"
        );

        let (category_actor, category_client) =
            category_actor::new(buffer_size, config.categories);
        let categories = CategoryClient::new(category_client);
        let category_handle = tokio::spawn(category_actor.run(()));

        let (department_actor, department_client) =
            department_actor::new(buffer_size, config.departments);
        let departments = DepartmentClient::new(department_client);
        let department_handle = tokio::spawn(department_actor.run(()));

        let (ledger_actor, ledger_client) = ledger_actor::new(buffer_size);
        let ledger = LedgerClient::new(ledger_client);
        let ledger_handle = tokio::spawn(ledger_actor.run(()));

        // The order actor reads the other three; nothing reads the order actor back,
        // so closing the clients shuts everything down.
        let (order_actor, order_client) = order_actor::new(buffer_size);
        let orders = OrderClient::new(order_client);
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            categories: categories.clone(),
            departments: departments.clone(),
            ledger: ledger.clone(),
            clock: clock.clone(),
        }));

        Ok(Self {
            orders,
            departments,
            categories,
            ledger,
            clock,
            reports: config.reports,
            handles: vec![order_handle, category_handle, department_handle, ledger_handle],
        })
    }

    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, DeskError> {
        let orders = self.orders.list().await?;
        Ok(stats::compute_stats(&orders))
    }

    /// Per-department counters replayed from the ledger.
    #[instrument(skip(self))]
    pub async fn department_stats(&self) -> Result<Vec<DepartmentStats>, DeskError> {
        let departments = self.departments.list().await?;
        let events = self.ledger.list().await?;
        Ok(stats::department_stats(&departments, &events))
    }

    /// Report for one rostered agent over `period`, ending now.
    #[instrument(skip(self))]
    pub async fn agent_report(
        &self,
        agent: &str,
        period: ReportPeriod,
    ) -> Result<AgentReport, DeskError> {
        let departments = self.departments.list().await?;
        if !departments.iter().any(|d| d.has_agent(agent)) {
            return Err(DeskError::NotFound(format!("Agent {agent}")));
        }
        let orders = self.orders.list().await?;
        Ok(report::agent_report(
            agent,
            period,
            &orders,
            &departments,
            self.reports.past_due_days,
            self.clock.now(),
        ))
    }

    /// The board for a dashboard view over the current orders.
    #[instrument(skip(self, view))]
    pub async fn board(&self, view: &DashboardView) -> Result<Board, DeskError> {
        let orders = self.orders.list().await?;
        Ok(view.board(&orders, self.clock.now()))
    }

    /// All orders as CSV, in id order.
    #[instrument(skip(self))]
    pub async fn export_csv(&self) -> Result<String, DeskError> {
        let orders = self.orders.list().await?;
        let csv = export::to_csv_string(&orders)?;
        info!(rows = orders.len(), "Orders exported");
        Ok(csv)
    }

    /// Assignment history of one order, newest first.
    #[instrument(skip(self))]
    pub async fn history(&self, order_id: OrderId) -> Result<Vec<LedgerEvent>, DeskError> {
        self.orders.order(order_id).await?;
        Ok(self.ledger.history(order_id).await?)
    }

    /// Starts a live snapshot of the order list. Stop it before [`shutdown`](Self::shutdown).
    pub async fn feed(&self) -> Result<OrderFeed, DeskError> {
        Ok(OrderFeed::start(self.orders.clone()).await?)
    }

    /// Drops every client and waits for the actors to drain.
    pub async fn shutdown(self) -> Result<(), DeskError> {
        info!("Shutting down desk");
        drop(self.orders);
        drop(self.departments);
        drop(self.categories);
        drop(self.ledger);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(DeskError::Store(format!("Actor task failed: {e}")));
            }
        }
        info!("Desk stopped");
        Ok(())
    }
}
