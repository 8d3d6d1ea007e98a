//! # Order Desk demo
//!
//! Starts a desk from an optional TOML config, walks one order from creation to
//! completion, then prints the dashboard counters, the board and the CSV export.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p order-desk -- --config config/desk.toml
//! ```

use clap::Parser;
use order_desk::clock::SystemClock;
use order_desk::config::DeskConfig;
use order_desk::model::{Agent, OrderCreate, OrderDetails, OrderStatus, Priority};
use order_desk::report::ReportPeriod;
use order_desk::runtime::DeskSystem;
use order_desk::view::DashboardView;
use resource_actor::telemetry::setup_tracing;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

/// Department that receives the demo agent when no roster lists it yet.
const DEMO_DEPARTMENT: &str = "Provisioning";

#[derive(Debug, Parser)]
#[command(name = "order-desk", about = "Order tracking dashboard demo")]
struct Args {
    /// TOML file with store, report, category and department settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Agent that receives the demo order.
    #[arg(long, default_value = "Dana")]
    agent: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing("info");
    let args = Args::parse();

    let config = DeskConfig::load_or_default(args.config.as_deref())?;
    let system = DeskSystem::new(&config, Arc::new(SystemClock))?;

    system
        .departments
        .enlist(DEMO_DEPARTMENT, Agent::new(&args.agent))
        .await?;

    let order_id = async {
        let id = system
            .orders
            .create_order(OrderCreate {
                category: "SIP Trunk".into(),
                details: OrderDetails {
                    customer_name: "Acme Telecom".into(),
                    ticket_number: "00042".into(),
                    invoice_number: Some("100200".into()),
                    note: None,
                },
                priority: Priority::High,
                custom_tasks: vec!["Port existing numbers".into()],
                assign_to: None,
            })
            .await?;
        system.orders.assign(id, &args.agent).await?;
        Ok::<_, order_desk::DeskError>(id)
    }
    .instrument(info_span!("order_intake"))
    .await?;

    async {
        let order = system.orders.order(order_id).await?;
        for task in &order.tasks {
            let transition = system.orders.toggle_task(order_id, &task.id, true).await?;
            if transition.completed() {
                info!(order_id = %order_id, "Checklist finished");
            }
        }
        Ok::<_, order_desk::DeskError>(())
    }
    .instrument(info_span!("order_checklist"))
    .await?;

    let stats = system.dashboard_stats().await?;
    println!(
        "orders: {} total, {} completed, {} pending",
        stats.total_orders, stats.completed_orders, stats.pending_orders
    );

    for department in system.department_stats().await? {
        println!(
            "{}: {} assigned, {} completed",
            department.name, department.total_orders, department.completed_orders
        );
    }

    let report = system.agent_report(&args.agent, ReportPeriod::Weekly).await?;
    println!(
        "{} for {}: {} open, {} completed, {} past due",
        report.period,
        report.agent_name,
        report.open_orders,
        report.completed_orders,
        report.past_due_orders
    );

    let board = system
        .board(&DashboardView {
            show_completed: true,
            ..Default::default()
        })
        .await?;
    for status in [OrderStatus::Unassigned, OrderStatus::InProgress, OrderStatus::Completed] {
        let count = board.column(status).map_or(0, |c| c.orders.len());
        println!("{status}: {count}");
    }

    print!("{}", system.export_csv().await?);

    system.shutdown().await?;
    Ok(())
}
