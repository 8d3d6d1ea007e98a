//! Live order snapshot for dashboards.

use crate::clients::OrderClient;
use crate::model::Order;
use crate::order_actor::OrderError;
use resource_actor::ActorClient;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Keeps a copy of the full order list current.
///
/// A background task listens to the order actor's change notifications and re-reads
/// the whole list after each one, publishing it on a `watch` channel. A burst of
/// changes is coalesced into one refresh, and a lagged subscription simply triggers
/// another refresh, so readers always converge on the latest state.
///
/// The task holds an [`OrderClient`], which keeps the order actor alive. Stop the
/// feed (or drop it) before shutting the desk down.
pub struct OrderFeed {
    snapshot: watch::Receiver<Vec<Order>>,
    task: Option<JoinHandle<()>>,
}

impl OrderFeed {
    /// Subscribes, loads the first snapshot and starts refreshing.
    pub async fn start(orders: OrderClient) -> Result<Self, OrderError> {
        // Subscribe before the first read so no change falls between the two.
        let mut changes = orders.subscribe().await?;
        let (publish, snapshot) = watch::channel(orders.list().await?);

        let task = tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(change) => debug!(order_id = %change.id(), "Order changed"),
                    Err(RecvError::Lagged(skipped)) => warn!(skipped, "Order feed lagged"),
                    Err(RecvError::Closed) => break,
                }
                loop {
                    match changes.try_recv() {
                        Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
                        Err(_) => break,
                    }
                }

                match orders.list().await {
                    Ok(list) => {
                        if publish.send(list).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Order feed refresh failed");
                        break;
                    }
                }
            }
            info!("Order feed stopped");
        });

        Ok(Self {
            snapshot,
            task: Some(task),
        })
    }

    /// The latest published list.
    pub fn snapshot(&self) -> Vec<Order> {
        self.snapshot.borrow().clone()
    }

    /// A receiver of every future snapshot.
    pub fn watch(&self) -> watch::Receiver<Vec<Order>> {
        self.snapshot.clone()
    }

    /// Waits for the next refresh and returns it. `None` once the feed has stopped.
    pub async fn next(&mut self) -> Option<Vec<Order>> {
        self.snapshot.changed().await.ok()?;
        Some(self.snapshot.borrow_and_update().clone())
    }

    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for OrderFeed {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
