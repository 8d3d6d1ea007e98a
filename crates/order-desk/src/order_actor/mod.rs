//! # Order Actor
//!
//! The order store: owns every [`Order`] and applies the lifecycle rules to them.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] (`Assign`, `ToggleTask`)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with an [`OrderContext`]: the category catalog (default checklists),
//! the department roster (agent lookups), the ledger (assignment history) and a
//! clock. All four are injected at `run()` time:
//!
//! ```rust,ignore
//! let (actor, client) = order_actor::new(32);
//! tokio::spawn(actor.run(OrderContext {
//!     categories,
//!     departments,
//!     ledger,
//!     clock: Arc::new(SystemClock),
//! }));
//! ```
//!
//! ## Creation
//!
//! 1. `from_create_params` validates the details and stamps `created_at`.
//! 2. `on_create` looks up the category (`CategoryNotFound` if absent), builds the
//!    checklist as the category's tasks followed by the custom tasks, and performs the
//!    initial assignment if one was requested.
//!
//! Any failure leaves the store untouched.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CategoryClient, DepartmentClient, LedgerClient};
use crate::clock::SharedClock;
use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Everything the order actor needs from the rest of the desk.
#[derive(Clone)]
pub struct OrderContext {
    pub categories: CategoryClient,
    pub departments: DepartmentClient,
    pub ledger: LedgerClient,
    pub clock: SharedClock,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
