//! # Clients
//!
//! Typed wrappers around each actor's `ResourceClient`. They turn generic requests
//! into domain calls (`assign`, `add_agent`, `history`) and framework failures into
//! the actor's own error type. Standard `get`, `list`, `delete` and `subscribe`
//! come from [`ActorClient`](resource_actor::ActorClient).

pub mod category_client;
pub mod department_client;
pub mod ledger_client;
pub mod order_client;

pub use category_client::CategoryClient;
pub use department_client::DepartmentClient;
pub use ledger_client::LedgerClient;
pub use order_client::OrderClient;
