//! # Runtime
//!
//! Starts and stops the desk.
//!
//! [`DeskSystem::new`] creates the category, department and ledger actors first, then
//! the order actor with an [`OrderContext`](crate::order_actor::OrderContext) holding
//! clones of their clients. Dependencies only point from orders to the rest, so
//! dropping the system's clients closes every channel and [`DeskSystem::shutdown`]
//! can simply await the tasks. The order actor's own clients (held by the system and
//! by any running [`OrderFeed`]) keep it alive, which is why a feed must be stopped
//! first.

pub mod desk_system;
pub mod feed;

pub use desk_system::*;
pub use feed::*;
