//! # Category Actor
//!
//! Owns the catalog of order categories. Each [`Category`] names an order type and the
//! checklist new orders of that type start with. The catalog is seeded from
//! configuration and edited at runtime through [`CategoryAction`]s; the order actor
//! reads it through its context when an order is created.
//!
//! ```rust,ignore
//! let (actor, client) = category_actor::new(32, config.categories.clone());
//! tokio::spawn(actor.run(()));
//!
//! let categories = CategoryClient::new(client);
//! categories.add_task("SIP Trunk", "E911 Registered").await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Category;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Category actor seeded with `initial`, and its client.
pub fn new(
    buffer_size: usize,
    initial: impl IntoIterator<Item = Category>,
) -> (ResourceActor<Category>, ResourceClient<Category>) {
    let (actor, client) = ResourceActor::new(buffer_size);
    let actor = actor.with_entries(initial.into_iter().map(|c| (c.name.clone(), c)));
    (actor, client)
}
