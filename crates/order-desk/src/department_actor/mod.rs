//! # Department Actor
//!
//! Owns departments and their agent rosters. Department names are unique across the
//! desk (they are the key); agent names are unique within a department.
//!
//! The order actor consults this roster before recording an assignment: assigning an
//! order to a name that is in no department fails with `NotFound`.
//!
//! ```rust,ignore
//! let (actor, client) = department_actor::new(32, config.departments.clone());
//! tokio::spawn(actor.run(()));
//!
//! let departments = DepartmentClient::new(client);
//! departments.add_agent("Support", Agent::new("Dana")).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Department;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Department actor seeded with `initial`, and its client.
pub fn new(
    buffer_size: usize,
    initial: impl IntoIterator<Item = Department>,
) -> (ResourceActor<Department>, ResourceClient<Department>) {
    let (actor, client) = ResourceActor::new(buffer_size);
    let actor = actor.with_entries(initial.into_iter().map(|d| (d.name.clone(), d)));
    (actor, client)
}
