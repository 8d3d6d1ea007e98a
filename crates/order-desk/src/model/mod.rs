//! Plain data types shared by the actors and the pure engines.

pub mod category;
pub mod department;
pub mod ledger;
pub mod order;
pub mod task;

pub use category::*;
pub use department::*;
pub use ledger::*;
pub use order::*;
pub use task::{numbered, TaskItem};
