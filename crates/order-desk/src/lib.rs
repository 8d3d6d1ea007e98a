//! # Order Desk
//!
//! The core of an order-tracking dashboard for a provisioning team: orders move
//! through a checklist of tasks, get assigned to agents organised in departments, and
//! are viewed through search, filters, sorts and a status board.
//!
//! ## Layout
//!
//! - [`model`] - plain data: orders, tasks, departments, categories, ledger events
//! - [`validation`], [`lifecycle`] - input checks and the status rules
//! - [`view`], [`stats`], [`report`], [`export`] - pure read-side computations
//! - `*_actor` + [`clients`] - one [`resource_actor`] store per entity kind
//! - [`runtime`] - [`DeskSystem`](runtime::DeskSystem), which wires and runs the stores
//!
//! Every pure module works on an order snapshot and a `now`, so it can be tested
//! without spawning anything. The actors are where state lives and where the ledger
//! gets written.

pub mod category_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod department_actor;
pub mod error;
pub mod export;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod report;
pub mod runtime;
pub mod stats;
pub mod validation;
pub mod view;

pub use error::{DeskError, ErrorKind};
