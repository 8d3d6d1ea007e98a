//! # Resource Actor
//!
//! Building blocks for keeping collections of stateful entities behind Tokio actors.
//! Each resource type (orders, departments, categories, ledger entries) gets one
//! [`ResourceActor`] that owns its store and processes requests one at a time, and any
//! number of cheap [`ResourceClient`] handles that talk to it over channels.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type, its DTOs and lifecycle hooks
//! 2. **Runtime** ([`ResourceActor`]) - message loop, store, change notifications
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed requests and replies
//!
//! Business rules live in the entity hooks. The actor never reorders requests, so two
//! writers racing on the same entity are applied in arrival order and each sees the
//! result of the previous one.
//!
//! ## Context Injection
//!
//! Dependencies are injected at `run()` time, not at construction:
//!
//! ```rust,ignore
//! let (category_actor, categories) = ResourceActor::<Category>::new(32);
//! let (order_actor, orders) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(category_actor.run(()));
//! tokio::spawn(order_actor.run(OrderContext { categories, .. }));
//! ```
//!
//! ## Change Notifications
//!
//! After every successful create, update, delete or action the actor publishes a
//! [`Change`] naming the affected key. [`ResourceClient::subscribe`] returns a
//! `broadcast::Receiver`; a receiver that lags behind gets `RecvError::Lagged` and
//! should re-read the collection with `list()`. The sender lives inside the actor, so
//! receivers see `Closed` once the actor has stopped.
//!
//! ## Testing
//!
//! [`mock::MockClient`] produces a real `ResourceClient<T>` backed by scripted replies,
//! so an actor's dependencies can be replaced without spawning their actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod telemetry;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Change, ResourceRequest, Response};
