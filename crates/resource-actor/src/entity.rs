//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (orders, departments,
//! categories, ledger entries) implements to be managed by the generic `ResourceActor`.
//! It names the key, the DTOs, the custom actions, the injected context and the error
//! type, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`).
//!
//! `on_create` and `on_delete` default to accepting the request; `on_update` and
//! `handle_action` must be written for every resource.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource the [`ResourceActor`](crate::ResourceActor) can own.
///
/// # Keys
/// The actor hands every create request a monotonically increasing sequence number.
/// [`ActorEntity::assign_id`] turns that number (or the payload itself, for resources
/// keyed by a natural name) into the entity key. Keys are kept in a `BTreeMap`, so
/// `list` returns entities in key order.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook at `run()` time rather than at construction, which lets
/// actors depend on clients created after them.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Store key, also used in log fields and `NotFound` messages.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Create payload.
    type Create: Send + Sync + Debug;

    /// Update payload; what it may change is up to `on_update`.
    type Update: Send + Sync + Debug;

    /// Operations beyond CRUD, e.g. `ToggleTask` on orders.
    type Action: Send + Sync + Debug;

    /// Reply to an [`Action`](Self::Action), usually one variant per action.
    type ActionResult: Send + Sync + Debug;

    /// Other actors' clients and services the hooks need; `()` for none.
    type Context: Send + Sync;

    /// One error enum covers every operation of the actor. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Derive the key of a new entity.
    ///
    /// `seq` starts at 1 and increases with every create request the actor receives,
    /// including rejected ones.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Builds the entity from its key and payload, before `on_create` runs.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Called after the entity is constructed and before it is stored.
    /// Failing here rejects the create request and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place. Nothing is rolled back on error, so check first.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs a custom action. Success is published as `Change::Updated`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
