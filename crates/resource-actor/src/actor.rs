//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities and processes requests for it sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Change, ResourceRequest};
use std::collections::BTreeMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The actor owns the `store` and the receiving end of the request channel. Each actor
/// runs in its own Tokio task and handles one message at a time, so the store needs no
/// locking. Every successful mutation is published as a [`Change`] on a broadcast
/// channel; subscribers that fall behind observe `Lagged` and should re-read the
/// collection.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Order>::new(32);
/// tokio::spawn(actor.run(context));
/// let id = client.create(params).await?;
/// ```
///
/// # Operations
///
/// * **Create**: takes the next sequence number, derives the key with
///   `T::assign_id`, rejects duplicate keys, builds the entity, runs `on_create`,
///   stores it.
/// * **Get** / **List**: clone out one entity or all of them in key order.
/// * **Update**: runs `on_update` on the stored entity and returns the new state.
///   A failing hook leaves whatever the hook already changed; entities are expected to
///   validate before mutating.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` and returns its result.
/// * **Subscribe**: hands out a receiver for change notifications.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_seq: u32,
    changes: broadcast::Sender<Change<T::Id>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` bounds both the request queue and the change-notification backlog
    /// kept for slow subscribers. A size of zero is treated as one.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let capacity = buffer_size.max(1);
        let (sender, receiver) = mpsc::channel(capacity);
        let (changes, _) = broadcast::channel(capacity);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_seq: 1,
            changes,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Seeds the store before the actor starts, bypassing hooks.
    ///
    /// Used for state loaded from configuration. Later entries with the same key
    /// replace earlier ones.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = (T::Id, T)>) -> Self {
        self.store.extend(entries);
        self
    }

    fn publish(&self, change: Change<T::Id>) {
        // No subscribers is fine.
        let _ = self.changes.send(change);
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::assign_id(self.next_seq, &params);
                    self.next_seq = self.next_seq.wrapping_add(1);

                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            self.publish(Change::Created(id.clone()));
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let updated = item.clone();
                    info!(entity_type, %id, "Updated");
                    self.publish(Change::Updated(id));
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.publish(Change::Deleted(id));
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            info!(entity_type, %id, "Action ok");
                            self.publish(Change::Updated(id));
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Subscribe { respond_to } => {
                    debug!(entity_type, "Subscribe");
                    let _ = respond_to.send(Ok(self.changes.subscribe()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
