//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list`, `delete`
//! and `subscribe` built on a generic `ResourceClient`, with framework errors mapped
//! into the resource's own error type.
use crate::{ActorEntity, Change, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Trait for resource-specific clients to inherit standard operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Department> for DepartmentClient {
///     type Error = DepartmentError;
///
///     fn inner(&self) -> &ResourceClient<Department> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.into_entity_error().unwrap_or_else(|e| DepartmentError::Store(e.to_string()))
///     }
/// }
///
/// // get(), list(), delete() and subscribe() are provided.
/// let all = client.list().await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Subscribe to change notifications.
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self) -> Result<broadcast::Receiver<Change<T::Id>>, Self::Error> {
        self.inner().subscribe().await.map_err(Self::map_error)
    }
}
