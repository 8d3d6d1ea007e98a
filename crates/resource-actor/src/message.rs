//! # Generic Messages
//!
//! Request and notification types exchanged between `ResourceClient` and
//! `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::{broadcast, oneshot};

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the CRUD lifecycle of a stored resource, plus `List` for
/// whole-collection reads, `Action` for resource-specific logic and `Subscribe` for
/// change notifications.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Subscribe {
        respond_to: Response<broadcast::Receiver<Change<T::Id>>>,
    },
}

/// Notification published by an actor after a successful mutation.
///
/// Successful actions are reported as `Updated`, since they mutate the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<Id> {
    Created(Id),
    Updated(Id),
    Deleted(Id),
}

impl<Id> Change<Id> {
    /// The key of the entity that changed.
    pub fn id(&self) -> &Id {
        match self {
            Change::Created(id) | Change::Updated(id) | Change::Deleted(id) => id,
        }
    }
}
