//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use serde_json::Value;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the five resource operations. Mutating variants carry the raw JSON
/// request body; the actor runs the entity's pipeline over it before touching the repository.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: Value,
        respond_to: Response<T>,
    },
    Get {
        id: String,
        respond_to: Response<T>,
    },
    Update {
        id: String,
        payload: Value,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}
