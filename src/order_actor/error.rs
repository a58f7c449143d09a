//! Error types for the Order actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("{0}")]
    NotFound(String),

    /// The order data provided is invalid, or its status forbids the operation.
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::ValidationError(_) => 400,
            OrderError::NotFound(_) => 404,
            OrderError::ActorCommunicationError(_) => 500,
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Validation(msg) => OrderError::ValidationError(msg),
            FrameworkError::NotFound(msg) => OrderError::NotFound(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
