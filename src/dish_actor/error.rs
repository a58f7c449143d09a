//! Error types for the Dish actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// The requested dish was not found.
    #[error("{0}")]
    NotFound(String),

    /// The dish data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DishError {
    pub fn status_code(&self) -> u16 {
        match self {
            DishError::ValidationError(_) => 400,
            DishError::NotFound(_) => 404,
            DishError::ActorCommunicationError(_) => 500,
        }
    }
}

impl From<FrameworkError> for DishError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Validation(msg) => DishError::ValidationError(msg),
            FrameworkError::NotFound(msg) => DishError::NotFound(msg),
            other => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
