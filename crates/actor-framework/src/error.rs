//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Every pipeline stage and terminal handler reports failure through [`FrameworkError`],
//! and the variant decides the status code a caller surfaces.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    /// A request failed one of the validation stages.
    #[error("{0}")]
    Validation(String),
    /// The addressed entity does not exist in the repository.
    #[error("{0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Classification of a [`FrameworkError`], mirroring the status code it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

impl FrameworkError {
    pub fn validation(message: impl Into<String>) -> Self {
        FrameworkError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        FrameworkError::NotFound(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameworkError::Validation(_) => ErrorKind::Validation,
            FrameworkError::NotFound(_) => ErrorKind::NotFound,
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}
