//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a
/// `ResourceActor<T>`. It forwards requests over a Tokio mpsc channel and returns results via
/// oneshot channels. The client is cheap to clone and can be shared across tasks.
///
/// Mutating calls take the raw JSON request body (`{ "data": { ... } }`); validation happens
/// inside the actor.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn create(&self, payload: Value) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create {
            payload,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<T, FrameworkError> {
        let id = id.into();
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: impl Into<String>, payload: Value) -> Result<T, FrameworkError> {
        let id = id.into();
        self.call(|respond_to| ResourceRequest::Update {
            id,
            payload,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<(), FrameworkError> {
        let id = id.into();
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}
