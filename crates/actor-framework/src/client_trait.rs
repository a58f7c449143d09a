//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `list`, `get`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the operations that carry no payload.
///
/// # Example
///
/// ```rust
/// use actor_framework::pipeline::{Pipeline, RequestContext};
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, Payload, ResourceClient};
///
/// #[derive(Clone, Debug, serde::Serialize)]
/// struct Chef { id: String }
///
/// impl ActorEntity for Chef {
///     const KIND: &'static str = "Chef";
///     fn id(&self) -> &str { &self.id }
///     fn create_pipeline() -> Pipeline<Self> { Pipeline::new() }
///     fn update_pipeline() -> Pipeline<Self> { Pipeline::new() }
///     fn from_create_context(id: String, _: &RequestContext<Self>) -> Result<Self, FrameworkError> {
///         Ok(Self { id })
///     }
///     fn apply_update(&mut self, _: &Payload) -> Result<(), FrameworkError> { Ok(()) }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("chef error: {0}")]
/// struct ChefError(FrameworkError);
///
/// impl From<FrameworkError> for ChefError {
///     fn from(e: FrameworkError) -> Self { ChefError(e) }
/// }
///
/// struct ChefClient { inner: ResourceClient<Chef> }
///
/// impl ActorClient<Chef> for ChefClient {
///     type Error = ChefError;
///     fn inner(&self) -> &ResourceClient<Chef> { &self.inner }
/// }
///
/// async fn usage(client: ChefClient) {
///     // list(), get() and delete() are provided automatically!
///     let _ = client.list().await;
///     let _ = client.get("chef_1").await;
///     let _ = client.delete("chef_1").await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error {
        Self::Error::from(e)
    }

    /// Fetch every entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
