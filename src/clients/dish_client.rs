use crate::dish_actor::DishError;
use crate::model::Dish;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    /// Submits a `{ "data": { ... } }` body to the create pipeline.
    #[instrument(skip(self, body))]
    pub async fn create_dish(&self, body: Value) -> Result<Dish, DishError> {
        debug!(?body, "create_dish called");
        self.inner.create(body).await.map_err(DishError::from)
    }

    #[instrument(skip(self, body))]
    pub async fn update_dish(&self, id: &str, body: Value) -> Result<Dish, DishError> {
        debug!(?body, "update_dish called");
        self.inner.update(id, body).await.map_err(DishError::from)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }
}
