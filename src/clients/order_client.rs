use crate::model::Order;
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Lifecycle rules (the delivered freeze, pending-only delete) run inside the actor; this
/// wrapper only forwards request bodies and types the errors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, body))]
    pub async fn create_order(&self, body: Value) -> Result<Order, OrderError> {
        debug!(?body, "create_order called");
        self.inner.create(body).await.map_err(OrderError::from)
    }

    #[instrument(skip(self, body))]
    pub async fn update_order(&self, id: &str, body: Value) -> Result<Order, OrderError> {
        debug!(?body, "update_order called");
        self.inner.update(id, body).await.map_err(OrderError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}
