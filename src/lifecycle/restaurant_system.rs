use super::SystemConfig;
use crate::api::Api;
use crate::clients::{DishClient, OrderClient};
use crate::model::{Dish, Order};
use actor_framework::{IdGenerator, ResourceActor, ResourceClient};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// Starts and stops the dish and order actors.
///
/// # Example
///
/// ```rust
/// use actor_framework::ActorClient;
/// use dish_orders::lifecycle::{RestaurantSystem, SystemConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RestaurantSystem::new(&SystemConfig::default());
///     assert!(system.order_client.list().await?.is_empty());
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RestaurantSystem {
    pub dish_client: DishClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns both actors with random hex ids. Must be called inside a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (dish_actor, dish_client) = crate::dish_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);
        Self::start(dish_actor, dish_client, order_actor, order_client)
    }

    /// Like [`RestaurantSystem::new`], with caller-supplied id generators.
    pub fn with_id_generators(
        config: &SystemConfig,
        dish_ids: IdGenerator,
        order_ids: IdGenerator,
    ) -> Self {
        let (dish_actor, dish_client) =
            crate::dish_actor::with_id_generator(config.buffer_size, dish_ids);
        let (order_actor, order_client) =
            crate::order_actor::with_id_generator(config.buffer_size, order_ids);
        Self::start(dish_actor, dish_client, order_actor, order_client)
    }

    fn start(
        dish_actor: ResourceActor<Dish>,
        dish_client: ResourceClient<Dish>,
        order_actor: ResourceActor<Order>,
        order_client: ResourceClient<Order>,
    ) -> Self {
        let dish_handle = tokio::spawn(dish_actor.run());
        let order_handle = tokio::spawn(order_actor.run());
        info!("System started");

        Self {
            dish_client: DishClient::new(dish_client),
            order_client: OrderClient::new(order_client),
            handles: vec![dish_handle, order_handle],
        }
    }

    /// A router over clones of this system's clients.
    pub fn api(&self) -> Api {
        Api::new(self.dish_client.clone(), self.order_client.clone())
    }

    /// Drops the system's clients and waits for both actors to exit.
    ///
    /// Actors stop once *every* client clone is gone, so routers handed out by
    /// [`RestaurantSystem::api`] must be dropped first or this waits forever.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
