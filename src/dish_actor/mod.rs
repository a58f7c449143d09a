//! # Dish Actor
//!
//! This module implements the Dish resource actor: the menu catalog.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Validation
//!
//! Dishes only carry attribute rules: every field is required, the text fields must be
//! non-empty strings and the price a positive integer. Deleting a dish has no precondition
//! and does not touch orders that reference it.
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use dish_orders::clients::DishClient;
//! use dish_orders::dish_actor;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = dish_actor::new(32);
//!     let client = DishClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let dish = client
//!         .create_dish(json!({ "data": {
//!             "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x"
//!         } }))
//!         .await?;
//!     assert_eq!(client.list().await?.len(), 1);
//!     client.delete(&dish.id).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Dish;
use actor_framework::{IdGenerator, ResourceActor, ResourceClient};

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::new(buffer_size)
}

/// Creates a new Dish actor drawing ids from `next_id`.
pub fn with_id_generator(
    buffer_size: usize,
    next_id: IdGenerator,
) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::with_id_generator(buffer_size, next_id)
}
