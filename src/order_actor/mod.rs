//! # Order Actor
//!
//! This module implements the Order resource actor: the queue of customer orders and the
//! rules that guard their lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`stages`] - order-specific pipeline stages (line items, status rules)
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Pipelines
//!
//! | Operation | Stages |
//! |-----------|--------|
//! | create | presence(deliverTo, mobileNumber, dishes) → non-empty(deliverTo, mobileNumber) → dishes-non-empty-array → dish-quantity-valid |
//! | update | entity-exists → route-body-id-match → presence(deliverTo, mobileNumber, status, dishes) → non-empty(deliverTo, mobileNumber) → order-not-delivered → order-status-known → dishes-non-empty-array → dish-quantity-valid |
//! | delete | entity-exists → order-pending |
//!
//! A new order is always stored as `pending`, whatever status the request carried.

pub mod entity;
pub mod error;
pub mod stages;

pub use error::*;

use crate::model::Order;
use actor_framework::{IdGenerator, ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}

/// Creates a new Order actor drawing ids from `next_id`.
pub fn with_id_generator(
    buffer_size: usize,
    next_id: IdGenerator,
) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::with_id_generator(buffer_size, next_id)
}
