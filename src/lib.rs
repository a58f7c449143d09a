//! # Dish Orders
//!
//! An in-memory resource API for a restaurant: a catalog of **dishes** and a queue of
//! **orders** that reference them.
//!
//! Every resource is owned by one [`ResourceActor`](actor_framework::ResourceActor) task.
//! Each request runs an ordered validation [`Pipeline`](actor_framework::Pipeline) inside that
//! task, and only a request whose whole pipeline passes touches the repository.
//!
//! ## Module Tour
//!
//! - [`model`]: [`Dish`](model::Dish), [`Order`](model::Order) and the
//!   [`OrderStatus`](model::OrderStatus) lifecycle.
//! - [`dish_actor`], [`order_actor`]: entity pipelines, resource-specific stages and errors.
//! - [`clients`]: typed wrappers over the generic client.
//! - [`api`]: the router mapping `(method, path, body)` to status codes and JSON bodies.
//! - [`lifecycle`]: configuration, startup and shutdown.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod api;
pub mod clients;
pub mod dish_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
