//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Dish, Order, …) must
//! implement to be managed by the generic `ResourceActor`. An entity declares the validation
//! pipelines that gate each mutation and knows how to assemble itself from a validated
//! request context. The actor owns everything else: the repository, identifier generation and
//! the order in which pipelines and terminal handlers run.
//!
//! # Provided Methods
//! - [`ActorEntity::read_pipeline`]
//! - [`ActorEntity::delete_pipeline`]
//!
//! Both default to a single [`EntityExists`](crate::stages::EntityExists) stage, which is what
//! a plain resource needs. Override them to add preconditions (e.g. an order may only be
//! deleted while it is pending).

use crate::error::FrameworkError;
use crate::pipeline::{Payload, Pipeline, RequestContext};
use crate::stages::EntityExists;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that any resource entity must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Resource name used in user-facing messages, e.g. `"Dish"`.
    const KIND: &'static str;

    /// The identifier assigned at creation time.
    fn id(&self) -> &str;

    /// Stages run before a new entity is assembled.
    fn create_pipeline() -> Pipeline<Self>;

    /// Stages run before an existing entity is overwritten.
    fn update_pipeline() -> Pipeline<Self>;

    /// Stages run before an entity is returned by id.
    fn read_pipeline() -> Pipeline<Self> {
        Pipeline::new().then(EntityExists)
    }

    /// Stages run before an entity is removed.
    fn delete_pipeline() -> Pipeline<Self> {
        Pipeline::new().then(EntityExists)
    }

    /// Construct the full entity from a fresh id and the fields the create pipeline staged.
    fn from_create_context(id: String, ctx: &RequestContext<Self>) -> Result<Self, FrameworkError>;

    /// Overwrite every mutable field from the request's data object.
    ///
    /// Called only after the update pipeline passed, so shape errors here indicate a
    /// pipeline that does not cover a field.
    fn apply_update(&mut self, data: &Payload) -> Result<(), FrameworkError>;
}
