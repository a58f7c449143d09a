//! # Actor Framework
//!
//! This crate provides the building blocks for in-memory resource services: each resource
//! type lives in its own actor, and every mutation is gated by an ordered validation
//! pipeline before the actor touches its repository.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource model and the pipelines that guard it
//! 2. **Validation Layer** ([`Pipeline`], [`stages`]) - ordered, short-circuiting checks over a
//!    shared [`RequestContext`]
//! 3. **Runtime Layer** ([`ResourceActor`]) - owns the [`Repository`], runs pipelines and
//!    terminal handlers one message at a time
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async access
//!
//! ## Request flow
//!
//! ```text
//! client.update(id, body)
//!   └─▶ ResourceActor (one message turn)
//!         ├─ RequestContext::new(route id, body.data)
//!         ├─ update pipeline: stage 1 ─▶ stage 2 ─▶ … (first error wins)
//!         └─ terminal handler: apply_update + replace in repository
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor, so a pipeline and its
//!   terminal handler observe and mutate the repository without interleaving
//! - Different resource types run in **parallel**; there is no ordering across them
//!
//! ## Errors
//!
//! Every failure is a [`FrameworkError`]. Its [`ErrorKind`] maps to a status code:
//! validation 400, not-found 404, and actor communication failures 500.
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from queued expectations, so logic around a
//! client can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod pipeline;
pub mod repository;
pub mod stages;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{ErrorKind, FrameworkError};
pub use id::IdGenerator;
pub use message::{ResourceRequest, Response};
pub use pipeline::{Payload, Pipeline, RequestContext, Stage};
pub use repository::Repository;
