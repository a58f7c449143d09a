//! # Validation Pipeline
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s sharing one [`RequestContext`]. Each stage
//! either passes (optionally staging validated values into the context) or fails with a
//! classified [`FrameworkError`]. The first failure wins: later stages never run.
//!
//! Stages never touch the repository mutably. Only the terminal handler in
//! [`ResourceActor`](crate::ResourceActor) mutates state, and only after the whole pipeline
//! passed.
//!
//! ```rust
//! use actor_framework::pipeline::{stage, Pipeline, RequestContext};
//! use actor_framework::stages::{FieldPresent, NonEmptyString};
//! # use actor_framework::{ActorEntity, FrameworkError, Payload, Repository};
//! # #[derive(Clone, Debug, serde::Serialize)] struct Tag { id: String, label: String }
//! # impl ActorEntity for Tag {
//! #     const KIND: &'static str = "Tag";
//! #     fn id(&self) -> &str { &self.id }
//! #     fn create_pipeline() -> Pipeline<Self> { Pipeline::new() }
//! #     fn update_pipeline() -> Pipeline<Self> { Pipeline::new() }
//! #     fn from_create_context(id: String, ctx: &RequestContext<Self>) -> Result<Self, FrameworkError> {
//! #         Ok(Self { id, label: ctx.string_field("label")? })
//! #     }
//! #     fn apply_update(&mut self, _: &Payload) -> Result<(), FrameworkError> { Ok(()) }
//! # }
//!
//! let pipeline: Pipeline<Tag> = Pipeline::new()
//!     .then(FieldPresent::new("label"))
//!     .then(NonEmptyString::new("label"))
//!     .then(stage("label-short", |ctx: &mut RequestContext<Tag>, _: &Repository<Tag>| {
//!         match ctx.field("label").and_then(|v| v.as_str()) {
//!             Some(label) if label.len() <= 16 => Ok(()),
//!             _ => Err(FrameworkError::validation("Tag label is too long")),
//!         }
//!     }));
//! assert_eq!(pipeline.len(), 3);
//! ```

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::repository::Repository;
use crate::stages::as_positive_integer;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// The `data` object of a request body.
pub type Payload = Map<String, Value>;

/// Per-request scratch record shared by every stage of one pipeline run.
#[derive(Debug, Clone)]
pub struct RequestContext<T> {
    route_id: Option<String>,
    data: Payload,
    fields: Payload,
    resolved: Option<T>,
}

impl<T: ActorEntity> RequestContext<T> {
    /// Builds a context from a raw request body of shape `{ "data": { ... } }`.
    ///
    /// Any other shape yields an empty data object, so presence stages report the missing
    /// fields instead of the request faulting.
    pub fn new(route_id: Option<String>, body: Value) -> Self {
        let data = match body {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Payload::new(),
            },
            _ => Payload::new(),
        };
        Self {
            route_id,
            data,
            fields: Payload::new(),
            resolved: None,
        }
    }

    /// The id addressed by the request route, if any.
    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// The raw `data` object as supplied by the caller.
    pub fn data(&self) -> &Payload {
        &self.data
    }

    /// A value from the raw request data.
    pub fn data_value(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// A value staged by an earlier stage.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// The entity located by an [`EntityExists`](crate::stages::EntityExists) stage.
    pub fn resolved(&self) -> Option<&T> {
        self.resolved.as_ref()
    }

    pub fn resolve(&mut self, entity: T) {
        self.resolved = Some(entity);
    }

    pub fn take_resolved(&mut self) -> Option<T> {
        self.resolved.take()
    }

    /// A staged string field, or a validation error naming it.
    pub fn string_field(&self, name: &str) -> Result<String, FrameworkError> {
        string_in::<T>(&self.fields, name)
    }

    /// A staged positive integer field, or a validation error naming it.
    pub fn positive_integer_field(&self, name: &str) -> Result<u64, FrameworkError> {
        positive_integer_in::<T>(&self.fields, name)
    }
}

/// Reads a string out of a payload, phrasing the failure for entity `T`.
pub fn string_in<T: ActorEntity>(payload: &Payload, name: &str) -> Result<String, FrameworkError> {
    payload
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| FrameworkError::validation(format!("{} must include a {}", T::KIND, name)))
}

/// Reads a positive integer out of a payload, phrasing the failure for entity `T`.
pub fn positive_integer_in<T: ActorEntity>(
    payload: &Payload,
    name: &str,
) -> Result<u64, FrameworkError> {
    payload.get(name).and_then(as_positive_integer).ok_or_else(|| {
        FrameworkError::validation(format!(
            "{} must have a {} that is an integer greater than 0",
            T::KIND,
            name
        ))
    })
}

/// One validation step.
pub trait Stage<T: ActorEntity>: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Passes control forward with `Ok(())` or stops the pipeline with an error.
    fn check(
        &self,
        ctx: &mut RequestContext<T>,
        repository: &Repository<T>,
    ) -> Result<(), FrameworkError>;
}

/// A [`Stage`] backed by a closure. Build one with [`stage`].
pub struct FnStage<F> {
    name: &'static str,
    check: F,
}

/// Wraps a closure as a named stage.
pub fn stage<T, F>(name: &'static str, check: F) -> FnStage<F>
where
    T: ActorEntity,
    F: Fn(&mut RequestContext<T>, &Repository<T>) -> Result<(), FrameworkError> + Send + Sync,
{
    FnStage { name, check }
}

impl<T, F> Stage<T> for FnStage<F>
where
    T: ActorEntity,
    F: Fn(&mut RequestContext<T>, &Repository<T>) -> Result<(), FrameworkError> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(
        &self,
        ctx: &mut RequestContext<T>,
        repository: &Repository<T>,
    ) -> Result<(), FrameworkError> {
        (self.check)(ctx, repository)
    }
}

/// An ordered chain of stages.
pub struct Pipeline<T: ActorEntity> {
    stages: Vec<Box<dyn Stage<T>>>,
}

impl<T: ActorEntity> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Pipeline<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage to the end of the chain.
    pub fn then(mut self, stage: impl Stage<T> + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs every stage in order, stopping at the first failure.
    pub fn run(
        &self,
        ctx: &mut RequestContext<T>,
        repository: &Repository<T>,
    ) -> Result<(), FrameworkError> {
        for stage in &self.stages {
            if let Err(error) = stage.check(ctx, repository) {
                debug!(entity_type = T::KIND, stage = stage.name(), %error, "Stage failed");
                return Err(error);
            }
            trace!(entity_type = T::KIND, stage = stage.name(), "Stage passed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, Serialize)]
    struct Probe {
        id: String,
    }

    impl ActorEntity for Probe {
        const KIND: &'static str = "Probe";

        fn id(&self) -> &str {
            &self.id
        }
        fn create_pipeline() -> Pipeline<Self> {
            Pipeline::new()
        }
        fn update_pipeline() -> Pipeline<Self> {
            Pipeline::new()
        }
        fn from_create_context(id: String, _ctx: &RequestContext<Self>) -> Result<Self, FrameworkError> {
            Ok(Self { id })
        }
        fn apply_update(&mut self, _data: &Payload) -> Result<(), FrameworkError> {
            Ok(())
        }
    }

    fn counting(name: &'static str, hits: Arc<AtomicUsize>, fail: bool) -> impl Stage<Probe> {
        stage(name, move |_ctx: &mut RequestContext<Probe>, _repo: &Repository<Probe>| {
            hits.fetch_add(1, Ordering::SeqCst);
            if fail {
                Err(FrameworkError::validation(name))
            } else {
                Ok(())
            }
        })
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let hits = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .then(counting("first", hits.clone(), false))
            .then(counting("second", hits.clone(), true))
            .then(counting("third", hits.clone(), true));

        let mut ctx = RequestContext::<Probe>::new(None, json!({}));
        let err = pipeline.run(&mut ctx, &Repository::new()).unwrap_err();

        assert_eq!(err, FrameworkError::validation("second"));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_pipeline_passes() {
        let pipeline = Pipeline::<Probe>::new();
        let mut ctx = RequestContext::new(None, json!(null));
        assert!(pipeline.run(&mut ctx, &Repository::new()).is_ok());
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_context_reads_data_object_only() {
        let ctx = RequestContext::<Probe>::new(Some("r1".into()), json!({ "data": { "a": 1 }, "b": 2 }));
        assert_eq!(ctx.route_id(), Some("r1"));
        assert_eq!(ctx.data_value("a"), Some(&json!(1)));
        assert!(ctx.data_value("b").is_none());

        let malformed = RequestContext::<Probe>::new(None, json!({ "data": [1, 2] }));
        assert!(malformed.data().is_empty());
        let scalar = RequestContext::<Probe>::new(None, json!("oops"));
        assert!(scalar.data().is_empty());
    }

    #[test]
    fn test_typed_field_accessors() {
        let mut ctx = RequestContext::<Probe>::new(None, json!({}));
        ctx.set_field("name", json!("Taco"));
        ctx.set_field("price", json!(5));
        ctx.set_field("weight", json!(-1));

        assert_eq!(ctx.string_field("name").unwrap(), "Taco");
        assert_eq!(ctx.positive_integer_field("price").unwrap(), 5);
        assert_eq!(
            ctx.string_field("price").unwrap_err(),
            FrameworkError::validation("Probe must include a price")
        );
        assert!(ctx.positive_integer_field("weight").is_err());
    }

    #[test]
    fn test_stage_names_in_order() {
        let hits = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .then(counting("a", hits.clone(), false))
            .then(counting("b", hits, false));
        assert_eq!(pipeline.stage_names(), vec!["a", "b"]);
    }
}
