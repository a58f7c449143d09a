//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity repository.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::id::{self, IdGenerator};
use crate::message::ResourceRequest;
use crate::pipeline::{Pipeline, RequestContext};
use crate::repository::Repository;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The pipelines of one entity type, built once when the actor starts.
struct Pipelines<T: ActorEntity> {
    create: Pipeline<T>,
    read: Pipeline<T>,
    update: Pipeline<T>,
    delete: Pipeline<T>,
}

impl<T: ActorEntity> Pipelines<T> {
    fn build() -> Self {
        Self {
            create: T::create_pipeline(),
            read: T::read_pipeline(),
            update: T::update_pipeline(),
            delete: T::delete_pipeline(),
        }
    }
}

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the [`Repository`] and the receiver
/// end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially*. A request's whole pipeline and its
/// terminal handler run inside one message turn, so find-then-mutate, find-then-remove and
/// push are never interleaved with another writer. No `Mutex` is needed around the
/// repository.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client freely; dropping every clone stops the actor.
///
/// ```rust
/// use actor_framework::pipeline::{Pipeline, RequestContext};
/// use actor_framework::stages::{FieldPresent, NonEmptyString};
/// use actor_framework::{ActorEntity, FrameworkError, Payload, ResourceActor};
/// use serde_json::json;
///
/// #[derive(Clone, Debug, serde::Serialize)]
/// struct Table { id: String, label: String }
///
/// impl ActorEntity for Table {
///     const KIND: &'static str = "Table";
///     fn id(&self) -> &str { &self.id }
///     fn create_pipeline() -> Pipeline<Self> {
///         Pipeline::new().then(FieldPresent::new("label")).then(NonEmptyString::new("label"))
///     }
///     fn update_pipeline() -> Pipeline<Self> { Self::create_pipeline() }
///     fn from_create_context(id: String, ctx: &RequestContext<Self>) -> Result<Self, FrameworkError> {
///         Ok(Self { id, label: ctx.string_field("label")? })
///     }
///     fn apply_update(&mut self, _: &Payload) -> Result<(), FrameworkError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Table>::new(10);
///     tokio::spawn(actor.run());
///
///     let table = client.create(json!({ "data": { "label": "Window" } })).await.unwrap();
///     assert_eq!(client.get(table.id.clone()).await.unwrap().label, "Window");
/// }
/// ```
///
/// ## Operations
///
/// * **List**: Returns a snapshot of the repository, oldest first. No pipeline.
/// * **Create**: Runs the create pipeline, draws a fresh id, calls
///   `T::from_create_context`, appends the entity and returns it.
/// * **Get**: Runs the read pipeline and returns the resolved entity.
/// * **Update**: Runs the update pipeline, applies the raw data object to a copy of the
///   resolved entity and swaps it in place.
/// * **Delete**: Runs the delete pipeline and removes the entity by position. A vanished
///   entity degrades to a no-op.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    repository: Repository<T>,
    next_id: IdGenerator,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with random hex ids and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_id_generator(buffer_size, id::random_hex())
    }

    /// Like [`ResourceActor::new`], with a caller-supplied id generator.
    pub fn with_id_generator(
        buffer_size: usize,
        next_id: IdGenerator,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            repository: Repository::new(),
            next_id,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        let pipelines = Pipelines::<T>::build();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.repository.len(), "List");
                    let _ = respond_to.send(Ok(self.repository.list().to_vec()));
                }
                ResourceRequest::Create {
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, ?payload, "Create");
                    let result = self.create(&pipelines.create, payload);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = item.id(), size = self.repository.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.get(&pipelines.read, id.clone());
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?payload, "Update");
                    let result = self.update(&pipelines.update, id.clone(), payload);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&pipelines.delete, id.clone());
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.repository.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.repository.len(), "Shutdown");
    }

    fn create(&mut self, pipeline: &Pipeline<T>, payload: Value) -> Result<T, FrameworkError> {
        let mut ctx = RequestContext::new(None, payload);
        pipeline.run(&mut ctx, &self.repository)?;

        let item = T::from_create_context((self.next_id)(), &ctx)?;
        self.repository.insert(item.clone());
        Ok(item)
    }

    fn get(&self, pipeline: &Pipeline<T>, id: String) -> Result<T, FrameworkError> {
        let mut ctx = RequestContext::new(Some(id), Value::Null);
        pipeline.run(&mut ctx, &self.repository)?;
        ctx.take_resolved().ok_or_else(|| not_found::<T>(ctx.route_id()))
    }

    fn update(
        &mut self,
        pipeline: &Pipeline<T>,
        id: String,
        payload: Value,
    ) -> Result<T, FrameworkError> {
        let mut ctx = RequestContext::new(Some(id), payload);
        pipeline.run(&mut ctx, &self.repository)?;

        let mut item = match ctx.take_resolved() {
            Some(item) => item,
            None => return Err(not_found::<T>(ctx.route_id())),
        };
        item.apply_update(ctx.data())?;
        if !self.repository.replace(item.clone()) {
            return Err(not_found::<T>(ctx.route_id()));
        }
        Ok(item)
    }

    fn delete(&mut self, pipeline: &Pipeline<T>, id: String) -> Result<(), FrameworkError> {
        let mut ctx = RequestContext::new(Some(id.clone()), Value::Null);
        pipeline.run(&mut ctx, &self.repository)?;

        if self.repository.remove_where(|item| item.id() == id).is_none() {
            warn!(entity_type = T::KIND, %id, "Entity vanished before removal");
        }
        Ok(())
    }
}

fn not_found<T: ActorEntity>(id: Option<&str>) -> FrameworkError {
    FrameworkError::not_found(format!(
        "{} does not exist: {}.",
        T::KIND,
        id.unwrap_or_default()
    ))
}
