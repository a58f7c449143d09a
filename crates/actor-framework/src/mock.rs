//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of a running actor. It lets you test logic that sits
//! *around* a client (typed wrappers, the router, error mapping) without spawning actors, and
//! inject failures that are hard to provoke for real, such as a closed actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real repository and pipelines |
//! | **Use Case** | Unit testing logic *around* the client | Testing validation and lifecycle rules |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::pipeline::{Pipeline, RequestContext};
//! use actor_framework::{ActorEntity, FrameworkError, Payload};
//!
//! #[derive(Clone, Debug, PartialEq, serde::Serialize)]
//! struct Menu { id: String }
//!
//! impl ActorEntity for Menu {
//!     const KIND: &'static str = "Menu";
//!     fn id(&self) -> &str { &self.id }
//!     fn create_pipeline() -> Pipeline<Self> { Pipeline::new() }
//!     fn update_pipeline() -> Pipeline<Self> { Pipeline::new() }
//!     fn from_create_context(id: String, _: &RequestContext<Self>) -> Result<Self, FrameworkError> {
//!         Ok(Self { id })
//!     }
//!     fn apply_update(&mut self, _: &Payload) -> Result<(), FrameworkError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Menu>::new();
//!     mock.expect_get("menu_1").return_ok(Menu { id: "menu_1".into() });
//!     mock.expect_delete("menu_1").return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get("menu_1").await.unwrap().id, "menu_1");
//!     assert!(matches!(client.delete("menu_1").await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw channel access
//!
//! Use [`create_mock_client`] together with [`expect_create`], [`expect_get`],
//! [`expect_update`] or [`expect_delete`] to inspect the exact request a wrapper sends and
//! answer it by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: String,
        response: Result<T, FrameworkError>,
    },
    Update {
        id: String,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: String,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_id(expected: &str, actual: &str) {
    assert_eq!(expected, actual, "MockClient received a request for an unexpected id");
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation panics the mock task, which surfaces in the test as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        let id = id.into();
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_update(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        let id = id.into();
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        let id = id.into();
        self.builder(move |response| Expectation::Delete { id, response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with the response the mock should send back.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.make)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.make)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test pulls them with one of the `expect_*`
/// helpers below and sends a reply through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Value, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Value, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            payload,
            respond_to,
        }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Delete request.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
