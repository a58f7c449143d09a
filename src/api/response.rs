//! Status codes and JSON bodies.

use crate::dish_actor::DishError;
use crate::order_actor::OrderError;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

/// A resource error that knows which status code it answers with.
pub trait StatusError: std::error::Error {
    fn status_code(&self) -> u16;
}

impl StatusError for DishError {
    fn status_code(&self) -> u16 {
        DishError::status_code(self)
    }
}

impl StatusError for OrderError {
    fn status_code(&self) -> u16 {
        OrderError::status_code(self)
    }
}

/// What the router hands back: a status code and an optional JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiResponse {
    /// `{ "data": value }` under the given status.
    pub fn data(status: u16, value: &impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(data) => Self {
                status,
                body: Some(json!({ "data": data })),
            },
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                Self::internal()
            }
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// `{ "message": message }` under the given status.
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(json!({ "message": message.into() })),
        }
    }

    pub fn internal() -> Self {
        Self::message(500, "Internal server error")
    }

    /// Maps a resource error to its response. Internal failures are logged and their detail
    /// is withheld from the caller.
    pub fn from_error<E: StatusError>(e: &E) -> Self {
        let status = e.status_code();
        if status >= 500 {
            error!(error = %e, "Request failed");
            return Self::internal();
        }
        Self::message(status, e.to_string())
    }

    /// Maps an operation result, using `status` on success.
    pub fn from_result<T: Serialize, E: StatusError>(status: u16, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::data(status, &value),
            Err(e) => Self::from_error(&e),
        }
    }

    /// The `message` of an error body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("message")?.as_str()
    }
}
