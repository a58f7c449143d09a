//! # Request Router
//!
//! [`Api`] maps `(method, path, body)` onto the dish and order clients and renders every
//! outcome as an [`ApiResponse`]. It is transport-agnostic: an HTTP server, a CLI or a test
//! can drive it the same way.
//!
//! | Path | GET | POST | PUT | DELETE |
//! |------|-----|------|-----|--------|
//! | `/dishes` | list (200) | create (201) | | |
//! | `/dishes/{dishId}` | read (200) | | update (200) | delete (204) |
//! | `/orders` | list (200) | create (201) | | |
//! | `/orders/{orderId}` | read (200) | | update (200) | delete (204) |
//!
//! A trailing slash is ignored. Unknown paths answer 404, known paths with an unsupported
//! method answer 405.

pub mod method;
pub mod response;

pub use method::*;
pub use response::*;

use crate::clients::{DishClient, OrderClient};
use actor_framework::ActorClient;
use serde_json::Value;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    Dishes,
    Dish(&'a str),
    Orders,
    Order(&'a str),
}

impl<'a> Route<'a> {
    fn parse(path: &'a str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.strip_prefix('/')?.split('/');
        let collection = segments.next()?;
        let id = segments.next();
        if segments.next().is_some() {
            return None;
        }
        match (collection, id) {
            ("dishes", None) => Some(Route::Dishes),
            ("dishes", Some(id)) if !id.is_empty() => Some(Route::Dish(id)),
            ("orders", None) => Some(Route::Orders),
            ("orders", Some(id)) if !id.is_empty() => Some(Route::Order(id)),
            _ => None,
        }
    }
}

/// The request router.
#[derive(Clone)]
pub struct Api {
    dishes: DishClient,
    orders: OrderClient,
}

impl Api {
    pub fn new(dishes: DishClient, orders: OrderClient) -> Self {
        Self { dishes, orders }
    }

    /// Dispatches one request. `body` is ignored by operations that take none.
    #[instrument(skip(self, body))]
    pub async fn handle(&self, method: Method, path: &str, body: Value) -> ApiResponse {
        let Some(route) = Route::parse(path) else {
            debug!("No route");
            return ApiResponse::message(404, format!("Path not found: {path}"));
        };

        let response = match (route, method) {
            (Route::Dishes, Method::Get) => ApiResponse::from_result(200, self.dishes.list().await),
            (Route::Dishes, Method::Post) => {
                ApiResponse::from_result(201, self.dishes.create_dish(body).await)
            }
            (Route::Dish(id), Method::Get) => ApiResponse::from_result(200, self.dishes.get(id).await),
            (Route::Dish(id), Method::Put) => {
                ApiResponse::from_result(200, self.dishes.update_dish(id, body).await)
            }
            (Route::Dish(id), Method::Delete) => match self.dishes.delete(id).await {
                Ok(()) => ApiResponse::no_content(),
                Err(e) => ApiResponse::from_error(&e),
            },
            (Route::Orders, Method::Get) => ApiResponse::from_result(200, self.orders.list().await),
            (Route::Orders, Method::Post) => {
                ApiResponse::from_result(201, self.orders.create_order(body).await)
            }
            (Route::Order(id), Method::Get) => ApiResponse::from_result(200, self.orders.get(id).await),
            (Route::Order(id), Method::Put) => {
                ApiResponse::from_result(200, self.orders.update_order(id, body).await)
            }
            (Route::Order(id), Method::Delete) => match self.orders.delete(id).await {
                Ok(()) => ApiResponse::no_content(),
                Err(e) => ApiResponse::from_error(&e),
            },
            (_, method) => ApiResponse::message(405, format!("{method} not allowed for {path}")),
        };

        debug!(status = response.status, "Responded");
        response
    }
}
