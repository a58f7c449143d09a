//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod dish;
pub mod order;
pub mod order_status;

pub use dish::*;
pub use order::*;
pub use order_status::*;
