use serde::{Deserialize, Serialize};

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for the pipelines that
/// gate creation and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole currency units, always > 0.
    pub price: u64,
    pub image_url: String,
}
