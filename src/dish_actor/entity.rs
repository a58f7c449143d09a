//! Entity trait implementation for the Dish domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables [`Dish`] to be
//! managed by the generic [`ResourceActor`](actor_framework::ResourceActor).

use crate::model::Dish;
use actor_framework::pipeline::{positive_integer_in, string_in};
use actor_framework::stages::{EntityExists, FieldPresent, NonEmptyString, PositiveInteger, RouteBodyIdMatch};
use actor_framework::{ActorEntity, FrameworkError, Payload, Pipeline, RequestContext};

const REQUIRED: [&str; 4] = ["name", "description", "price", "image_url"];
const TEXT: [&str; 3] = ["name", "description", "image_url"];

/// Presence of every field, then shape checks on each.
fn attribute_stages(mut pipeline: Pipeline<Dish>) -> Pipeline<Dish> {
    for field in REQUIRED {
        pipeline = pipeline.then(FieldPresent::new(field));
    }
    for field in TEXT {
        pipeline = pipeline.then(NonEmptyString::new(field));
    }
    pipeline.then(PositiveInteger::new("price"))
}

impl ActorEntity for Dish {
    const KIND: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }

    /// presence(name, description, price, image_url) → non-empty(name, description,
    /// image_url) → positive-integer(price)
    fn create_pipeline() -> Pipeline<Self> {
        attribute_stages(Pipeline::new())
    }

    /// entity-exists → the create checks → route-body-id-match
    fn update_pipeline() -> Pipeline<Self> {
        attribute_stages(Pipeline::new().then(EntityExists)).then(RouteBodyIdMatch)
    }

    fn from_create_context(id: String, ctx: &RequestContext<Self>) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: ctx.string_field("name")?,
            description: ctx.string_field("description")?,
            price: ctx.positive_integer_field("price")?,
            image_url: ctx.string_field("image_url")?,
        })
    }

    fn apply_update(&mut self, data: &Payload) -> Result<(), FrameworkError> {
        self.name = string_in::<Self>(data, "name")?;
        self.description = string_in::<Self>(data, "description")?;
        self.price = positive_integer_in::<Self>(data, "price")?;
        self.image_url = string_in::<Self>(data, "image_url")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::Repository;
    use serde_json::{json, Value};

    fn taco() -> Dish {
        Dish {
            id: "d1".into(),
            name: "Taco".into(),
            description: "Spicy".into(),
            price: 5,
            image_url: "x".into(),
        }
    }

    fn run_create(data: Value) -> Result<Dish, FrameworkError> {
        let mut ctx = RequestContext::new(None, json!({ "data": data }));
        Dish::create_pipeline().run(&mut ctx, &Repository::new())?;
        Dish::from_create_context("d1".into(), &ctx)
    }

    #[test]
    fn test_pipeline_shapes() {
        assert_eq!(
            Dish::create_pipeline().stage_names(),
            vec![
                "field-present",
                "field-present",
                "field-present",
                "field-present",
                "non-empty-string",
                "non-empty-string",
                "non-empty-string",
                "positive-integer",
            ]
        );
        let update = Dish::update_pipeline().stage_names();
        assert_eq!(update.first(), Some(&"entity-exists"));
        assert_eq!(update.last(), Some(&"route-body-id-match"));
    }

    #[test]
    fn test_create_builds_dish() {
        let dish = run_create(json!({
            "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x"
        }))
        .unwrap();
        assert_eq!(dish, taco());
    }

    #[test]
    fn test_create_reports_first_failure() {
        let err = run_create(json!({ "name": "Bad", "description": "", "price": 5, "image_url": "x" }))
            .unwrap_err();
        assert_eq!(err, FrameworkError::validation("Dish must include a description"));

        // Presence of every field is checked before any shape check.
        let err = run_create(json!({ "name": 7, "description": "d", "price": -2 })).unwrap_err();
        assert_eq!(err, FrameworkError::validation("Dish must include a image_url"));

        let err = run_create(json!({ "name": 7, "description": "d", "price": -2, "image_url": "x" }))
            .unwrap_err();
        assert_eq!(err, FrameworkError::validation("Dish must include a name"));

        let err = run_create(json!({ "name": "n", "description": "d", "price": "5", "image_url": "x" }))
            .unwrap_err();
        assert_eq!(
            err,
            FrameworkError::validation("Dish must have a price that is an integer greater than 0")
        );
    }

    #[test]
    fn test_zero_price_reads_as_missing() {
        let err = run_create(json!({ "name": "n", "description": "d", "price": 0, "image_url": "x" }))
            .unwrap_err();
        assert_eq!(err, FrameworkError::validation("Dish must include a price"));
    }

    #[test]
    fn test_apply_update_overwrites_every_field() {
        let mut dish = taco();
        let data = json!({ "name": "Burrito", "description": "Big", "price": 9, "image_url": "y" });
        dish.apply_update(data.as_object().unwrap()).unwrap();
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Burrito");
        assert_eq!(dish.price, 9);
        assert_eq!(dish.image_url, "y");
    }
}
