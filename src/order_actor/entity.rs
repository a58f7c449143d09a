//! Entity trait implementation for the Order domain type.

use super::stages::{
    dish_quantity_valid, dishes_non_empty_array, order_not_delivered, order_pending,
    order_status_known, parse_status,
};
use crate::model::{Order, OrderLineItem, OrderStatus};
use actor_framework::pipeline::string_in;
use actor_framework::stages::{EntityExists, FieldPresent, NonEmptyString, RouteBodyIdMatch};
use actor_framework::{ActorEntity, FrameworkError, Payload, Pipeline, RequestContext};
use serde_json::Value;

fn line_item_stages(pipeline: Pipeline<Order>) -> Pipeline<Order> {
    pipeline
        .then(dishes_non_empty_array())
        .then(dish_quantity_valid())
}

impl ActorEntity for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }

    fn create_pipeline() -> Pipeline<Self> {
        let pipeline = Pipeline::new()
            .then(FieldPresent::new("deliverTo"))
            .then(FieldPresent::new("mobileNumber"))
            .then(FieldPresent::new("dishes").with_message("Order must include a dish"))
            .then(NonEmptyString::new("deliverTo"))
            .then(NonEmptyString::new("mobileNumber"));
        line_item_stages(pipeline)
    }

    fn update_pipeline() -> Pipeline<Self> {
        let pipeline = Pipeline::new()
            .then(EntityExists)
            .then(RouteBodyIdMatch)
            .then(FieldPresent::new("deliverTo"))
            .then(FieldPresent::new("mobileNumber"))
            .then(FieldPresent::new("status"))
            .then(FieldPresent::new("dishes").with_message("Order must include a dish"))
            .then(NonEmptyString::new("deliverTo"))
            .then(NonEmptyString::new("mobileNumber"))
            .then(order_not_delivered())
            .then(order_status_known());
        line_item_stages(pipeline)
    }

    fn delete_pipeline() -> Pipeline<Self> {
        Pipeline::new().then(EntityExists).then(order_pending())
    }

    /// New orders start `pending`; a supplied status is ignored.
    fn from_create_context(id: String, ctx: &RequestContext<Self>) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            deliver_to: ctx.string_field("deliverTo")?,
            mobile_number: ctx.string_field("mobileNumber")?,
            status: OrderStatus::Pending,
            dishes: OrderLineItem::parse_all(ctx.field("dishes").unwrap_or(&Value::Null))?,
        })
    }

    fn apply_update(&mut self, data: &Payload) -> Result<(), FrameworkError> {
        self.deliver_to = string_in::<Self>(data, "deliverTo")?;
        self.mobile_number = string_in::<Self>(data, "mobileNumber")?;
        self.status = parse_status(data.get("status"))?;
        self.dishes = OrderLineItem::parse_all(data.get("dishes").unwrap_or(&Value::Null))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::Repository;
    use serde_json::json;

    fn stored(status: OrderStatus) -> Repository<Order> {
        let mut repo = Repository::new();
        repo.insert(Order {
            id: "o1".into(),
            deliver_to: "A".into(),
            mobile_number: "1".into(),
            status,
            dishes: vec![OrderLineItem::new("d1", 1)],
        });
        repo
    }

    fn run_update(repo: &Repository<Order>, route: &str, data: Value) -> Result<Order, FrameworkError> {
        let mut ctx = RequestContext::new(Some(route.into()), json!({ "data": data }));
        Order::update_pipeline().run(&mut ctx, repo)?;
        let mut order = ctx.take_resolved().expect("resolved by entity-exists");
        order.apply_update(ctx.data())?;
        Ok(order)
    }

    #[test]
    fn test_create_forces_pending() {
        let mut ctx = RequestContext::new(
            None,
            json!({ "data": {
                "deliverTo": "A", "mobileNumber": "1", "status": "delivered",
                "dishes": [{ "dishId": "d1", "quantity": 2 }]
            }}),
        );
        Order::create_pipeline().run(&mut ctx, &Repository::new()).unwrap();
        let order = Order::from_create_context("o9".into(), &ctx).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.dishes, vec![OrderLineItem::new("d1", 2)]);
    }

    #[test]
    fn test_create_missing_dishes_message() {
        for dishes in [json!(null), json!(0), json!("")] {
            let mut ctx = RequestContext::new(
                None,
                json!({ "data": { "deliverTo": "A", "mobileNumber": "1", "dishes": dishes } }),
            );
            assert_eq!(
                Order::create_pipeline().run(&mut ctx, &Repository::new()).unwrap_err(),
                FrameworkError::validation("Order must include a dish")
            );
        }
    }

    #[test]
    fn test_update_checks_existence_first() {
        let err = run_update(&stored(OrderStatus::Pending), "o2", json!({})).unwrap_err();
        assert_eq!(err, FrameworkError::not_found("Order does not exist: o2."));
    }

    #[test]
    fn test_update_requires_status() {
        let err = run_update(
            &stored(OrderStatus::Pending),
            "o1",
            json!({ "deliverTo": "B", "mobileNumber": "2", "dishes": [{ "dishId": "d1", "quantity": 1 }] }),
        )
        .unwrap_err();
        assert_eq!(err, FrameworkError::validation("Order must include a status"));
    }

    #[test]
    fn test_delivered_rule_precedes_status_rule() {
        let err = run_update(
            &stored(OrderStatus::Delivered),
            "o1",
            json!({
                "deliverTo": "B", "mobileNumber": "2", "status": "bogus",
                "dishes": [{ "dishId": "d1", "quantity": 1 }]
            }),
        )
        .unwrap_err();
        assert_eq!(err, FrameworkError::validation("A delivered order cannot be changed"));
    }

    #[test]
    fn test_update_replaces_attributes() {
        let order = run_update(
            &stored(OrderStatus::Pending),
            "o1",
            json!({
                "id": "o1", "deliverTo": "B", "mobileNumber": "2", "status": "out-for-delivery",
                "dishes": [{ "dishId": "d2", "quantity": 3 }]
            }),
        )
        .unwrap();
        assert_eq!(order.id, "o1");
        assert_eq!(order.deliver_to, "B");
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.dishes, vec![OrderLineItem::new("d2", 3)]);
    }

    #[test]
    fn test_delete_requires_pending() {
        let mut ctx = RequestContext::new(Some("o1".into()), Value::Null);
        assert_eq!(
            Order::delete_pipeline()
                .run(&mut ctx, &stored(OrderStatus::Preparing))
                .unwrap_err(),
            FrameworkError::validation("An order cannot be deleted unless it is pending")
        );

        let mut ctx = RequestContext::new(Some("o1".into()), Value::Null);
        assert!(Order::delete_pipeline()
            .run(&mut ctx, &stored(OrderStatus::Pending))
            .is_ok());
    }
}
