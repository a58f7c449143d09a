//! Order-specific pipeline stages.
//!
//! Each function returns a named [`Stage`] over [`Order`]. The line-item stages read the
//! `dishes` value staged by the presence check; the status stages read the order resolved by
//! `EntityExists` and the staged `status` proposal.

use crate::model::{Order, OrderLineItem, OrderStatus};
use actor_framework::pipeline::stage;
use actor_framework::{FrameworkError, RequestContext, Repository, Stage};
use serde_json::Value;

fn staged_dishes(ctx: &RequestContext<Order>) -> Result<&[Value], FrameworkError> {
    OrderLineItem::require_items(ctx.field("dishes").unwrap_or(&Value::Null))
}

/// `dishes` must be a non-empty array.
pub fn dishes_non_empty_array() -> impl Stage<Order> {
    stage(
        "dishes-non-empty-array",
        |ctx: &mut RequestContext<Order>, _: &Repository<Order>| staged_dishes(ctx).map(|_| ()),
    )
}

/// Every line item's quantity must be a positive integer; reports the first bad index.
pub fn dish_quantity_valid() -> impl Stage<Order> {
    stage(
        "dish-quantity-valid",
        |ctx: &mut RequestContext<Order>, _: &Repository<Order>| {
            OrderLineItem::require_quantities(staged_dishes(ctx)?).map(|_| ())
        },
    )
}

/// A delivered order is frozen.
pub fn order_not_delivered() -> impl Stage<Order> {
    stage(
        "order-not-delivered",
        |ctx: &mut RequestContext<Order>, _: &Repository<Order>| match ctx.resolved() {
            Some(order) if !order.status.accepts_updates() => Err(FrameworkError::validation(
                "A delivered order cannot be changed",
            )),
            _ => Ok(()),
        },
    )
}

/// The proposed status must be one of the known values.
pub fn order_status_known() -> impl Stage<Order> {
    stage(
        "order-status-known",
        |ctx: &mut RequestContext<Order>, _: &Repository<Order>| {
            parse_status(ctx.field("status")).map(|_| ())
        },
    )
}

/// Only a pending order may be deleted.
pub fn order_pending() -> impl Stage<Order> {
    stage(
        "order-pending",
        |ctx: &mut RequestContext<Order>, _: &Repository<Order>| match ctx.resolved() {
            Some(order) if !order.status.allows_delete() => Err(FrameworkError::validation(
                "An order cannot be deleted unless it is pending",
            )),
            _ => Ok(()),
        },
    )
}

/// Parses a status value, rejecting non-strings and unknown names alike.
pub fn parse_status(value: Option<&Value>) -> Result<OrderStatus, FrameworkError> {
    let raw = value.and_then(Value::as_str).unwrap_or_default();
    raw.parse::<OrderStatus>()
        .map_err(|e| FrameworkError::validation(e.to_string()))
}
