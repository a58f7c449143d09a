use crate::model::OrderStatus;
use actor_framework::stages::as_positive_integer;
use actor_framework::FrameworkError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// An order always carries at least one [`OrderLineItem`]. Its [`OrderStatus`] starts at
/// `pending` and governs whether the order may still be changed or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLineItem>,
}

/// One dish reference and how many of it were ordered.
///
/// `dish_id` is a plain reference kept exactly as supplied (absent, string or otherwise);
/// nothing checks it against the catalog, and deleting the dish leaves existing orders
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<Value>,
    pub quantity: u64,
}

impl OrderLineItem {
    pub fn new(dish_id: impl Into<Value>, quantity: u64) -> Self {
        Self {
            dish_id: Some(dish_id.into()),
            quantity,
        }
    }

    /// The `dishes` value as a non-empty array.
    pub fn require_items(value: &Value) -> Result<&[Value], FrameworkError> {
        match value {
            Value::Array(items) if !items.is_empty() => Ok(items.as_slice()),
            _ => Err(FrameworkError::validation("Order must include at least one dish")),
        }
    }

    /// Every item's quantity, or an error naming the 0-based index of the first offender.
    pub fn require_quantities(items: &[Value]) -> Result<Vec<u64>, FrameworkError> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.get("quantity")
                    .and_then(as_positive_integer)
                    .ok_or_else(|| {
                        FrameworkError::validation(format!(
                            "Dish {index} must have a quantity that is an integer greater than 0"
                        ))
                    })
            })
            .collect()
    }

    /// Parses the `dishes` array of a request. Only quantities are validated.
    pub fn parse_all(value: &Value) -> Result<Vec<Self>, FrameworkError> {
        let items = Self::require_items(value)?;
        let quantities = Self::require_quantities(items)?;
        Ok(items
            .iter()
            .zip(quantities)
            .map(|(item, quantity)| Self {
                dish_id: item.get("dishId").cloned(),
                quantity,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_all_reads_items_in_order() {
        let items = OrderLineItem::parse_all(&json!([
            { "dishId": "d1", "quantity": 2 },
            { "dishId": "d2", "quantity": 1.0 }
        ]))
        .unwrap();
        assert_eq!(items, vec![OrderLineItem::new("d1", 2), OrderLineItem::new("d2", 1)]);
    }

    #[test]
    fn test_parse_all_reports_first_bad_quantity() {
        for bad in [json!(0), json!(-1), json!(1.5), json!("2"), json!(null)] {
            let err = OrderLineItem::parse_all(&json!([
                { "dishId": "d1", "quantity": 1 },
                { "dishId": "d2", "quantity": bad },
                { "dishId": "d3", "quantity": 0 }
            ]))
            .unwrap_err();
            assert_eq!(
                err,
                FrameworkError::validation("Dish 1 must have a quantity that is an integer greater than 0")
            );
        }
    }

    #[test]
    fn test_dish_id_is_carried_as_supplied() {
        let items = OrderLineItem::parse_all(&json!([
            { "quantity": 2 },
            { "dishId": 7, "quantity": 1 }
        ]))
        .unwrap();
        assert_eq!(items[0].dish_id, None);
        assert_eq!(items[1].dish_id, Some(json!(7)));
        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            json!([{ "quantity": 2 }, { "dishId": 7, "quantity": 1 }])
        );
    }

    #[test]
    fn test_parse_all_rejects_empty_or_non_array() {
        for bad in [json!([]), json!({}), json!("d1"), json!(3)] {
            assert_eq!(
                OrderLineItem::parse_all(&bad).unwrap_err(),
                FrameworkError::validation("Order must include at least one dish")
            );
        }
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: "o1".into(),
            deliver_to: "A".into(),
            mobile_number: "1".into(),
            status: OrderStatus::OutForDelivery,
            dishes: vec![OrderLineItem::new("d1", 2)],
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": "o1",
                "deliverTo": "A",
                "mobileNumber": "1",
                "status": "out-for-delivery",
                "dishes": [{ "dishId": "d1", "quantity": 2 }]
            })
        );
    }
}
