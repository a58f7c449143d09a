use actor_framework::{id, ActorClient};
use dish_orders::clients::OrderClient;
use dish_orders::model::{OrderLineItem, OrderStatus};
use dish_orders::order_actor::{self, OrderError};
use serde_json::{json, Value};

/// A real Order actor behind its typed client, with deterministic ids.
fn spawn_orders() -> OrderClient {
    let (actor, client) = order_actor::with_id_generator(10, id::sequential("order"));
    tokio::spawn(actor.run());
    OrderClient::new(client)
}

fn body(data: Value) -> Value {
    json!({ "data": data })
}

fn full_update(status: &str) -> Value {
    body(json!({
        "deliverTo": "A",
        "mobileNumber": "1",
        "status": status,
        "dishes": [{ "dishId": "d1", "quantity": 2 }]
    }))
}

#[tokio::test]
async fn test_create_forces_pending_status() {
    let client = spawn_orders();

    let order = client
        .create_order(body(json!({
            "deliverTo": "A",
            "mobileNumber": "1",
            "status": "delivered",
            "dishes": [{ "dishId": "d1", "quantity": 2 }]
        })))
        .await
        .unwrap();

    assert_eq!(order.id, "order_1");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.dishes, vec![OrderLineItem::new("d1", 2)]);
    assert_eq!(client.get("order_1").await.unwrap(), order);
}

#[tokio::test]
async fn test_line_item_dish_id_is_not_validated() {
    let client = spawn_orders();

    let order = client
        .create_order(body(json!({
            "deliverTo": "A",
            "mobileNumber": "1",
            "dishes": [{ "quantity": 2 }]
        })))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.dishes[0].dish_id, None);
    assert_eq!(order.dishes[0].quantity, 2);

    let order = client
        .create_order(body(json!({
            "deliverTo": "A",
            "mobileNumber": "1",
            "dishes": [{ "dishId": 7, "quantity": 1 }]
        })))
        .await
        .unwrap();
    assert_eq!(order.dishes, vec![OrderLineItem::new(7, 1)]);

    let updated = client
        .update_order(
            &order.id,
            body(json!({
                "deliverTo": "A",
                "mobileNumber": "1",
                "status": "preparing",
                "dishes": [{ "quantity": 4 }]
            })),
        )
        .await
        .unwrap();
    assert_eq!(updated.dishes[0].dish_id, None);
    assert_eq!(updated.dishes[0].quantity, 4);
}

#[tokio::test]
async fn test_create_validation_messages() {
    let client = spawn_orders();

    let cases = [
        (json!({ "mobileNumber": "1", "dishes": [] }), "Order must include a deliverTo"),
        (json!({ "deliverTo": "A", "dishes": [] }), "Order must include a mobileNumber"),
        (json!({ "deliverTo": "A", "mobileNumber": "1" }), "Order must include a dish"),
        (
            json!({ "deliverTo": "A", "mobileNumber": "1", "dishes": [] }),
            "Order must include at least one dish",
        ),
        (
            json!({ "deliverTo": "A", "mobileNumber": "1", "dishes": { "dishId": "d1" } }),
            "Order must include at least one dish",
        ),
        (
            json!({ "deliverTo": "A", "mobileNumber": "1", "dishes": [{ "dishId": "d1", "quantity": 1 }, { "dishId": "d2", "quantity": 0 }] }),
            "Dish 1 must have a quantity that is an integer greater than 0",
        ),
        (
            json!({ "deliverTo": "A", "mobileNumber": "1", "dishes": [{ "dishId": "d1", "quantity": 1.5 }] }),
            "Dish 0 must have a quantity that is an integer greater than 0",
        ),
    ];

    for (data, message) in cases {
        let err = client.create_order(body(data)).await.unwrap_err();
        assert_eq!(err, OrderError::ValidationError(message.into()));
    }

    // Malformed bodies read as empty data.
    for malformed in [json!(null), json!("orders"), json!({ "data": [1] })] {
        let err = client.create_order(malformed).await.unwrap_err();
        assert_eq!(err, OrderError::ValidationError("Order must include a deliverTo".into()));
    }

    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_status_walks_through_lifecycle() {
    let client = spawn_orders();
    client.create_order(full_update("pending")).await.unwrap();

    for status in ["preparing", "out-for-delivery", "pending", "delivered"] {
        let order = client.update_order("order_1", full_update(status)).await.unwrap();
        assert_eq!(order.status.as_str(), status);
    }

    let err = client.update_order("order_1", full_update("preparing")).await.unwrap_err();
    assert_eq!(err, OrderError::ValidationError("A delivered order cannot be changed".into()));
}

#[tokio::test]
async fn test_update_rejections_leave_order_unchanged() {
    let client = spawn_orders();
    let original = client.create_order(full_update("pending")).await.unwrap();

    let err = client.update_order("order_1", full_update("cancelled")).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::ValidationError(
            "Order must have a status of pending, preparing, out-for-delivery, delivered".into()
        )
    );

    let mut mismatched = full_update("preparing");
    mismatched["data"]["id"] = json!("order_2");
    let err = client.update_order("order_1", mismatched).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::ValidationError(
            "Order id does not match route id. Order: order_2, Route: order_1".into()
        )
    );

    let err = client
        .update_order(
            "order_1",
            body(json!({ "deliverTo": "A", "mobileNumber": "1", "dishes": [{ "dishId": "d1", "quantity": 2 }] })),
        )
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::ValidationError("Order must include a status".into()));

    assert_eq!(client.get("order_1").await.unwrap(), original);
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let client = spawn_orders();

    let err = client.update_order("order_7", full_update("pending")).await.unwrap_err();
    assert_eq!(err, OrderError::NotFound("Order does not exist: order_7.".into()));
    assert_eq!(err.status_code(), 404);

    assert_eq!(client.delete("order_7").await.unwrap_err().status_code(), 404);
    assert_eq!(client.get("order_7").await.unwrap_err().status_code(), 404);
}

#[tokio::test]
async fn test_delete_requires_pending() {
    let client = spawn_orders();
    client.create_order(full_update("pending")).await.unwrap();
    client.create_order(full_update("pending")).await.unwrap();

    client.update_order("order_1", full_update("out-for-delivery")).await.unwrap();
    let err = client.delete("order_1").await.unwrap_err();
    assert_eq!(
        err,
        OrderError::ValidationError("An order cannot be deleted unless it is pending".into())
    );

    client.delete("order_2").await.unwrap();
    let remaining: Vec<String> = client.list().await.unwrap().into_iter().map(|o| o.id).collect();
    assert_eq!(remaining, vec!["order_1".to_string()]);
}
