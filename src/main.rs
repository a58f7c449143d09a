//! Demo: drives the router through a short dish and order session and prints every
//! response as JSON.

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use dish_orders::api::{Api, ApiResponse, Method};
use dish_orders::lifecycle::{RestaurantSystem, SystemConfig};
use serde_json::{json, Value};
use tracing::{info, Instrument};

async fn call(api: &Api, method: Method, path: &str, body: Value) -> anyhow::Result<ApiResponse> {
    let response = api.handle(method, path, body).await;
    println!(
        "{method} {path} -> {}",
        serde_json::to_string(&response).context("rendering response")?
    );
    Ok(response)
}

fn created_id(response: &ApiResponse) -> anyhow::Result<String> {
    response
        .body
        .as_ref()
        .and_then(|body| body["data"]["id"].as_str())
        .map(str::to_owned)
        .context("response carries no id")
}

async fn menu(api: &Api) -> anyhow::Result<()> {
    call(
        api,
        Method::Post,
        "/dishes",
        json!({ "data": { "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x" } }),
    )
    .await?;
    call(
        api,
        Method::Post,
        "/dishes",
        json!({ "data": { "name": "Bad", "description": "", "price": 5, "image_url": "x" } }),
    )
    .await?;
    call(api, Method::Get, "/dishes", Value::Null).await?;
    Ok(())
}

async fn delivery(api: &Api) -> anyhow::Result<()> {
    let created = call(
        api,
        Method::Post,
        "/orders",
        json!({ "data": { "deliverTo": "A", "mobileNumber": "1", "dishes": [{ "dishId": "d1", "quantity": 2 }] } }),
    )
    .await?;
    let id = created_id(&created)?;
    let path = format!("/orders/{id}");

    call(
        api,
        Method::Put,
        &path,
        json!({ "data": {
            "deliverTo": "A", "mobileNumber": "1", "status": "delivered",
            "dishes": [{ "dishId": "d1", "quantity": 2 }]
        } }),
    )
    .await?;
    call(
        api,
        Method::Put,
        &path,
        json!({ "data": {
            "deliverTo": "B", "mobileNumber": "1", "status": "delivered",
            "dishes": [{ "dishId": "d1", "quantity": 2 }]
        } }),
    )
    .await?;
    Ok(())
}

async fn cancellation(api: &Api) -> anyhow::Result<()> {
    let created = call(
        api,
        Method::Post,
        "/orders",
        json!({ "data": { "deliverTo": "C", "mobileNumber": "2", "dishes": [{ "dishId": "d1", "quantity": 1 }] } }),
    )
    .await?;
    let path = format!("/orders/{}", created_id(&created)?);

    call(
        api,
        Method::Put,
        &path,
        json!({ "data": {
            "deliverTo": "C", "mobileNumber": "2", "status": "preparing",
            "dishes": [{ "dishId": "d1", "quantity": 1 }]
        } }),
    )
    .await?;
    call(api, Method::Delete, &path, Value::Null).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(buffer_size = config.buffer_size, "Starting restaurant system");
    let system = RestaurantSystem::new(&config);

    {
        let api = system.api();
        menu(&api).instrument(tracing::info_span!("menu")).await?;
        delivery(&api).instrument(tracing::info_span!("delivery")).await?;
        cancellation(&api)
            .instrument(tracing::info_span!("cancellation"))
            .await?;
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
