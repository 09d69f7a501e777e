use serde_json::Value;

use crate::{client::ApiClient, dto::orders::UpdateOrderRequest, error::ClientResult, models::Order};

pub async fn list_orders(api: &ApiClient) -> ClientResult<Vec<Order>> {
    api.get("/all/orders").await
}

pub async fn get_order(api: &ApiClient, id: &str) -> ClientResult<Order> {
    api.get(&format!("/order/{id}")).await
}

pub async fn update_order(api: &ApiClient, id: &str, payload: &UpdateOrderRequest) -> ClientResult<Value> {
    api.put(&format!("/order/{id}"), payload).await
}

pub async fn delete_order(api: &ApiClient, id: &str) -> ClientResult<Value> {
    api.delete(&format!("/order/{id}")).await
}
