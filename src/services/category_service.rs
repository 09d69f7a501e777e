use serde_json::Value;

use crate::{client::ApiClient, dto::products::CategoryPayload, error::ClientResult, models::Category};

pub async fn list_categories(api: &ApiClient) -> ClientResult<Vec<Category>> {
    api.get("/all/category")
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching categories failed"))
}

pub async fn get_category(api: &ApiClient, id: &str) -> ClientResult<Category> {
    api.get(&format!("/category/{id}")).await
}

pub async fn create_category(api: &ApiClient, payload: &CategoryPayload) -> ClientResult<Value> {
    api.post("/category", payload).await
}

pub async fn update_category(
    api: &ApiClient,
    id: &str,
    payload: &CategoryPayload,
) -> ClientResult<Value> {
    api.put(&format!("/category/{id}"), payload).await
}

pub async fn delete_category(api: &ApiClient, id: &str) -> ClientResult<Value> {
    api.delete(&format!("/category/{id}")).await
}
