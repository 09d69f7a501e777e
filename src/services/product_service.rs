use serde_json::Value;

use crate::{
    client::ApiClient,
    dto::products::ProductPayload,
    error::ClientResult,
    models::Product,
};

/// All products, newest first.
pub async fn list_products(api: &ApiClient) -> ClientResult<Vec<Product>> {
    let mut products: Vec<Product> = api
        .get("/products")
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching products failed"))?;
    products.reverse();
    Ok(products)
}

pub async fn list_low_quantity_products(api: &ApiClient) -> ClientResult<Vec<Product>> {
    api.get("/products/low-quantity")
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching low quantity products failed"))
}

pub async fn create_product(api: &ApiClient, payload: &ProductPayload) -> ClientResult<Value> {
    api.post("/products", payload).await
}

pub async fn update_product(
    api: &ApiClient,
    id: &str,
    payload: &ProductPayload,
) -> ClientResult<Value> {
    api.put(&format!("/products/{id}"), payload).await
}

pub async fn delete_product(api: &ApiClient, id: &str) -> ClientResult<Value> {
    api.delete(&format!("/products/{id}")).await
}
