use serde_json::Value;

use crate::{client::ApiClient, dto::products::VendorPayload, error::ClientResult, models::Vendor};

pub async fn list_vendors(api: &ApiClient) -> ClientResult<Vec<Vendor>> {
    api.get("/vendors")
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching vendors failed"))
}

pub async fn create_vendor(api: &ApiClient, payload: &VendorPayload) -> ClientResult<Value> {
    api.post("/vendors", payload).await
}

pub async fn update_vendor(api: &ApiClient, id: &str, payload: &VendorPayload) -> ClientResult<Value> {
    api.put(&format!("/vendors/{id}"), payload).await
}

pub async fn delete_vendor(api: &ApiClient, id: &str) -> ClientResult<Value> {
    api.delete(&format!("/vendors/{id}")).await
}
