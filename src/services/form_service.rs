use serde_json::Value;

use crate::{client::ApiClient, dto::orders::UpdateFormRequest, error::ClientResult, models::FormSubmission};

pub async fn list_forms(api: &ApiClient) -> ClientResult<Vec<FormSubmission>> {
    api.get("/all/forms").await
}

pub async fn update_form(api: &ApiClient, id: &str, payload: &UpdateFormRequest) -> ClientResult<Value> {
    api.put(&format!("/form/{id}"), payload).await
}

pub async fn delete_form(api: &ApiClient, id: &str) -> ClientResult<Value> {
    api.delete(&format!("/form/{id}")).await
}
