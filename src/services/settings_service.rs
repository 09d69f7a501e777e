use serde_json::Value;

use crate::{client::ApiClient, dto::auth::UpdatePasswordRequest, error::ClientResult};

pub async fn update_password(api: &ApiClient, payload: &UpdatePasswordRequest) -> ClientResult<Value> {
    api.post("/auth/update-password", payload).await
}
