use serde_json::Value;

use crate::{
    client::ApiClient,
    dto::auth::{ChangePasswordRequest, SignupRequest, UpdateUserRequest},
    error::ClientResult,
    models::User,
};

pub async fn list_users(api: &ApiClient) -> ClientResult<Vec<User>> {
    api.get("/auth/all-user").await
}

pub async fn attached_documents(api: &ApiClient, user_id: &str) -> ClientResult<Vec<Value>> {
    api.get(&format!("/docs/user-docs-with-all-users/{user_id}"))
        .await
}

pub async fn sign_up(api: &ApiClient, payload: &SignupRequest) -> ClientResult<Value> {
    let created = api.post("/auth/signup", payload).await?;
    tracing::info!(email = %payload.email, "user created");
    Ok(created)
}

pub async fn change_password(api: &ApiClient, payload: &ChangePasswordRequest) -> ClientResult<()> {
    api.post::<_, Value>("/auth/change-password", payload).await?;
    tracing::info!("password changed");
    Ok(())
}

/// The backend exposes user updates as a POST.
pub async fn update_user(
    api: &ApiClient,
    user_id: &str,
    payload: &UpdateUserRequest,
) -> ClientResult<Value> {
    api.post(&format!("/auth/update-user/{user_id}"), payload).await
}
