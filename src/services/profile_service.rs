use crate::{client::ApiClient, error::ClientResult, models::Profile};

pub async fn get_profile(api: &ApiClient, user_id: &str) -> ClientResult<Profile> {
    api.get(&format!("/profile/{user_id}")).await
}
