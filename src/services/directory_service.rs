use serde_json::Value;

use crate::{
    client::ApiClient,
    dto::directory::{HospitalPayload, InstitutePayload, MallPayload, ReviewPayload},
    error::ClientResult,
    models::{Hospital, Institute, Mall},
};

pub async fn list_hospitals(api: &ApiClient) -> ClientResult<Vec<Hospital>> {
    let mut hospitals: Vec<Hospital> = api.get("/hospital/all").await?;
    hospitals.reverse();
    Ok(hospitals)
}

pub async fn get_hospital(api: &ApiClient, id: &str) -> ClientResult<Hospital> {
    api.get(&format!("/hospital/{id}")).await
}

pub async fn create_hospital(api: &ApiClient, payload: &HospitalPayload) -> ClientResult<Value> {
    api.post("/hospital", payload).await
}

pub async fn update_hospital(
    api: &ApiClient,
    id: &str,
    payload: &HospitalPayload,
) -> ClientResult<Value> {
    api.put(&format!("/hospital/{id}"), payload).await
}

pub async fn delete_hospital(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.delete::<Value>(&format!("/hospital/{id}")).await?;
    tracing::info!(id, "hospital deleted");
    Ok(())
}

pub async fn list_malls(api: &ApiClient) -> ClientResult<Vec<Mall>> {
    let mut malls: Vec<Mall> = api.get("/shopping-mall/all").await?;
    malls.reverse();
    Ok(malls)
}

pub async fn get_mall(api: &ApiClient, id: &str) -> ClientResult<Mall> {
    api.get(&format!("/shopping-mall/{id}")).await
}

pub async fn create_mall(api: &ApiClient, payload: &MallPayload) -> ClientResult<Value> {
    api.post("/shopping-mall", payload).await
}

pub async fn update_mall(api: &ApiClient, id: &str, payload: &MallPayload) -> ClientResult<Value> {
    api.put(&format!("/shopping-mall/{id}"), payload).await
}

pub async fn delete_mall(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.delete::<Value>(&format!("/shopping-mall/{id}")).await?;
    tracing::info!(id, "shopping mall deleted");
    Ok(())
}

pub async fn list_institutes(api: &ApiClient) -> ClientResult<Vec<Institute>> {
    api.get("/institute/all").await
}

pub async fn get_institute(api: &ApiClient, id: &str) -> ClientResult<Institute> {
    api.get(&format!("/institute/{id}")).await
}

pub async fn create_institute(api: &ApiClient, payload: &InstitutePayload) -> ClientResult<Value> {
    api.post("/institute", payload).await
}

pub async fn update_institute(
    api: &ApiClient,
    id: &str,
    payload: &InstitutePayload,
) -> ClientResult<Value> {
    api.put(&format!("/institute/{id}"), payload).await
}

pub async fn delete_institute(api: &ApiClient, id: &str) -> ClientResult<()> {
    api.delete::<Value>(&format!("/institute/{id}")).await?;
    tracing::info!(id, "institute deleted");
    Ok(())
}

pub async fn add_review(api: &ApiClient, payload: &ReviewPayload) -> ClientResult<Value> {
    api.post("/review", payload)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "posting review failed"))
}
