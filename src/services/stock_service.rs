use serde_json::Value;

use crate::{
    client::ApiClient,
    dto::stocks::StockPayload,
    error::ClientResult,
    models::{StockKind, StockLog},
};

/// Every log lives in one collection; the server has no per-type listing.
pub async fn list_stock_logs(api: &ApiClient) -> ClientResult<Vec<StockLog>> {
    api.get("/stock/all").await
}

/// Logs of one kind, newest first.
pub async fn list_logs_of_kind(api: &ApiClient, kind: StockKind) -> ClientResult<Vec<StockLog>> {
    let logs = list_stock_logs(api)
        .await
        .inspect_err(|err| tracing::error!(error = %err, kind = kind.label(), "fetching stock logs failed"))?;
    Ok(logs.into_iter().filter(|log| log.kind == kind).rev().collect())
}

pub async fn create_stock_log(
    api: &ApiClient,
    kind: StockKind,
    payload: &StockPayload,
) -> ClientResult<Value> {
    let path = match kind {
        StockKind::In => "/stock-in",
        StockKind::Out => "/stock-out",
    };
    api.post(path, payload).await
}

pub async fn delete_stock_log(api: &ApiClient, id: &str) -> ClientResult<Value> {
    api.delete(&format!("/stock/{id}")).await
}
