use serde::{Deserialize, Serialize};

/// Body for `/stock-in` and `/stock-out`; only the matching person field is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPayload {
    pub product_id: String,
    pub vendor_id: String,
    pub warehouse: String,
    pub quantity: i64,
    pub remarks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    pub images: Vec<String>,
}
