use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, HospitalOther, InstituteOther, MallOther};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalPayload {
    pub hospital_name: String,
    pub country: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub created_by: Option<String>,
    pub photo: String,
    pub other: HospitalOther,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MallPayload {
    pub shopping_mall_name: String,
    pub country: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub created_by: Option<String>,
    pub photo: String,
    pub other: MallOther,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutePayload {
    pub institution_name: String,
    pub institution_type: String,
    pub country: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub created_by: Option<String>,
    pub photo: String,
    pub other: InstituteOther,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewTarget {
    Hospital,
    Shopping,
    Institute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub user: String,
    pub comment: String,
    pub rating: u8,
    pub id: String,
    #[serde(rename = "type")]
    pub target: ReviewTarget,
}
