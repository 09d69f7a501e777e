use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A product's category arrives either populated or as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Embedded(Category),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub low_quantity_threshold: i64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl Product {
    pub fn is_low_quantity(&self) -> bool {
        self.quantity < self.low_quantity_threshold
    }

    /// Size as shown in tables; blank and missing sizes read as `N/A`.
    pub fn display_size(&self) -> &str {
        match self.size.as_deref() {
            Some(size) if !size.trim().is_empty() => size,
            _ => "N/A",
        }
    }

    /// Only a populated category has a title to show.
    pub fn category_title(&self) -> &str {
        match &self.category {
            Some(CategoryRef::Embedded(category)) => &category.title,
            _ => "No category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockKind {
    In,
    Out,
}

impl StockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockKind::In => "in",
            StockKind::Out => "out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockKind::In => "stock-in",
            StockKind::Out => "stock-out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductLink {
    Populated(ProductSummary),
    Id(String),
}

impl ProductLink {
    pub fn title(&self) -> &str {
        match self {
            ProductLink::Populated(p) => &p.title,
            ProductLink::Id(id) => id,
        }
    }

    pub fn size(&self) -> Option<&str> {
        match self {
            ProductLink::Populated(p) => p.size.as_deref().filter(|s| !s.is_empty()),
            ProductLink::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VendorLink {
    Populated(VendorSummary),
    Id(String),
}

impl VendorLink {
    pub fn name(&self) -> &str {
        match self {
            VendorLink::Populated(v) => &v.name,
            VendorLink::Id(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLog {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StockKind,
    pub product_id: ProductLink,
    pub vendor_id: VendorLink,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(default)]
    pub warehouse: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl StockLog {
    /// Receiver for stock-in, sender for stock-out.
    pub fn counterpart(&self) -> &str {
        let name = match self.kind {
            StockKind::In => &self.receiver_name,
            StockKind::Out => &self.sender_name,
        };
        name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewUser {
    Populated(ReviewAuthor),
    Id(String),
}

impl ReviewUser {
    pub fn display_name(&self) -> String {
        match self {
            ReviewUser::Populated(a) => format!("{} {}", a.firstname, a.lastname).trim().to_string(),
            ReviewUser::Id(id) => id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub user: ReviewUser,
    #[serde(default)]
    pub comment: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub rating: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalOther {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub doctors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub hospital_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub other: HospitalOther,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MallOther {
    #[serde(default)]
    pub outlets: Vec<String>,
    #[serde(default)]
    pub food_courts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mall {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub shopping_mall_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub other: MallOther,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstituteOther {
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub faculty: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub institution_name: String,
    #[serde(default)]
    pub institution_type: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub other: InstituteOther,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Superadmin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "user" => Role::User,
            "superadmin" => Role::Superadmin,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Superadmin => "superadmin",
            Role::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::User
}

/// Records the dashboard lists and edits without interpreting their fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

pub type Order = Document;
pub type FormSubmission = Document;
pub type Profile = Document;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
    Null,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.as_f64().unwrap_or_default()),
        NumberOrString::Text(s) if s.trim().is_empty() => Ok(0.0),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        NumberOrString::Null => Ok(0.0),
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default()),
        NumberOrString::Text(s) if s.trim().is_empty() => Ok(0),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        NumberOrString::Null => Ok(0),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::Text(s) => Ok(s),
        NumberOrString::Null => Ok(String::new()),
    }
}
