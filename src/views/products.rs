use async_trait::async_trait;

use crate::{
    client::ApiClient,
    dto::products::ProductPayload,
    error::ClientResult,
    forms::{FormSchema, FormValues, schemas},
    models::Product,
    services::product_service,
};

use super::{
    resources::{CrudResource, FormBinding, FormContext},
    table::{TableView, format_number},
};

const NO_SIZE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductFilter {
    #[default]
    All,
    LowQuantity,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Products {
    pub filter: ProductFilter,
}

impl Products {
    pub fn new(filter: ProductFilter) -> Self {
        Self { filter }
    }
}

#[async_trait]
impl CrudResource for Products {
    type Record = Product;
    type Draft = ProductPayload;

    fn label(&self) -> &'static str {
        "Product"
    }

    fn record_id<'a>(&self, record: &'a Product) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<Product>> {
        match self.filter {
            ProductFilter::All => product_service::list_products(api).await,
            ProductFilter::LowQuantity => product_service::list_low_quantity_products(api).await,
        }
    }

    async fn create(&self, api: &ApiClient, draft: &ProductPayload) -> ClientResult<()> {
        product_service::create_product(api, draft).await.map(drop)
    }

    async fn update(&self, api: &ApiClient, id: &str, draft: &ProductPayload) -> ClientResult<()> {
        product_service::update_product(api, id, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        product_service::delete_product(api, id).await.map(drop)
    }
}

impl TableView for Products {
    fn columns(&self) -> &'static [&'static str] {
        &["Title", "Size", "Description", "Category", "Price", "Quantity", "LQT"]
    }

    fn cells(&self, record: &Product) -> Vec<String> {
        vec![
            record.title.clone(),
            record.display_size().to_string(),
            record.description.clone(),
            record.category_title().to_string(),
            format_number(record.price),
            record.quantity.to_string(),
            record.low_quantity_threshold.to_string(),
        ]
    }

    /// The low-quantity view already holds only low rows, so nothing blinks there.
    fn is_flagged(&self, record: &Product) -> bool {
        self.filter == ProductFilter::All && record.is_low_quantity()
    }
}

impl FormBinding for Products {
    fn schema(&self) -> FormSchema {
        schemas::product()
    }

    fn prefill(&self, record: &Product) -> FormValues {
        let size = match record.size.as_deref() {
            Some(NO_SIZE) | None => "",
            Some(size) => size,
        };
        FormValues::new()
            .with_text("title", record.title.clone())
            .with_text("desc", record.description.clone())
            .with_text("size", size)
            .with_text("price", format_number(record.price))
            .with_text("quantity", record.quantity.to_string())
            .with_text("lowQuantityThreshold", record.low_quantity_threshold.to_string())
            .with_hosted_images("images", &record.images)
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> ProductPayload {
        let size = values.text("size").trim();
        ProductPayload {
            title: values.text("title").trim().to_string(),
            desc: values.text("desc").trim().to_string(),
            images: values.hosted_urls("images"),
            price: values.f64("price").unwrap_or_default(),
            quantity: values.i64("quantity").unwrap_or_default(),
            low_quantity_threshold: values.i64("lowQuantityThreshold").unwrap_or_default(),
            size: if size.is_empty() { NO_SIZE } else { size }.to_string(),
        }
    }
}
