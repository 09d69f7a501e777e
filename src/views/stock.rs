use async_trait::async_trait;
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc, Weekday};

use crate::{
    client::ApiClient,
    dto::stocks::StockPayload,
    error::ClientResult,
    forms::{ChoiceOptions, FormSchema, FormValues, schemas},
    models::{ProductLink, StockKind, StockLog, VendorLink},
    notify::Toast,
    services::{product_service, stock_service, vendor_service},
    state::AppState,
};

use super::{
    listing::ListingScreen,
    modal::FormModal,
    resources::{CrudResource, FormBinding, FormContext},
    table::{TableRow, TableView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    /// Sunday through Saturday.
    Week,
    Month,
    Year,
    CustomMonth { year: i32, month: u32 },
}

impl DateFilter {
    pub fn label(&self) -> String {
        match self {
            DateFilter::All => "All".into(),
            DateFilter::Today => "Today".into(),
            DateFilter::Week => "This Week".into(),
            DateFilter::Month => "This Month".into(),
            DateFilter::Year => "This Year".into(),
            DateFilter::CustomMonth { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .map(|d| d.format("%b-%Y").to_string())
                .unwrap_or_default(),
        }
    }

    /// Whether a log dated `date` passes, judged on its UTC calendar day.
    pub fn matches(&self, date: DateTime<Utc>, today: NaiveDate) -> bool {
        let day = date.date_naive();
        match *self {
            DateFilter::All => true,
            DateFilter::Today => day == today,
            DateFilter::Week => {
                let week = today.week(Weekday::Sun);
                day >= week.first_day() && day <= week.last_day()
            }
            DateFilter::Month => day.year() == today.year() && day.month() == today.month(),
            DateFilter::Year => day.year() == today.year(),
            DateFilter::CustomMonth { year, month } => day.year() == year && day.month() == month,
        }
    }

    pub fn apply<'a>(&self, logs: &'a [StockLog], today: NaiveDate) -> Vec<&'a StockLog> {
        logs.iter().filter(|log| self.matches(log.date, today)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub label: String,
    pub filter: DateFilter,
}

/// The current month and the eleven before it, newest first.
pub fn past_months(today: NaiveDate) -> Vec<MonthOption> {
    (0..12)
        .filter_map(|back| today.checked_sub_months(Months::new(back)))
        .map(|day| MonthOption {
            label: day.format("%b-%Y").to_string(),
            filter: DateFilter::CustomMonth {
                year: day.year(),
                month: day.month(),
            },
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLogs {
    pub kind: StockKind,
}

impl StockLogs {
    pub fn new(kind: StockKind) -> Self {
        Self { kind }
    }

    fn person_field(&self) -> &'static str {
        match self.kind {
            StockKind::In => "receiverName",
            StockKind::Out => "senderName",
        }
    }
}

#[async_trait]
impl CrudResource for StockLogs {
    type Record = StockLog;
    type Draft = StockPayload;

    fn label(&self) -> &'static str {
        "Log"
    }

    fn record_id<'a>(&self, record: &'a StockLog) -> &'a str {
        &record.id
    }

    async fn list(&self, api: &ApiClient) -> ClientResult<Vec<StockLog>> {
        stock_service::list_logs_of_kind(api, self.kind).await
    }

    async fn create(&self, api: &ApiClient, draft: &StockPayload) -> ClientResult<()> {
        stock_service::create_stock_log(api, self.kind, draft).await.map(drop)
    }

    async fn delete(&self, api: &ApiClient, id: &str) -> ClientResult<()> {
        stock_service::delete_stock_log(api, id).await.map(drop)
    }
}

impl TableView for StockLogs {
    fn columns(&self) -> &'static [&'static str] {
        match self.kind {
            StockKind::In => &[
                "Product", "Product Size", "Vendor Name", "Remarks", "Quantity", "Receiver Name", "Date", "Time",
                "Warehouse",
            ],
            StockKind::Out => &[
                "Product", "Product Size", "Vendor Name", "Remarks", "Quantity", "Sender Name", "Date", "Time",
                "Warehouse",
            ],
        }
    }

    fn cells(&self, log: &StockLog) -> Vec<String> {
        vec![
            log.product_id.title().to_string(),
            log.product_id.size().unwrap_or("N/A").to_string(),
            log.vendor_id.name().to_string(),
            log.remarks.clone(),
            log.quantity.to_string(),
            log.counterpart().to_string(),
            log.date.format("%m/%d/%Y").to_string(),
            log.date.format("%H:%M:%S").to_string(),
            log.warehouse.clone(),
        ]
    }
}

impl FormBinding for StockLogs {
    fn schema(&self) -> FormSchema {
        match self.kind {
            StockKind::In => schemas::stock_in(),
            StockKind::Out => schemas::stock_out(),
        }
    }

    fn prefill(&self, log: &StockLog) -> FormValues {
        let product_id = match &log.product_id {
            ProductLink::Populated(p) => p.id.clone(),
            ProductLink::Id(id) => id.clone(),
        };
        let vendor_id = match &log.vendor_id {
            VendorLink::Populated(v) => v.id.clone(),
            VendorLink::Id(id) => id.clone(),
        };
        FormValues::new()
            .with_text("productId", product_id)
            .with_text("vendorId", vendor_id)
            .with_text("warehouse", log.warehouse.clone())
            .with_text("quantity", log.quantity.to_string())
            .with_text("remarks", log.remarks.clone())
            .with_text(self.person_field(), log.counterpart())
            .with_hosted_images("images", &log.images)
    }

    fn draft(&self, values: &FormValues, _ctx: &FormContext) -> StockPayload {
        let person = Some(values.text(self.person_field()).trim().to_string());
        let (sender_name, receiver_name) = match self.kind {
            StockKind::In => (None, person),
            StockKind::Out => (person, None),
        };
        StockPayload {
            product_id: values.text("productId").to_string(),
            vendor_id: values.text("vendorId").to_string(),
            warehouse: values.text("warehouse").trim().to_string(),
            quantity: values.i64("quantity").unwrap_or_default(),
            remarks: values.text("remarks").trim().to_string(),
            sender_name,
            receiver_name,
            images: values.hosted_urls("images"),
        }
    }

    fn created_message(&self, values: &FormValues, options: &ChoiceOptions) -> String {
        let product_id = values.text("productId");
        let title = options
            .get("productId")
            .and_then(|choices| choices.iter().find(|(id, _)| id == product_id))
            .map(|(_, title)| title.as_str())
            .unwrap_or(product_id);
        format!("{} {title}s added successfully.", values.text("quantity").trim())
    }
}

/// Product and vendor choices for the stock pickers, as `(id, label)` pairs.
pub async fn load_stock_choices(api: &ApiClient) -> ClientResult<(Vec<(String, String)>, Vec<(String, String)>)> {
    let products = product_service::list_products(api)
        .await?
        .into_iter()
        .map(|p| (p.id, p.title))
        .collect();
    let vendors = vendor_service::list_vendors(api)
        .await?
        .into_iter()
        .map(|v| (v.id, v.name))
        .collect();
    Ok((products, vendors))
}

/// A stock-in or stock-out table with its date chips.
pub struct StockScreen {
    pub listing: ListingScreen<StockLogs>,
    pub modal: FormModal<StockLogs>,
    filter: DateFilter,
}

impl StockScreen {
    pub fn new(kind: StockKind) -> Self {
        let resource = StockLogs::new(kind);
        Self {
            modal: FormModal::new(&resource),
            listing: ListingScreen::new(resource),
            filter: DateFilter::All,
        }
    }

    pub fn filter(&self) -> DateFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: DateFilter) {
        self.filter = filter;
    }

    pub fn visible(&self, today: NaiveDate) -> Vec<&StockLog> {
        self.filter.apply(self.listing.records(), today)
    }

    pub fn visible_rows(&self, today: NaiveDate) -> Vec<TableRow> {
        let resource = self.listing.resource();
        self.visible(today).into_iter().map(|log| resource.row(log)).collect()
    }

    /// Open the create dialog once its pickers are populated.
    pub async fn open_create(&mut self, state: &AppState) -> bool {
        match load_stock_choices(&state.api).await {
            Ok((products, vendors)) => {
                self.modal.open_create();
                self.modal.set_options("productId", products);
                self.modal.set_options("vendorId", vendors);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, kind = self.listing.resource().kind.label(), "loading stock choices failed");
                state
                    .notifier
                    .notify(Toast::error("Error fetching products, Please try again."));
                false
            }
        }
    }
}
