use crate::{
    cancel::ViewScope,
    client::ApiClient,
    error::{ClientError, ClientResult},
    models::{StockKind, StockLog},
    services::{product_service, stock_service, vendor_service},
};

use super::{
    stock::StockLogs,
    table::{TableRow, TableView},
};

pub const WAREHOUSES: usize = 3;
const RECENT_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub count: usize,
}

/// Analytics landing page: four counters and the latest stock movements.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub products: usize,
    pub vendors: usize,
    pub low_quantity: usize,
    stock_in: Vec<StockLog>,
    stock_out: Vec<StockLog>,
    loading: bool,
    scope: ViewScope,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_closed(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Fetch one collection after another; a failure keeps what already arrived.
    pub async fn load(&mut self, api: &ApiClient) {
        if self.scope.is_cancelled() {
            return;
        }
        self.loading = true;
        match self.fetch_all(api).await {
            Ok(()) | Err(ClientError::Cancelled) => {}
            Err(err) => tracing::error!(error = %err, "error fetching dashboard data"),
        }
        self.loading = false;
    }

    async fn fetch_all(&mut self, api: &ApiClient) -> ClientResult<()> {
        self.products = self.scope.run(product_service::list_products(api)).await?.len();
        self.vendors = self.scope.run(vendor_service::list_vendors(api)).await?.len();
        self.low_quantity = self
            .scope
            .run(product_service::list_low_quantity_products(api))
            .await?
            .len();
        self.stock_in = self
            .scope
            .run(stock_service::list_logs_of_kind(api, StockKind::In))
            .await?;
        self.stock_out = self
            .scope
            .run(stock_service::list_logs_of_kind(api, StockKind::Out))
            .await?;
        tracing::debug!(
            products = self.products,
            vendors = self.vendors,
            low_quantity = self.low_quantity,
            "dashboard loaded"
        );
        Ok(())
    }

    /// Leaving the page: the request in flight and everything after it are dropped.
    pub fn close(&self) {
        self.scope.cancel();
    }

    pub fn cards(&self) -> [Card; 4] {
        [
            Card {
                title: "Total Products",
                count: self.products,
            },
            Card {
                title: "Total Vendors",
                count: self.vendors,
            },
            Card {
                title: "Total Warehouses",
                count: WAREHOUSES,
            },
            Card {
                title: "Low Quantity Products",
                count: self.low_quantity,
            },
        ]
    }

    pub fn recent_title(kind: StockKind) -> &'static str {
        match kind {
            StockKind::In => "Most Recent Stock-in",
            StockKind::Out => "Most Recent Stock-out",
        }
    }

    pub fn recent(&self, kind: StockKind) -> Vec<TableRow> {
        let logs = match kind {
            StockKind::In => &self.stock_in,
            StockKind::Out => &self.stock_out,
        };
        let resource = StockLogs::new(kind);
        logs.iter().take(RECENT_ROWS).map(|log| resource.row(log)).collect()
    }
}
