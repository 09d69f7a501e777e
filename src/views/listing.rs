use crate::{cancel::ViewScope, client::ApiClient, error::ClientError};

use super::table::{TableRow, TableView, search};

/// A table screen over one resource: fetch, keep, and shape its records.
pub struct ListingScreen<R: TableView> {
    resource: R,
    records: Vec<R::Record>,
    loading: bool,
    last_error: Option<String>,
    scope: ViewScope,
}

impl<R: TableView> ListingScreen<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            records: Vec::new(),
            loading: false,
            last_error: None,
            scope: ViewScope::new(),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Re-fetch the whole collection. Failures empty the table.
    pub async fn refresh(&mut self, api: &ApiClient) {
        if self.scope.is_cancelled() {
            return;
        }
        self.loading = true;
        let result = self.scope.run(self.resource.list(api)).await;
        self.loading = false;

        match result {
            Ok(records) => {
                tracing::debug!(resource = self.resource.label(), count = records.len(), "listing refreshed");
                self.records = records;
                self.last_error = None;
            }
            Err(ClientError::Cancelled) => {
                tracing::debug!(resource = self.resource.label(), "listing closed before refresh finished");
            }
            Err(err) => {
                tracing::error!(resource = self.resource.label(), error = %err, "failed to fetch records");
                self.records.clear();
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.records.iter().map(|r| self.resource.row(r)).collect()
    }

    pub fn search(&self, term: &str) -> Vec<TableRow> {
        let rows = self.rows();
        search(&rows, term).into_iter().cloned().collect()
    }

    pub fn find(&self, id: &str) -> Option<&R::Record> {
        self.records
            .iter()
            .find(|r| self.resource.record_id(r) == id)
    }

    /// Swap in a record the caller already holds, matched by id.
    pub fn patch(&mut self, record: R::Record) -> bool {
        let id = self.resource.record_id(&record).to_string();
        match self
            .records
            .iter_mut()
            .find(|r| self.resource.record_id(r) == id)
        {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Leave the screen; later refreshes are dropped.
    pub fn close(&self) {
        self.scope.cancel();
    }
}
