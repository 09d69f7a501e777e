use crate::{notify::Toast, state::AppState};

use super::{listing::ListingScreen, table::TableView};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Closed,
    AwaitingConfirmation(String),
    InFlight(String),
}

/// "Are you sure?" dialog in front of a single delete call.
#[derive(Debug, Default)]
pub struct DeleteModal {
    state: DeleteState,
}

impl DeleteModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DeleteState::Closed
    }

    pub fn open(&mut self, id: impl Into<String>) {
        if !matches!(self.state, DeleteState::InFlight(_)) {
            self.state = DeleteState::AwaitingConfirmation(id.into());
        }
    }

    pub fn dismiss(&mut self) {
        if matches!(self.state, DeleteState::AwaitingConfirmation(_)) {
            self.state = DeleteState::Closed;
        }
    }

    /// Delete the pending id, then re-fetch the listing on success.
    /// Returns whether the record was deleted.
    pub async fn confirm<R: TableView>(&mut self, state: &AppState, listing: &mut ListingScreen<R>) -> bool {
        let DeleteState::AwaitingConfirmation(id) = &self.state else {
            return false;
        };
        let id = id.clone();
        self.state = DeleteState::InFlight(id.clone());

        let label = listing.resource().label();
        let result = listing.resource().delete(&state.api, &id).await;
        self.state = DeleteState::Closed;

        match result {
            Ok(()) => {
                tracing::info!(resource = label, id = %id, "record deleted");
                state
                    .notifier
                    .notify(Toast::success(format!("{label} deleted successfully.")));
                listing.refresh(&state.api).await;
                true
            }
            Err(err) => {
                tracing::error!(resource = label, id = %id, error = %err, "delete failed");
                state
                    .notifier
                    .notify(Toast::error(format!("Failed to delete {}", label.to_lowercase())));
                false
            }
        }
    }
}
