use crate::{
    cancel::ViewScope,
    client::ApiClient,
    config::AppConfig,
    dto::directory::ReviewPayload,
    error::ClientError,
    maps,
    models::{Review, Role},
    notify::Toast,
    services::directory_service,
    session::SessionManager,
    state::AppState,
};

use super::directory::{DirectoryCard, DirectoryKind, Section};

pub const NO_REVIEWS: &str = "No reviews available";
const REVIEW_ADDED: &str = "Review added successfully";
const REVIEW_REJECTED: &str = "You have already submitted review.";

/// Read-only star row, filled up to `rating`.
pub fn star_glyphs(rating: i64) -> String {
    (0..5).map(|i| if i < rating { '★' } else { '☆' }).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    comment: String,
    rating: u8,
    submitting: bool,
}

impl ReviewForm {
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Star click; anything outside one to five stars is ignored.
    pub fn set_rating(&mut self, rating: u8) {
        if (1..=5).contains(&rating) {
            self.rating = rating;
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.comment.trim().is_empty() && (1..=5).contains(&self.rating)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One hospital, mall or institute with its reviews.
pub struct DetailScreen<K: DirectoryKind> {
    kind: K,
    id: String,
    entry: Option<K::Record>,
    loading: bool,
    review: ReviewForm,
    scope: ViewScope,
}

impl<K: DirectoryKind> DetailScreen<K> {
    pub fn new(kind: K, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            entry: None,
            loading: false,
            review: ReviewForm::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entry(&self) -> Option<&K::Record> {
        self.entry.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self, api: &ApiClient) {
        if self.scope.is_cancelled() {
            return;
        }
        self.loading = true;
        let result = self.scope.run(self.kind.fetch(api, &self.id)).await;
        self.loading = false;

        match result {
            Ok(entry) => self.entry = Some(entry),
            Err(ClientError::Cancelled) => {}
            Err(err) => {
                tracing::error!(resource = self.kind.label(), id = %self.id, error = %err, "failed to fetch entry");
                self.entry = None;
            }
        }
    }

    pub fn card(&self) -> Option<DirectoryCard> {
        self.entry.as_ref().map(|e| self.kind.card(e))
    }

    pub fn sections(&self) -> Vec<Section> {
        self.card().map(|c| c.sections).unwrap_or_default()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.card().map(|c| c.reviews).unwrap_or_default()
    }

    /// Shown only when there is nothing to list.
    pub fn reviews_caption(&self) -> Option<&'static str> {
        self.reviews().is_empty().then_some(NO_REVIEWS)
    }

    pub fn map_embed_url(&self, config: &AppConfig) -> Option<String> {
        let key = config.maps_api_key.as_deref()?;
        let card = self.card()?;
        Some(maps::embed_url(key, card.coordinates))
    }

    /// Only plain users review; admins never see the form.
    pub fn review_form(&self, session: &SessionManager) -> Option<&ReviewForm> {
        (session.role() == Some(Role::User)).then_some(&self.review)
    }

    pub fn review_form_mut(&mut self, session: &SessionManager) -> Option<&mut ReviewForm> {
        (session.role() == Some(Role::User)).then_some(&mut self.review)
    }

    pub async fn submit_review(&mut self, state: &AppState) -> bool {
        if state.session.role() != Some(Role::User) || !self.review.can_submit() {
            return false;
        }

        let payload = ReviewPayload {
            user: state.session.profile_id().unwrap_or_default(),
            comment: self.review.comment.clone(),
            rating: self.review.rating,
            id: self.id.clone(),
            target: self.kind.review_target(),
        };

        self.review.submitting = true;
        let result = directory_service::add_review(&state.api, &payload).await;
        self.review.submitting = false;

        match result {
            Ok(_) => {
                self.review.reset();
                state.notifier.notify(Toast::success(REVIEW_ADDED));
                self.load(&state.api).await;
                true
            }
            Err(err) => {
                tracing::error!(id = %self.id, error = %err, "error adding review");
                state.notifier.notify(Toast::error(REVIEW_REJECTED));
                false
            }
        }
    }

    pub fn close(&self) {
        self.scope.cancel();
    }
}
