use std::marker::PhantomData;

use crate::{
    error::ClientResult,
    forms::{ChoiceOptions, FieldErrors, FormSchema, FormValues},
    notify::Toast,
    state::AppState,
};

use super::{listing::ListingScreen, resources::FormBinding, table::TableView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Update(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Closed, or a submit is already running.
    Ignored,
    Invalid,
    Saved,
    Failed,
}

/// The create/update dialog shared by every resource.
pub struct FormModal<R: FormBinding> {
    schema: FormSchema,
    mode: Option<ModalMode>,
    values: FormValues,
    errors: FieldErrors,
    options: ChoiceOptions,
    submitting: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: FormBinding + TableView> FormModal<R> {
    pub fn new(resource: &R) -> Self {
        let schema = resource.schema();
        let values = schema.defaults();
        Self {
            schema,
            mode: None,
            values,
            errors: FieldErrors::new(),
            options: ChoiceOptions::new(),
            submitting: false,
            _resource: PhantomData,
        }
    }

    pub fn open_create(&mut self) {
        self.reset();
        self.mode = Some(ModalMode::Create);
    }

    pub fn open_update(&mut self, resource: &R, record: &R::Record) {
        self.reset();
        self.values = resource.prefill(record);
        self.mode = Some(ModalMode::Update(resource.record_id(record).to_string()));
    }

    pub fn close(&mut self) {
        self.mode = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.values = self.schema.defaults();
        self.errors.clear();
        self.submitting = false;
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<&ModalMode> {
        self.mode.as_ref()
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Submit control is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn options(&self) -> &ChoiceOptions {
        &self.options
    }

    pub fn set_options(&mut self, field: &str, choices: Vec<(String, String)>) {
        self.options.insert(field.to_string(), choices);
    }

    pub async fn submit(&mut self, state: &AppState, listing: &mut ListingScreen<R>) -> SubmitOutcome {
        let Some(mode) = self.mode.clone() else {
            return SubmitOutcome::Ignored;
        };
        if self.submitting {
            return SubmitOutcome::Ignored;
        }

        if let Err(errors) = self.schema.validate(&self.values, &self.options) {
            tracing::debug!(resource = listing.resource().label(), fields = errors.len(), "form rejected");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors.clear();

        self.submitting = true;
        let result = self.save(state, listing.resource(), &mode).await;
        self.submitting = false;

        let label = listing.resource().label();
        let verb = match mode {
            ModalMode::Create => "creating",
            ModalMode::Update(_) => "updating",
        };
        match result {
            Ok(message) => {
                state.notifier.notify(Toast::success(message));
                listing.refresh(&state.api).await;
                self.close();
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::error!(resource = label, error = %err, "{verb} failed");
                state
                    .notifier
                    .notify(Toast::error(format!("Error {verb} {}", label.to_lowercase())));
                SubmitOutcome::Failed
            }
        }
    }

    async fn save(&mut self, state: &AppState, resource: &R, mode: &ModalMode) -> ClientResult<String> {
        for (field, index, file) in self.values.pending_uploads() {
            let url = state.uploader.upload(&file).await?;
            tracing::debug!(field = %field, url = %url, "image uploaded");
            self.values.mark_uploaded(&field, index, url);
        }

        let draft = resource.draft(&self.values, &state.form_context());
        match mode {
            ModalMode::Create => {
                resource.create(&state.api, &draft).await?;
                Ok(resource.created_message(&self.values, &self.options))
            }
            ModalMode::Update(id) => {
                resource.update(&state.api, id, &draft).await?;
                Ok(format!("{} updated successfully.", resource.label()))
            }
        }
    }
}
