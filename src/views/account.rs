use serde_json::Value;

use crate::{
    cancel::ViewScope,
    dto::auth::{ChangePasswordRequest, SignupRequest, UpdatePasswordRequest},
    error::{ClientError, ClientResult},
    forms::{ChoiceOptions, FieldErrors, FormSchema, FormValues, schemas},
    models::{Profile, Role},
    notify::Toast,
    services::{profile_service, settings_service, user_service},
    session::SessionUser,
    state::AppState,
};

use super::{listing::ListingScreen, resources::Users};

pub const LOGIN_REJECTED: &str = "Email or Password is incorrect, Please try again!";
const PASSWORD_UPDATED: &str = "Password updated successfully.";
const USER_CREATED: &str = "User created successfully.";

/// Sign-in form. A rejected login shows one fixed message under the form.
pub struct LoginScreen {
    schema: FormSchema,
    values: FormValues,
    errors: FieldErrors,
    failure: Option<&'static str>,
    submitting: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        let schema = schemas::login();
        Self {
            values: schema.defaults(),
            schema,
            errors: FieldErrors::new(),
            failure: None,
            submitting: false,
        }
    }

    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn failure(&self) -> Option<&'static str> {
        self.failure
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit(&mut self, state: &AppState) -> ClientResult<SessionUser> {
        self.failure = None;
        if let Err(errors) = self.schema.validate(&self.values, &ChoiceOptions::new()) {
            self.errors = errors.clone();
            return Err(ClientError::Validation(errors));
        }
        self.errors.clear();

        self.submitting = true;
        let result = state
            .session
            .login(self.values.text("email").trim(), self.values.text("password"))
            .await;
        self.submitting = false;

        if result.is_err() {
            self.failure = Some(LOGIN_REJECTED);
        }
        result
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Which backend route a password change goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordEndpoint {
    /// Settings menu: `currentPassword` to `/auth/update-password`.
    Settings,
    /// User admin: `oldPassword` to `/auth/change-password`.
    Account,
}

pub struct PasswordForm {
    endpoint: PasswordEndpoint,
    schema: FormSchema,
    values: FormValues,
    errors: FieldErrors,
    failure: Option<String>,
    submitting: bool,
}

impl PasswordForm {
    pub fn new(endpoint: PasswordEndpoint) -> Self {
        let schema = schemas::update_password();
        Self {
            endpoint,
            values: schema.defaults(),
            schema,
            errors: FieldErrors::new(),
            failure: None,
            submitting: false,
        }
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

    /// Server-side rejection, shown inline rather than as a toast.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn reset(&mut self) {
        self.values = self.schema.defaults();
        self.errors.clear();
        self.failure = None;
        self.submitting = false;
    }

    pub async fn submit(&mut self, state: &AppState) -> bool {
        if self.submitting {
            return false;
        }
        self.failure = None;
        if let Err(errors) = self.schema.validate(&self.values, &ChoiceOptions::new()) {
            self.errors = errors;
            return false;
        }
        self.errors.clear();

        let current = self.values.text("currentPassword").to_string();
        let new_password = self.values.text("newPassword").to_string();

        self.submitting = true;
        let result = match self.endpoint {
            PasswordEndpoint::Settings => {
                let payload = UpdatePasswordRequest {
                    current_password: current,
                    new_password,
                };
                settings_service::update_password(&state.api, &payload)
                    .await
                    .map(drop)
            }
            PasswordEndpoint::Account => {
                let payload = ChangePasswordRequest {
                    old_password: current,
                    new_password,
                };
                user_service::change_password(&state.api, &payload).await
            }
        };
        self.submitting = false;

        match result {
            Ok(()) => {
                state.notifier.notify(Toast::success(PASSWORD_UPDATED));
                self.reset();
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "error updating password");
                self.failure = Some(err.to_string());
                false
            }
        }
    }
}

/// The signed-in user's own profile document.
#[derive(Default)]
pub struct ProfileScreen {
    profile: Option<Profile>,
    loading: bool,
    scope: ViewScope,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self, state: &AppState) {
        let Some(user_id) = state.session.profile_id() else {
            tracing::warn!("no profile id in session");
            return;
        };

        self.loading = true;
        let result = self
            .scope
            .run(profile_service::get_profile(&state.api, &user_id))
            .await;
        self.loading = false;

        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(ClientError::Cancelled) => {}
            Err(err) => {
                tracing::error!(user_id = %user_id, error = %err, "error fetching profile");
                self.profile = None;
            }
        }
    }

    pub fn close(&self) {
        self.scope.cancel();
    }
}

/// Documents a user has attached, listed next to the users table.
pub struct UserDocuments {
    user_id: String,
    documents: Vec<Value>,
    scope: ViewScope,
}

impl UserDocuments {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            documents: Vec::new(),
            scope: ViewScope::new(),
        }
    }

    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    pub async fn load(&mut self, state: &AppState) {
        match self
            .scope
            .run(user_service::attached_documents(&state.api, &self.user_id))
            .await
        {
            Ok(documents) => self.documents = documents,
            Err(ClientError::Cancelled) => {}
            Err(err) => {
                tracing::error!(user_id = %self.user_id, error = %err, "error fetching attached documents");
                self.documents.clear();
            }
        }
    }
}

/// Admin-side account creation with an explicit role.
pub struct SignUpForm {
    schema: FormSchema,
    values: FormValues,
    errors: FieldErrors,
    options: ChoiceOptions,
    submitting: bool,
}

impl SignUpForm {
    pub fn new() -> Self {
        let schema = schemas::sign_up();
        let mut values = schema.defaults();
        values.set_text("role", Role::User.as_str());

        let mut options = ChoiceOptions::new();
        options.insert(
            "role".into(),
            [Role::User, Role::Superadmin]
                .iter()
                .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
                .collect(),
        );

        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            options,
            submitting: false,
        }
    }

    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub async fn submit(&mut self, state: &AppState, users: &mut ListingScreen<Users>) -> bool {
        if self.submitting {
            return false;
        }
        if let Err(errors) = self.schema.validate(&self.values, &self.options) {
            self.errors = errors;
            return false;
        }
        self.errors.clear();

        let payload = SignupRequest {
            email: self.values.text("email").trim().to_string(),
            password: self.values.text("password").to_string(),
            first_name: self.values.text("firstName").trim().to_string(),
            last_name: self.values.text("lastName").trim().to_string(),
            role: self.values.text("role").to_string(),
        };

        self.submitting = true;
        let result = user_service::sign_up(&state.api, &payload).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                state.notifier.notify(Toast::success(USER_CREATED));
                users.refresh(&state.api).await;
                self.values = self.schema.defaults();
                self.values.set_text("role", Role::User.as_str());
                true
            }
            Err(err) => {
                tracing::error!(email = %payload.email, error = %err, "error creating user");
                state.notifier.notify(Toast::error("Error creating user"));
                false
            }
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}
