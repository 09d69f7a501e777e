use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::Value;

use crate::{
    client::ApiClient,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    error::ClientResult,
    models::Role,
    navigation::{HEALTH_ROUTE, LOGIN_ROUTE},
    storage::KeyValueStore,
};

pub mod keys {
    pub const TOKEN: &str = "serviceToken";
    pub const USER: &str = "user";
    pub const PROFILE_ID: &str = "profileId";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const LOGIN: &str = "login";
    pub const NAME: &str = "name";

    pub const ALL: [&str; 7] = [USER, TOKEN, EMAIL, PROFILE_ID, ROLE, LOGIN, NAME];
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub email: String,
    pub role: Role,
    pub profile_id: Option<String>,
    pub name: String,
}

/// Logged-in state plus its persisted copy in the key-value store.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    api: ApiClient,
    user: RwLock<Option<SessionUser>>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>, api: ApiClient) -> Self {
        Self {
            store,
            api,
            user: RwLock::new(None),
        }
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn profile_id(&self) -> Option<String> {
        self.user().and_then(|u| u.profile_id)
    }

    /// Pick up a persisted session if its token has not expired yet.
    pub fn restore(&self, now: DateTime<Utc>) -> bool {
        let token = match self.store.get(keys::TOKEN) {
            Some(token) if token_is_live(&token, now) => token,
            Some(_) => {
                tracing::info!("stored session token expired");
                self.set_user(None);
                return false;
            }
            None => {
                self.set_user(None);
                return false;
            }
        };

        self.api.set_token(Some(&token));
        let user = SessionUser {
            email: self.store.get(keys::EMAIL).unwrap_or_default(),
            role: self
                .store
                .get(keys::ROLE)
                .map(|r| Role::parse(&r))
                .unwrap_or(Role::Unknown),
            profile_id: self.store.get(keys::PROFILE_ID),
            name: self.store.get(keys::NAME).unwrap_or_default(),
        };
        tracing::info!(email = %user.email, role = user.role.as_str(), "session restored");
        self.set_user(Some(user));
        true
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionUser> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let raw: Value = self
            .api
            .post("/user/login", &request)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "login failed"))?;
        let response: LoginResponse = serde_json::from_value(raw.clone())?;

        let role = response.role.as_deref().map(Role::parse).unwrap_or(Role::Unknown);
        let user = self.persist(email, &raw, &response, role)?;
        self.api.navigator().navigate(HEALTH_ROUTE);
        Ok(user)
    }

    /// Create a `user`-role account, then log straight into it.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        firstname: &str,
        lastname: &str,
    ) -> ClientResult<SessionUser> {
        let request = RegisterRequest {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            role: Role::User.as_str().to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let created: Value = self.api.post("/user/create", &request).await?;
        tracing::info!(email, "account registered");

        let login = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let raw: Value = self.api.post("/user/login", &login).await?;
        let mut response: LoginResponse = serde_json::from_value(raw.clone())?;
        if let Ok(created) = serde_json::from_value::<LoginNames>(created) {
            response.firstname = created.firstname.or(response.firstname);
            response.lastname = created.lastname.or(response.lastname);
        }

        self.persist(email, &raw, &response, Role::User)
    }

    pub fn logout(&self) -> ClientResult<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        self.api.set_token(None);
        self.set_user(None);
        self.api.navigator().navigate(LOGIN_ROUTE);
        tracing::info!("logged out");
        Ok(())
    }

    fn persist(
        &self,
        email: &str,
        raw: &Value,
        response: &LoginResponse,
        role: Role,
    ) -> ClientResult<SessionUser> {
        let profile_id = response.uid.clone();
        let name = response.display_name();

        self.store.set(keys::USER, &raw.to_string())?;
        self.store.set(keys::TOKEN, &response.token)?;
        self.store
            .set(keys::PROFILE_ID, profile_id.as_deref().unwrap_or_default())?;
        self.store.set(keys::EMAIL, email)?;
        self.store.set(keys::ROLE, role.as_str())?;
        self.store.set(keys::LOGIN, "true")?;
        self.store.set(keys::NAME, &name)?;
        self.api.set_token(Some(&response.token));

        let user = SessionUser {
            email: email.to_string(),
            role,
            profile_id,
            name,
        };
        tracing::info!(email, role = role.as_str(), "logged in");
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    fn set_user(&self, user: Option<SessionUser>) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = user;
    }
}

#[derive(serde::Deserialize)]
struct LoginNames {
    #[serde(default, alias = "firsname")]
    firstname: Option<String>,
    #[serde(default)]
    lastname: Option<String>,
}

/// True while the token's `exp` claim is still in the future.
///
/// The signature is not checked: the client only needs the expiry, the
/// server remains the authority on validity.
pub fn token_is_live(token: &str, now: DateTime<Utc>) -> bool {
    let token = token.trim_start_matches("Bearer ").trim();
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data.claims.exp as i64 > now.timestamp(),
        Err(err) => {
            tracing::warn!(error = %err, "token error");
            false
        }
    }
}
