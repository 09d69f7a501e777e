use std::sync::Arc;

use crate::{
    client::ApiClient,
    config::AppConfig,
    error::ClientResult,
    navigation::Navigator,
    notify::Notifier,
    services::upload_service::{HttpUploader, ImageUploader},
    session::SessionManager,
    storage::KeyValueStore,
    views::resources::FormContext,
};

/// Everything a screen action reaches for, shared by cheap clones.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: ApiClient,
    pub session: Arc<SessionManager>,
    pub notifier: Arc<dyn Notifier>,
    pub uploader: Arc<dyn ImageUploader>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let api = ApiClient::new(&config, navigator)?;
        let uploader = Arc::new(HttpUploader::new(api.http().clone(), config.upload_url.clone()));
        let session = Arc::new(SessionManager::new(store, api.clone()));
        Ok(Self {
            config: Arc::new(config),
            api,
            session,
            notifier,
            uploader,
        })
    }

    pub fn with_uploader(mut self, uploader: Arc<dyn ImageUploader>) -> Self {
        self.uploader = uploader;
        self
    }

    pub fn form_context(&self) -> FormContext {
        FormContext {
            profile_id: self.session.profile_id(),
        }
    }
}
