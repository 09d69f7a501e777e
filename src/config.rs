use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://smart-city-iwx8.onrender.com/api/";
pub const DEFAULT_UPLOAD_URL: &str = "https://uploads.padelmates.co/index.php";
pub const DEFAULT_SESSION_FILE: &str = ".smart-city-session.json";
pub const DEFAULT_AUTH_REDIRECT: &str = "/health";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub upload_url: String,
    pub maps_api_key: Option<String>,
    pub session_file: PathBuf,
    pub auth_redirect: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("SMART_CITY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let upload_url =
            env::var("SMART_CITY_UPLOAD_URL").unwrap_or_else(|_| DEFAULT_UPLOAD_URL.to_string());
        let maps_api_key = env::var("MAPS_API_KEY").ok().filter(|key| !key.is_empty());
        let session_file = env::var("SMART_CITY_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));
        let auth_redirect = env::var("SMART_CITY_AUTH_REDIRECT")
            .unwrap_or_else(|_| DEFAULT_AUTH_REDIRECT.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            anyhow::bail!("SMART_CITY_API_URL must be an http(s) URL, got {api_url}");
        }

        Ok(Self {
            api_url,
            upload_url,
            maps_api_key,
            session_file,
            auth_redirect,
        })
    }

    /// Configuration pointing at a specific backend, used by tests and embedders.
    pub fn for_base_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            maps_api_key: None,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            auth_redirect: DEFAULT_AUTH_REDIRECT.to_string(),
        }
    }
}
