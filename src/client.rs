use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Method, RequestBuilder, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::AppConfig,
    error::{ClientError, ClientResult},
    navigation::Navigator,
};

/// The one configured HTTP client every resource module goes through.
///
/// Cloning is cheap; clones share the bearer token, so a login on one
/// handle authenticates every screen holding another.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    auth_redirect: String,
    token: RwLock<Option<String>>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, navigator: Arc<dyn Navigator>) -> ClientResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http(http, config, navigator))
    }

    pub fn with_http(http: reqwest::Client, config: &AppConfig, navigator: Arc<dyn Navigator>) -> Self {
        let base_url = if config.api_url.ends_with('/') {
            config.api_url.clone()
        } else {
            format!("{}/", config.api_url)
        };
        Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                auth_redirect: config.auth_redirect.clone(),
                token: RwLock::new(None),
                navigator,
            }),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.inner.navigator
    }

    /// Install or clear the default `Authorization` header.
    pub fn set_token(&self, token: Option<&str>) {
        let token = token
            .map(|t| t.trim_start_matches("Bearer ").trim().to_string())
            .filter(|t| !t.is_empty());
        *self.inner.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self
            .inner
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            self.redirect_unauthorized();
        }
        if !status.is_success() {
            tracing::warn!(status = %status, "api request failed");
            return Err(ClientError::from_status(status, &body));
        }

        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    fn redirect_unauthorized(&self) {
        let navigator = &self.inner.navigator;
        if !navigator.current().contains(&self.inner.auth_redirect) {
            tracing::info!(to = %self.inner.auth_redirect, "unauthorized, redirecting");
            navigator.navigate(&self.inner.auth_redirect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::History;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&AppConfig::for_base_url(base), Arc::new(History::new("/"))).unwrap()
    }

    #[test]
    fn url_joins_base_and_path_with_single_slash() {
        let api = client("http://localhost:5000/api");
        assert_eq!(api.url("/products"), "http://localhost:5000/api/products");
        assert_eq!(api.url("vendors/7"), "http://localhost:5000/api/vendors/7");
    }

    #[test]
    fn token_strips_bearer_prefix() {
        let api = client("http://localhost/api/");
        api.set_token(Some("Bearer abc.def.ghi"));
        assert_eq!(api.token().as_deref(), Some("abc.def.ghi"));
        api.set_token(None);
        assert_eq!(api.token(), None);
    }
}
