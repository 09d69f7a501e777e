use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// A picked file that has not been uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload one file and return its hosted URL.
    async fn upload(&self, file: &UploadFile) -> ClientResult<String>;
}

/// Posts each file as multipart field `files` to the image host.
pub struct HttpUploader {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpUploader {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    image_info: Option<ImageInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageInfo {
    complete_url: Option<String>,
}

#[async_trait]
impl ImageUploader for HttpUploader {
    async fn upload(&self, file: &UploadFile) -> ClientResult<String> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part("files", part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, file = %file.file_name, "image upload failed");
            return Err(ClientError::Upload(format!("{status}: {body}")));
        }

        let body: UploadResponse = response.json().await?;
        body.image_info
            .and_then(|info| info.complete_url)
            .ok_or_else(|| ClientError::Upload(format!("no URL returned for {}", file.file_name)))
    }
}
