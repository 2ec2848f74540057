use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use serde::Deserialize;

use crate::config::ImageHostConfig;
use crate::domain::user::errors::ImageStoreError;
use crate::domain::user::models::ImageUpload;
use crate::domain::user::ports::ImageStore;

/// Subset of the Cloudinary upload response we rely on.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Image store backed by Cloudinary's unsigned upload endpoint.
pub struct CloudinaryImageStore {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    folder: Option<String>,
}

impl CloudinaryImageStore {
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: config.upload_url.clone(),
            upload_preset: config.upload_preset.clone(),
            folder: config.folder.clone().filter(|f| !f.is_empty()),
        }
    }
}

#[async_trait]
impl ImageStore for CloudinaryImageStore {
    async fn upload(&self, upload: ImageUpload) -> Result<String, ImageStoreError> {
        let file = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| ImageStoreError::RequestFailed(e.to_string()))?;

        let mut form = Form::new()
            .part("file", file)
            .text("upload_preset", self.upload_preset.clone());
        if let Some(folder) = &self.folder {
            form = form.text("folder", folder.clone());
        }

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageStoreError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageStoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageStoreError::InvalidResponse(e.to_string()))?;

        let url = body
            .secure_url
            .ok_or_else(|| ImageStoreError::InvalidResponse("missing secure_url".to_string()))?;

        tracing::debug!(url = %url, "Image stored");
        Ok(url)
    }
}
