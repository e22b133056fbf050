//! Reference client for the `/generate-image` contract: issues the HTTP
//! call, turns the raw base64 body into a renderable data URI, and can
//! serialize the current image to a PNG file. Failures are surfaced with
//! the server-provided message verbatim; there is no automatic retry.

use crate::error::{FluxgenError, Result};
use crate::models::{GenerationRequest, ImageGenerationResponse};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub id: String,
    pub prompt: String,
    /// Data URI, ready for rendering.
    pub image_url: String,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub struct GeneratorClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeneratorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let url = format!("{}/generate-image", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(url)
            .json(&GenerationRequest::new(prompt))
            .send()
            .await
            .map_err(|e| FluxgenError::RequestError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FluxgenError::RequestError(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| "Failed to generate image".to_string());
            return Err(FluxgenError::RequestError(message));
        }

        let reply: ImageGenerationResponse = serde_json::from_str(&body)
            .map_err(|e| FluxgenError::SerializationError(e.to_string()))?;

        Ok(GeneratedImage {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.to_string(),
            image_url: format!("{}{}", PNG_DATA_URI_PREFIX, reply.image_url),
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    /// Decode the displayed image and write it next to `dir` under a
    /// filename derived from the prompt.
    pub fn download(&self, image: &GeneratedImage, dir: &Path) -> Result<PathBuf> {
        let body = image
            .image_url
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .unwrap_or(&image.image_url);

        let bytes = general_purpose::STANDARD
            .decode(body)
            .map_err(|e| FluxgenError::SerializationError(e.to_string()))?;

        let path = dir.join(download_filename(&image.prompt));
        fs::write(&path, bytes).map_err(|e| FluxgenError::ClientError(e.to_string()))?;

        Ok(path)
    }
}

/// First 30 prompt characters, anything non-alphanumeric flattened to
/// underscores, with a png extension.
pub fn download_filename(prompt: &str) -> String {
    let stem: String = prompt
        .chars()
        .take(30)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.png", stem)
}
