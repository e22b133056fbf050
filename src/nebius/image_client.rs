use crate::{
    config::NebiusConfig,
    error::{FluxgenError, Result},
    models::{build_payload, GenerationRequest, ImageGenerationResponse, NebiusImageResponse},
};
use reqwest::{Client, StatusCode};

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    config: NebiusConfig,
}

impl ImageClient {
    pub fn new(http: Client, config: NebiusConfig) -> Self {
        Self { http, config }
    }

    /// One validated, fixed-parameter generation round trip. Credential
    /// and prompt checks short-circuit before any network traffic.
    pub async fn generate(&self, request: GenerationRequest) -> Result<ImageGenerationResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| FluxgenError::ConfigError("Nebius API key is not configured".into()))?;

        let prompt = request
            .trimmed_prompt()
            .ok_or_else(|| FluxgenError::ValidationError("Prompt is required".into()))?;

        // Send the prompt as received; trimming is only for validation.
        let payload = build_payload(request.prompt.as_deref().unwrap_or(prompt));

        log::info!("Generating image with model: {}", crate::models::MODEL_ID);
        log::debug!("Image generation request payload: {}", payload);

        let response = self
            .http
            .post(self.generations_url())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FluxgenError::UpstreamError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::BAD_REQUEST => FluxgenError::InvalidPrompt(body),
                StatusCode::TOO_MANY_REQUESTS => FluxgenError::RateLimited(body),
                _ => FluxgenError::UpstreamError(format!("upstream returned {}: {}", status, body)),
            });
        }

        let response_str = response
            .text()
            .await
            .map_err(|e| FluxgenError::UpstreamError(e.to_string()))?;

        log::info!("Image generated: {}", response_str);

        let nebius_response: NebiusImageResponse = serde_json::from_str(&response_str)
            .map_err(|e| FluxgenError::ResponseError(e.to_string()))?;

        let base64_image = nebius_response.first_image().ok_or_else(|| {
            FluxgenError::ResponseError("upstream reply carries no image body".into())
        })?;

        Ok(ImageGenerationResponse {
            image_url: base64_image.to_string(),
        })
    }

    fn generations_url(&self) -> String {
        format!(
            "{}/images/generations",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: NebiusConfig) -> ImageClient {
        ImageClient::new(Client::new(), config)
    }

    #[tokio::test]
    async fn test_missing_credential_rejected_before_prompt_check() {
        let client = client(NebiusConfig::new());

        let err = client
            .generate(GenerationRequest::new("a valid prompt"))
            .await
            .unwrap_err();
        assert!(matches!(err, FluxgenError::ConfigError(_)));

        // Credential check wins even when the prompt is also invalid.
        let err = client
            .generate(GenerationRequest::new("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, FluxgenError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected() {
        let client = client(NebiusConfig::new().with_credentials("test-key"));

        for prompt in ["", "   "] {
            let err = client
                .generate(GenerationRequest::new(prompt))
                .await
                .unwrap_err();
            assert!(matches!(err, FluxgenError::ValidationError(_)));
        }
    }

    #[test]
    fn test_generations_url_join() {
        let with_slash = client(NebiusConfig::new().with_base_url("http://localhost:9000/v1/"));
        let without = client(NebiusConfig::new().with_base_url("http://localhost:9000/v1"));

        assert_eq!(
            with_slash.generations_url(),
            "http://localhost:9000/v1/images/generations"
        );
        assert_eq!(without.generations_url(), with_slash.generations_url());
    }
}
