use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Model invoked for every generation; there is no per-request override.
pub const MODEL_ID: &str = "black-forest-labs/flux-schnell";

pub const RESPONSE_FORMAT: &str = "b64_json";
pub const RESPONSE_EXTENSION: &str = "png";
pub const IMAGE_WIDTH: u32 = 1024;
pub const IMAGE_HEIGHT: u32 = 1024;
pub const NUM_INFERENCE_STEPS: u32 = 4;
pub const NEGATIVE_PROMPT: &str = "";

/// Sentinel: the provider picks its own randomness source.
pub const SEED_PROVIDER_RANDOM: i64 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }

    /// The prompt, if present and non-blank after trimming.
    pub fn trimmed_prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// The fixed-shape body sent to the provider. Everything except the
/// prompt is a literal constant; `loras: null` means no adapters.
pub fn build_payload(prompt: &str) -> Value {
    json!({
        "model": MODEL_ID,
        "response_format": RESPONSE_FORMAT,
        "response_extension": RESPONSE_EXTENSION,
        "width": IMAGE_WIDTH,
        "height": IMAGE_HEIGHT,
        "num_inference_steps": NUM_INFERENCE_STEPS,
        "negative_prompt": NEGATIVE_PROMPT,
        "seed": SEED_PROVIDER_RANDOM,
        "loras": null,
        "prompt": prompt
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NebiusImageResponse {
    #[serde(default)]
    pub data: Vec<NebiusImageData>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NebiusImageData {
    #[serde(default)]
    pub b64_json: Option<String>,
}

impl NebiusImageResponse {
    /// The only field consumed from the upstream reply: the first
    /// entry's base64 image body.
    pub fn first_image(&self) -> Option<&str> {
        self.data.first().and_then(|d| d.b64_json.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    /// Raw base64-encoded PNG body, not yet a data URI.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_has_fixed_constants() {
        let payload = build_payload("a red fox in the snow");
        assert_eq!(
            payload,
            json!({
                "model": "black-forest-labs/flux-schnell",
                "response_format": "b64_json",
                "response_extension": "png",
                "width": 1024,
                "height": 1024,
                "num_inference_steps": 4,
                "negative_prompt": "",
                "seed": -1,
                "loras": null,
                "prompt": "a red fox in the snow"
            })
        );
    }

    #[test]
    fn test_prompt_is_passed_literally() {
        let payload = build_payload("  spaces kept  ");
        assert_eq!(payload["prompt"], "  spaces kept  ");
    }

    #[test]
    fn test_trimmed_prompt_rejects_blank() {
        assert_eq!(GenerationRequest::new("").trimmed_prompt(), None);
        assert_eq!(GenerationRequest::new("   ").trimmed_prompt(), None);
        assert_eq!(GenerationRequest { prompt: None }.trimmed_prompt(), None);
        assert_eq!(
            GenerationRequest::new(" a cat ").trimmed_prompt(),
            Some("a cat")
        );
    }

    #[test]
    fn test_request_body_without_prompt_field_deserializes() {
        let req: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_none());
    }

    #[test]
    fn test_first_image_extraction() {
        let reply: NebiusImageResponse =
            serde_json::from_value(json!({ "data": [{ "b64_json": "abc123" }] })).unwrap();
        assert_eq!(reply.first_image(), Some("abc123"));

        let empty: NebiusImageResponse = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert_eq!(empty.first_image(), None);

        let no_body: NebiusImageResponse =
            serde_json::from_value(json!({ "data": [{}] })).unwrap();
        assert_eq!(no_body.first_image(), None);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let resp = ImageGenerationResponse {
            image_url: "abc123".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "imageUrl": "abc123" })
        );
    }
}
