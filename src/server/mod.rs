use crate::error::FluxgenError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;

pub mod routes;

/// Boundary wrapper: every adapter failure becomes a structured JSON
/// reply; nothing propagates uncaught past the handlers.
#[derive(Debug)]
pub struct ApiError {
    err: FluxgenError,
}

impl ApiError {
    /// The caller-facing message. Upstream detail stays in the logs so
    /// provider internals never leak through the contract.
    pub fn public_message(&self) -> &str {
        match &self.err {
            FluxgenError::ConfigError(msg) => msg,
            FluxgenError::ValidationError(msg) => msg,
            FluxgenError::InvalidPrompt(_) => "Invalid prompt or request",
            FluxgenError::RateLimited(_) => "Rate limit exceeded. Please try again later.",
            FluxgenError::ResponseError(_) => "Image generation failed or response is invalid",
            FluxgenError::ClientError(_)
            | FluxgenError::RequestError(_)
            | FluxgenError::UpstreamError(_)
            | FluxgenError::SerializationError(_) => {
                "Failed to generate image. Please try again."
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        log::error!("Error generating image: {}", self.err);

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({ "error": self.public_message() }))
    }

    fn status_code(&self) -> StatusCode {
        match self.err {
            FluxgenError::ValidationError(_) | FluxgenError::InvalidPrompt(_) => {
                StatusCode::BAD_REQUEST
            }
            FluxgenError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FluxgenError> for ApiError {
    fn from(err: FluxgenError) -> ApiError {
        ApiError { err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::ResponseError;

    #[test]
    fn test_status_codes_follow_taxonomy() {
        let cases = [
            (FluxgenError::ConfigError("k".into()), 500),
            (FluxgenError::ValidationError("p".into()), 400),
            (FluxgenError::InvalidPrompt("detail".into()), 400),
            (FluxgenError::RateLimited("detail".into()), 429),
            (FluxgenError::UpstreamError("boom".into()), 500),
            (FluxgenError::ResponseError("empty".into()), 500),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_upstream_detail_is_not_leaked() {
        let err = ApiError::from(FluxgenError::InvalidPrompt(
            "upstream internals: flagged by moderation rule 7".into(),
        ));
        assert_eq!(err.public_message(), "Invalid prompt or request");

        let err = ApiError::from(FluxgenError::UpstreamError("connection refused".into()));
        assert_eq!(err.public_message(), "Failed to generate image. Please try again.");
    }

    #[test]
    fn test_validation_message_is_returned_verbatim() {
        let err = ApiError::from(FluxgenError::ValidationError("Prompt is required".into()));
        assert_eq!(err.public_message(), "Prompt is required");
    }
}
