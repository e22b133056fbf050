use std::fmt;

#[derive(Debug)]
pub enum FluxgenError {
    ConfigError(String),
    ClientError(String),
    RequestError(String),
    ValidationError(String),
    InvalidPrompt(String),
    RateLimited(String),
    UpstreamError(String),
    ResponseError(String),
    SerializationError(String),
}

impl fmt::Display for FluxgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluxgenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FluxgenError::ClientError(msg) => write!(f, "Client error: {}", msg),
            FluxgenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            FluxgenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            FluxgenError::InvalidPrompt(msg) => write!(f, "Invalid prompt: {}", msg),
            FluxgenError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            FluxgenError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            FluxgenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            FluxgenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FluxgenError {}

pub type Result<T> = std::result::Result<T, FluxgenError>;
