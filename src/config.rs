use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.studio.nebius.com/v1/";

#[derive(Debug, Clone)]
pub struct NebiusConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for NebiusConfig {
    fn default() -> Self {
        NebiusConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl NebiusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A missing key is not a construction error; it is reported per
    /// request so the server can still boot and answer with a 500.
    pub fn from_env() -> Self {
        let api_key = env::var("NEBIUS_API_KEY").ok().filter(|k| !k.is_empty());
        let base_url = env::var("NEBIUS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        NebiusConfig { api_key, base_url }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub nebius: NebiusConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            nebius: NebiusConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            nebius: NebiusConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_nebius(mut self, nebius: NebiusConfig) -> Self {
        self.nebius = nebius;
        self
    }
}
