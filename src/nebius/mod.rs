pub mod image_client;

use crate::{
    config::NebiusConfig,
    error::{FluxgenError, Result},
};

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct NebiusClient {
    image_client: ImageClient,
}

impl NebiusClient {
    pub fn new(config: NebiusConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FluxgenError::ClientError(e.to_string()))?;

        Ok(Self {
            image_client: ImageClient::new(http, config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
