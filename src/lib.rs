pub mod caller;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod nebius;
pub mod server;
pub mod theme;

pub use caller::{GeneratedImage, GeneratorClient};
pub use config::{Config, NebiusConfig};
pub use error::{FluxgenError, Result};
pub use models::*;
pub use nebius::{ImageClient, NebiusClient};
