use fluxgen::logger::{self, LogLevel, LoggerConfig};
use fluxgen::theme::ThemeStore;
use fluxgen::GeneratorClient;
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logger::init_with_config(LoggerConfig::development().with_level(LogLevel::Debug))?;

    let base_url =
        env::var("FLUXGEN_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    let args: Vec<String> = env::args().skip(1).collect();
    let prompt = if args.is_empty() {
        "A serene landscape with mountains and a lake at sunset, digital art style".to_string()
    } else {
        args.join(" ")
    };

    let theme_store = ThemeStore::new(std::env::temp_dir().join("fluxgen-theme"));
    log::info!("🎨 UI theme preference: {}", theme_store.load().as_str());

    log::info!("🖼️  Requesting image for prompt: {}", prompt);

    let client = GeneratorClient::new(base_url);
    match client.generate(&prompt).await {
        Ok(image) => {
            log::info!("✅ Image generation successful!");
            log::info!("📏 Data URI length: {} characters", image.image_url.len());

            match client.download(&image, Path::new(".")) {
                Ok(path) => log::info!("💾 Image saved to: {}", path.display()),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            }
        }
        Err(e) => {
            log::error!("❌ Image generation failed: {}", e);
            log::warn!("💡 Is the fluxgen server running, with NEBIUS_API_KEY configured?");
        }
    }

    Ok(())
}
