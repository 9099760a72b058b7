mod api_client;
mod bot;
mod config;
mod error;
mod notifier;
mod poller;
mod response;
mod status;

use anyhow::Result;
use config::Config;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("homework_bot=debug")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "critical", "{}", e);
            return Err(e.into());
        }
    };

    info!("Starting homework status bot...");
    info!("API endpoint: {}", config.endpoint);

    // Create bot
    let bot = Bot::new(&config.telegram_token);

    // Start polling
    bot::start_bot(bot, config).await?;

    Ok(())
}
