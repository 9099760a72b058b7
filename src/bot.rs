use crate::api_client::ApiClient;
use crate::config::Config;
use crate::notifier::{Notifier, TelegramSender};
use crate::poller::Poller;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

pub async fn start_bot(bot: Bot, config: Config) -> Result<()> {
    info!("Bot is starting...");

    let api_client = Arc::new(ApiClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
    ));
    let notifier = Notifier::new(Arc::new(TelegramSender::new(bot, config.telegram_chat_id)));

    let timestamp =
        Poller::starting_timestamp(chrono::Utc::now().timestamp(), config.retry_period);
    info!(
        "Polling every {}s starting from_date={}",
        config.retry_period.as_secs(),
        timestamp
    );

    // Цикл опроса не завершается сам, только вместе с процессом
    Poller::new(api_client, notifier, config.retry_period, timestamp)
        .run()
        .await;

    Ok(())
}
