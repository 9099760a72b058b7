use crate::error::{BotError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::debug;

/// Outbound chat channel
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<()>;
}

/// Отправляет сообщения в один заранее заданный чат Telegram
pub struct TelegramSender {
    bot: Bot,
    chat_id: Recipient,
}

impl TelegramSender {
    pub fn new(bot: Bot, chat_id: Recipient) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_message(&self, text: &str) -> Result<()> {
        debug!("Sending message to chat {:?}", self.chat_id);
        self.bot
            .send_message(self.chat_id.clone(), text)
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        debug!("Message delivered to chat {:?}", self.chat_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Suppressed,
}

/// Wraps a sender and drops a message identical to the last one delivered.
///
/// Only the immediately preceding message is remembered, so `A, B, A` sends
/// all three.
pub struct Notifier {
    sender: Arc<dyn MessageSender>,
    last_sent: Option<String>,
}

impl Notifier {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self {
            sender,
            last_sent: None,
        }
    }

    pub async fn send_if_changed(&mut self, text: &str) -> Result<Delivery> {
        if self.last_sent.as_deref() == Some(text) {
            debug!("Message repeats the previous one, skipping");
            return Ok(Delivery::Suppressed);
        }

        self.send(text).await?;
        Ok(Delivery::Sent)
    }

    /// Sends unconditionally. The text still becomes the last sent message.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        self.sender.send_message(text).await?;
        self.last_sent = Some(text.to_string());
        Ok(())
    }
}
