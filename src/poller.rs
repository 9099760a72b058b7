//! Poll loop: fetch, validate, notify, sleep

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::api_client::HomeworkSource;
use crate::error::{BotError, Result};
use crate::notifier::{Delivery, Notifier};
use crate::response::check_response;
use crate::status::parse_status;

/// Owns the `from_date` cursor and the last error reported to the operator.
pub struct Poller {
    source: Arc<dyn HomeworkSource>,
    notifier: Notifier,
    retry_period: Duration,
    timestamp: i64,
    last_error: Option<BotError>,
}

impl Poller {
    pub fn new(
        source: Arc<dyn HomeworkSource>,
        notifier: Notifier,
        retry_period: Duration,
        timestamp: i64,
    ) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            timestamp,
            last_error: None,
        }
    }

    /// Cursor for the first poll: one retry period before `now`.
    pub fn starting_timestamp(now: i64, retry_period: Duration) -> i64 {
        now.saturating_sub(period_secs(retry_period))
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Runs cycles forever, sleeping `retry_period` after each one.
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
            debug!(
                "Sleeping {}s, next from_date={}",
                self.retry_period.as_secs(),
                self.timestamp()
            );
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One cycle. Never fails: every error is logged and, where useful,
    /// reported to the chat.
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(()) => self.last_error = None,
            Err(BotError::Send(cause)) => {
                // Канал уведомлений недоступен, сообщать о сбое через него бессмысленно
                error!("Failed to send Telegram message: {}", cause);
            }
            Err(err) => self.report(err).await,
        }
    }

    async fn poll_once(&mut self) -> Result<()> {
        let response = self.source.get_api_answer(self.timestamp).await?;
        if !check_response(&response)? {
            debug!("No homework status changes since {}", self.timestamp);
            return Ok(());
        }

        // API отдаёт работы от новых к старым
        let message = parse_status(&response["homeworks"][0])?;
        if self.notifier.send_if_changed(&message).await? == Delivery::Suppressed {
            debug!("Status message already sent, not repeating it");
        }
        self.timestamp = self.timestamp.saturating_add(period_secs(self.retry_period));
        debug!("Cursor advanced to {}", self.timestamp);
        Ok(())
    }

    async fn report(&mut self, err: BotError) {
        error!("Program failure: {}", err);
        if self.last_error.as_ref() == Some(&err) {
            debug!("Error repeats the previous one, operator already notified");
            return;
        }

        // Повторы уже отсекает last_error, поэтому без дедупликации сообщений
        let message = format!("Сбой в работе программы: {}", err);
        match self.notifier.send(&message).await {
            Ok(()) => self.last_error = Some(err),
            Err(send_err) => error!("Failed to notify operator: {}", send_err),
        }
    }
}

fn period_secs(period: Duration) -> i64 {
    i64::try_from(period.as_secs()).unwrap_or(i64::MAX)
}
