use crate::error::{BotError, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use teloxide::types::{ChatId, Recipient};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: Recipient,
    pub endpoint: String,
    pub retry_period: Duration,
}

// Токены не должны попадать в логи
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = [
            ("PRACTICUM_TOKEN", lookup("PRACTICUM_TOKEN")),
            ("TELEGRAM_TOKEN", lookup("TELEGRAM_TOKEN")),
            ("TELEGRAM_CHAT_ID", lookup("TELEGRAM_CHAT_ID")),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(BotError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let [(_, practicum_token), (_, telegram_token), (_, chat_id)] = required;
        let telegram_chat_id = parse_recipient(&chat_id.unwrap_or_default())?;

        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let retry_period = match lookup("RETRY_PERIOD") {
            Some(raw) => match raw.trim().parse::<u64>() {
                // Курсор хранится в i64, период должен в него помещаться
                Ok(secs) if secs > 0 && i64::try_from(secs).is_ok() => {
                    Duration::from_secs(secs)
                }
                _ => {
                    return Err(BotError::Config(format!(
                        "RETRY_PERIOD must be a positive number of seconds up to {}, got {:?}",
                        i64::MAX,
                        raw
                    )))
                }
            },
            None => DEFAULT_RETRY_PERIOD,
        };

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id,
            endpoint,
            retry_period,
        })
    }
}

/// Numeric chat id or `@channelusername`.
fn parse_recipient(raw: &str) -> Result<Recipient> {
    let raw = raw.trim();
    if raw.len() > 1 && raw.starts_with('@') {
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }
    raw.parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|_| {
            BotError::Config(format!("TELEGRAM_CHAT_ID is not a valid chat id: {}", raw))
        })
}
