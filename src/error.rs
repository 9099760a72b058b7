//! Error types for the homework bot

/// Errors that can occur while polling and notifying.
///
/// `Clone + PartialEq` so the poller can tell a repeated failure from a new one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {endpoint} with from_date={timestamp} failed: {cause}")]
    Connectivity {
        endpoint: String,
        timestamp: i64,
        cause: String,
    },

    #[error("Endpoint {endpoint} with from_date={timestamp} is unavailable: status {status}")]
    Availability {
        endpoint: String,
        timestamp: i64,
        status: u16,
    },

    #[error("Response from {endpoint} is not valid JSON: {cause}")]
    Decode { endpoint: String, cause: String },

    #[error("Missing key `{0}` in API response")]
    MissingKey(&'static str),

    #[error("`{field}` has unexpected type: expected {expected}, got {actual}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Failed to send Telegram message: {0}")]
    Send(String),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;
