use crate::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Источник статусов домашних работ.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HomeworkSource: Send + Sync {
    /// Returns the raw API answer for homeworks updated since `timestamp`.
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value>;
}

pub struct ApiClient {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            endpoint,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HomeworkSource for ApiClient {
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value> {
        debug!("GET {} from_date={}", self.endpoint, timestamp);
        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| BotError::Connectivity {
                endpoint: self.endpoint.clone(),
                timestamp,
                cause: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::Availability {
                endpoint: self.endpoint.clone(),
                timestamp,
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| BotError::Decode {
            endpoint: self.endpoint.clone(),
            cause: e.to_string(),
        })?;

        debug!("GET {} -> {}", self.endpoint, status);
        Ok(body)
    }
}
