//! reqwest-backed [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use taginfo_core::config::ClientConfig;
use taginfo_core::{Error, TransportError};

use crate::Transport;

/// Plain `GET` + JSON decode over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::ClientSetup(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Self::new(config.timeout(), &config.user_agent)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, url: &str) -> Result<Value, TransportError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                TransportError::Decode {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            } else {
                TransportError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}
