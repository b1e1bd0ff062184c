use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Thin JSON-over-HTTP client; every failure becomes `AppError::Upstream`
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self.send_get_request(url).await?;

        if !response.status().is_success() {
            return Err(AppError::upstream(
                url,
                format!("API returned status: {}", response.status()),
            ));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::upstream(url, format!("Failed to parse response: {e}")))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> AppResult<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::upstream("<client>", format!("Failed to build HTTP client: {e}")))
    }

    async fn send_get_request(&self, url: &str) -> AppResult<reqwest::Response> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::upstream(url, format!("Failed to send GET request: {e}")))
    }
}
