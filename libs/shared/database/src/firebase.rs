use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Read access to the remote stats database. A single read method keyed by
/// reference path so handlers can run against an in-memory fake in tests.
#[async_trait]
pub trait StatsStore: Send + Sync {
    async fn read(&self, path: &str) -> Result<Value>;
}

/// Realtime Database REST client. Reads `{base_url}/{path}.json`; the
/// database answers `null` for paths that do not exist, which is returned
/// verbatim.
pub struct FirebaseClient {
    client: Client,
    base_url: String,
}

impl FirebaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.database_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl StatsStore for FirebaseClient {
    async fn read(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}.json", self.base_url, path);
        debug!("Reading {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Database read failed ({}): {}", status, error_text);
            return Err(anyhow!("database read failed ({}): {}", status, error_text));
        }

        let data = response.json::<Value>().await?;
        Ok(data)
    }
}
