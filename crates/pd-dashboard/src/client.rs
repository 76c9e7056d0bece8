//! HTTP client for the demo API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::error::{ClientError, ClientResult};
use crate::source::StatusSource;
use pd_protocol::{HealthStatus, ServiceInfo, WelcomeInfo, routes};

/// `StatusSource` backed by the live API over HTTP.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = routes::url(&self.base_url, path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StatusSource for ApiClient {
    async fn welcome(&self) -> ClientResult<WelcomeInfo> {
        self.get_json(routes::ROOT).await
    }

    async fn health(&self) -> ClientResult<HealthStatus> {
        self.get_json(routes::HEALTH).await
    }

    async fn info(&self) -> ClientResult<ServiceInfo> {
        self.get_json(routes::INFO).await
    }
}
