//! HTTP Gateway
//!
//! `GET /check` and `POST /greet` against the configured base URL.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::traits::GreetingGateway;
use crate::config::GatewayConfig;
use crate::domain::{DomainError, DomainResult, GreetRequest};

pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send and return the body text of a 2xx response
    async fn fetch_text(request: RequestBuilder) -> DomainResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DomainError::Upstream { status: status.as_u16(), body });
        }
        Ok(body)
    }
}

#[async_trait]
impl GreetingGateway for HttpGateway {
    async fn greet(&self, name: &str) -> DomainResult<String> {
        let url = self.config.endpoint("greet")?;
        log::debug!("POST {}", url);
        Self::fetch_text(self.client.post(url).json(&GreetRequest::new(name))).await
    }

    async fn check(&self) -> DomainResult<String> {
        let url = self.config.endpoint("check")?;
        log::debug!("GET {}", url);
        Self::fetch_text(self.client.get(url)).await
    }
}
