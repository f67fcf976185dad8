//! Client for the upstream DCP API server

use std::time::Duration;

use async_trait::async_trait;

use crate::config::UpstreamConfig;
use crate::DcpUiError;

/// Response relayed from the upstream server
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Abstraction over the upstream API for dependency injection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GET `path` on the upstream server
    async fn get(&self, path: &str) -> crate::Result<UpstreamResponse>;

    /// POST a JSON `body` to `path` on the upstream server
    async fn post_json(&self, path: &str, body: String) -> crate::Result<UpstreamResponse>;
}

/// Production upstream client using reqwest
pub struct ReqwestUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestUpstream {
    pub fn new(config: &UpstreamConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| DcpUiError::Config(format!("Building HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(
        method: &str,
        url: &str,
        response: reqwest::Response,
    ) -> crate::Result<UpstreamResponse> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| DcpUiError::Upstream(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl Upstream for ReqwestUpstream {
    async fn get(&self, path: &str) -> crate::Result<UpstreamResponse> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DcpUiError::Upstream(format!("GET {} failed: {}", url, e)))?;

        Self::read("GET", &url, response).await
    }

    async fn post_json(&self, path: &str, body: String) -> crate::Result<UpstreamResponse> {
        let url = self.url(path);
        tracing::debug!("POST {} ({} bytes)", url, body.len());
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DcpUiError::Upstream(format!("POST {} failed: {}", url, e)))?;

        Self::read("POST", &url, response).await
    }
}
