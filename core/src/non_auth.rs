//! Connector for endpoints that need no credentials.
//!
//! # Design
//! `NonAuthConnector` holds the transport and a lazily loaded base URI and
//! nothing else; calls do not influence each other. Every operation resolves
//! to an `Outcome`, with transport and HTTP failures reported as the status
//! code.

use std::sync::Arc;

use crate::classify::{check_response, into_text};
use crate::config::{ConfigCache, ConfigProvider, NonAuthConfig};
use crate::error::ConnectorError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::outcome::Outcome;

/// Anonymous GET/POST access to a backend.
pub struct NonAuthConnector {
    transport: Arc<dyn Transport>,
    config: ConfigCache<NonAuthConfig>,
}

impl NonAuthConnector {
    pub fn new(transport: Arc<dyn Transport>, config: impl ConfigProvider<NonAuthConfig> + 'static) -> Self {
        Self {
            transport,
            config: ConfigCache::new(config),
        }
    }

    /// GET `uri + path` and return the body as text.
    pub async fn get_json(&self, path: &str) -> Outcome<String> {
        self.get(path).await.map(into_text).into()
    }

    /// GET `uri + path` and return the raw body. The payload is absent on
    /// failure.
    pub async fn get_bytes(&self, path: &str) -> Outcome<Vec<u8>> {
        self.get(path).await.map(|response| response.body).into()
    }

    /// POST `json_body` to `uri + path` and return the response body as text.
    pub async fn post_json(&self, path: &str, json_body: &str) -> Outcome<String> {
        self.post(path, json_body).await.into()
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, ConnectorError> {
        let url = self.url(path).await?;
        let response = self.transport.send(HttpRequest::get(url.as_str())).await;
        check_response(response, &url)
    }

    async fn post(&self, path: &str, json_body: &str) -> Result<String, ConnectorError> {
        let url = self.url(path).await?;
        let request = HttpRequest::post(url.as_str(), Some(json_body.as_bytes().to_vec()))
            .with_header("Content-Type", "application/json");
        let response = check_response(self.transport.send(request).await, &url)?;
        Ok(into_text(response))
    }

    async fn url(&self, path: &str) -> Result<String, ConnectorError> {
        let config = self.config.get().await?;
        Ok(format!("{}{path}", config.uri))
    }
}
