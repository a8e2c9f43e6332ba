//! `Transport` backed by reqwest.

use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::debug;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Sends requests through a shared `reqwest::Client`.
///
/// Statuses of 400 and above are reported with `ok == false` and the error
/// text `HTTP/1.1 <code> <reason>`. Failures to connect or to read the body
/// are reported as network failures (status 0).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> HttpResponse {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return HttpResponse::network_failure(e.to_string()),
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => return HttpResponse::network_failure(e.to_string()),
        };

        if status.is_client_error() || status.is_server_error() {
            HttpResponse::http_error(status.as_u16(), body, format!("HTTP/1.1 {status}"))
        } else {
            HttpResponse::success(status.as_u16(), body)
        }
    }
}
