//! HTTP transport types and the `Transport` capability.
//!
//! # Design
//! Requests and responses are plain data. The connectors build `HttpRequest`
//! values and classify `HttpResponse` values; a `Transport` implementation
//! performs the actual exchange. The transport never returns `Err`: network
//! failures are folded into an `HttpResponse` with `ok == false` and status 0,
//! so the connectors see one uniform shape for every exchange.

use async_trait::async_trait;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL (base URI already prepended).
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The raw result of one HTTP exchange.
///
/// `ok` is false both for network-level failures (where `status` is 0) and
/// for HTTP error statuses. `error` carries the transport's description of
/// the failure and is empty on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub ok: bool,
    pub status: u16,
    pub body: Vec<u8>,
    pub error: String,
}

impl HttpResponse {
    pub fn success(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            ok: true,
            status,
            body: body.into(),
            error: String::new(),
        }
    }

    pub fn http_error(status: u16, body: impl Into<Vec<u8>>, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            body: body.into(),
            error: error.into(),
        }
    }

    pub fn network_failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: 0,
            body: Vec::new(),
            error: error.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must be safe to share between concurrently running
/// requests. Timeouts, TLS and connection pooling are the implementation's
/// business.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> HttpResponse;
}
