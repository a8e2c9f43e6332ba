//! Recording transport shared by the connector test suites.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use webservice_connector::{AuthConfig, HttpRequest, HttpResponse, NonAuthConfig, StaticConfig, Transport};

pub const BASE_URL: &str = "http://localhost:3000";

/// Replays queued responses in order and records every request it is given.
///
/// Once the queue is empty the fallback response (404 by default) is
/// returned.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses(responses: impl IntoIterator<Item = HttpResponse>) -> Arc<Self> {
        let transport = Self::new();
        transport.responses.lock().unwrap().extend(responses);
        transport
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> HttpResponse {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::http_error(404, Vec::new(), "HTTP/1.1 404 Not Found"))
    }
}

pub fn auth_config() -> StaticConfig<AuthConfig> {
    StaticConfig(AuthConfig {
        uri: BASE_URL.to_string(),
        login_uri: "/auth/login".to_string(),
        logout_uri: "/auth/logout".to_string(),
        register_uri: "/auth/register".to_string(),
    })
}

pub fn non_auth_config() -> StaticConfig<NonAuthConfig> {
    StaticConfig(NonAuthConfig {
        uri: BASE_URL.to_string(),
    })
}

pub fn token_response(token: &str) -> HttpResponse {
    HttpResponse::success(200, serde_json::json!({ "token": token }).to_string().into_bytes())
}

pub fn status_error(status: u16) -> HttpResponse {
    HttpResponse::http_error(status, Vec::new(), format!("HTTP/1.1 {status}"))
}
