//! Connector for endpoints behind a bearer-token session.
//!
//! # Design
//! `login` trades email and password for a token and stores it in the
//! connector's `SessionState`. Every other operation first checks the session
//! and, if it is inactive, resolves to `Error("Not logged in!")` without
//! touching the transport. The token is read once per request, when the
//! headers are built, so a login completing mid-flight only affects requests
//! built after it.
//!
//! Login is the only operation that reports `Unauthorized`; a 401 on any
//! other call is an ordinary `Error("401")`.

use std::sync::Arc;

use tracing::{error, info};

use crate::classify::{check_response, into_text};
use crate::config::{AuthConfig, ConfigCache, ConfigProvider};
use crate::error::ConnectorError;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::outcome::Outcome;
use crate::serializer::{JsonSerializer, Serializer};
use crate::session::SessionState;
use crate::types::{LoginCredentials, LoginToken};

/// Session-authenticated access to a backend.
pub struct AuthConnector<S = JsonSerializer> {
    transport: Arc<dyn Transport>,
    serializer: S,
    config: ConfigCache<AuthConfig>,
    session: SessionState,
}

impl AuthConnector<JsonSerializer> {
    pub fn new(transport: Arc<dyn Transport>, config: impl ConfigProvider<AuthConfig> + 'static) -> Self {
        Self::with_serializer(transport, config, JsonSerializer)
    }
}

impl<S: Serializer> AuthConnector<S> {
    pub fn with_serializer(
        transport: Arc<dyn Transport>,
        config: impl ConfigProvider<AuthConfig> + 'static,
        serializer: S,
    ) -> Self {
        Self {
            transport,
            serializer,
            config: ConfigCache::new(config),
            session: SessionState::new(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_active()
    }

    /// Current bearer token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Exchange credentials for a session token.
    ///
    /// On any failure the session is reset to logged out, whatever its state
    /// was before.
    pub async fn login(&self, email: &str, password: &str) -> Outcome<()> {
        info!(email, "attempting to login");
        match self.try_login(email, password).await {
            Ok(token) => {
                self.session.activate(token);
                Outcome::Success(())
            }
            Err(err) => {
                self.session.deactivate();
                err.into()
            }
        }
    }

    /// Reset the session locally. No request is sent.
    pub fn log_out(&self) {
        self.session.deactivate();
        info!("logged out");
    }

    /// Authenticated GET returning the body as text.
    pub async fn get_json_without_params(&self, path: &str) -> Outcome<String> {
        self.send_authorized(HttpMethod::Get, path, None).await.into()
    }

    /// Authenticated POST without a body, returning the body as text.
    pub async fn post_json_text_without_params(&self, path: &str) -> Outcome<String> {
        self.send_authorized(HttpMethod::Post, path, None).await.into()
    }

    /// Authenticated POST of `json_param`, returning the body as text.
    pub async fn post_for_json_text_with_json_param(&self, path: &str, json_param: &str) -> Outcome<String> {
        self.send_authorized(HttpMethod::Post, path, Some(json_param)).await.into()
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<String, ConnectorError> {
        let config = self.config.get().await?;
        let url = format!("{}{}", config.uri, config.login_uri);
        let body = self.serializer.to_text(&LoginCredentials::new(email, password))?;

        let request = HttpRequest::post(url.as_str(), Some(body.into_bytes()))
            .with_header("Content-Type", "application/json");
        let response = self.transport.send(request).await;

        if !response.ok && response.status == 401 {
            error!(url = %url, "error 401: unauthorized");
            return Err(ConnectorError::Unauthorized);
        }
        let response = check_response(response, &url)?;

        let envelope: LoginToken = self.serializer.from_text(&into_text(response)).map_err(|e| {
            error!(url = %url, error = %e, "login response carried no token");
            e
        })?;
        Ok(envelope.token)
    }

    async fn send_authorized(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, ConnectorError> {
        if !self.session.is_active() {
            return Err(ConnectorError::NotLoggedIn);
        }
        let config = self.config.get().await?;
        let url = format!("{}{path}", config.uri);

        let request = match method {
            HttpMethod::Get => HttpRequest::get(url.as_str()),
            HttpMethod::Post => HttpRequest::post(url.as_str(), body.map(|b| b.as_bytes().to_vec())),
        };
        let request = self.authorize(request)?;

        let response = check_response(self.transport.send(request).await, &url)?;
        Ok(into_text(response))
    }

    /// Attach the JSON and bearer headers using the token stored right now.
    fn authorize(&self, request: HttpRequest) -> Result<HttpRequest, ConnectorError> {
        let token = self.session.token().ok_or(ConnectorError::NotLoggedIn)?;
        Ok(request
            .with_header("Content-Type", "application/json")
            .with_header("Accept", "application/json")
            .with_header("Authorization", format!("Bearer {token}")))
    }
}

impl<S> std::fmt::Debug for AuthConnector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConnector")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
