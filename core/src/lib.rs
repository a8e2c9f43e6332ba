//! Client-side access layer for a JSON web service.
//!
//! # Overview
//! Two connectors share one request/classification core:
//! - `NonAuthConnector` issues anonymous GET/POST requests.
//! - `AuthConnector` logs in with email and password, keeps the returned
//!   bearer token in its session state, and attaches it to every later
//!   request.
//!
//! Every operation resolves to an `Outcome` (`Success`, `Unauthorized` or
//! `Error`); failures are never raised as errors to the caller.
//!
//! # Design
//! - The HTTP exchange is a `Transport` trait object passed at construction;
//!   `ReqwestTransport` is the bundled implementation.
//! - Configuration comes from a `ConfigProvider`, resolved on first use and
//!   cached.
//! - Operations are futures. `dispatch` spawns one and calls a continuation
//!   with its outcome.
//! - Logging goes through `tracing`; install any subscriber to collect it.

mod classify;

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod non_auth;
pub mod outcome;
pub mod reqwest_transport;
pub mod serializer;
pub mod session;
pub mod types;

pub use auth::AuthConnector;
pub use config::{AuthConfig, ConfigProvider, NonAuthConfig, StaticConfig, TomlFileConfig};
pub use dispatch::dispatch;
pub use error::{ConfigError, ConnectorError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use non_auth::NonAuthConnector;
pub use outcome::Outcome;
pub use reqwest_transport::ReqwestTransport;
pub use serializer::{JsonSerializer, Serializer};
pub use session::SessionState;
pub use types::{LoginCredentials, LoginToken};
