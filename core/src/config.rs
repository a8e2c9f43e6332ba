//! Connector configuration and the providers that supply it.
//!
//! # Design
//! Connectors take a `ConfigProvider` at construction and only call it on
//! the first request; `ConfigCache` keeps the loaded value for the rest of
//! the connector's lifetime. A failed load is not cached, so the next request
//! asks the provider again.

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::error::{ConfigError, ConnectorError};

/// Configuration of the non-authenticated connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonAuthConfig {
    /// Base URI every relative path is appended to.
    pub uri: String,
}

/// Configuration of the authenticated connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub uri: String,
    pub login_uri: String,
    #[serde(default)]
    pub logout_uri: String,
    #[serde(default)]
    pub register_uri: String,
}

/// Supplies a configuration value of type `C`.
pub trait ConfigProvider<C>: Send + Sync {
    fn load(&self) -> Result<C, ConnectorError>;
}

/// A configuration held in memory.
#[derive(Debug, Clone)]
pub struct StaticConfig<C>(pub C);

impl<C: Clone + Send + Sync> ConfigProvider<C> for StaticConfig<C> {
    fn load(&self) -> Result<C, ConnectorError> {
        Ok(self.0.clone())
    }
}

/// A configuration read from a TOML file when first needed.
#[derive(Debug, Clone)]
pub struct TomlFileConfig<C> {
    path: PathBuf,
    _config: PhantomData<fn() -> C>,
}

impl<C> TomlFileConfig<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _config: PhantomData,
        }
    }

    fn read(&self) -> Result<C, ConfigError>
    where
        C: DeserializeOwned,
    {
        let path = self.path.display().to_string();
        let raw = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }
}

impl<C: DeserializeOwned> ConfigProvider<C> for TomlFileConfig<C> {
    fn load(&self) -> Result<C, ConnectorError> {
        Ok(self.read()?)
    }
}

/// Lazily resolved, cached configuration.
pub(crate) struct ConfigCache<C> {
    provider: Box<dyn ConfigProvider<C>>,
    value: OnceCell<C>,
}

impl<C> ConfigCache<C> {
    pub(crate) fn new(provider: impl ConfigProvider<C> + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            value: OnceCell::new(),
        }
    }

    pub(crate) async fn get(&self) -> Result<&C, ConnectorError> {
        self.value
            .get_or_try_init(|| async { self.provider.load() })
            .await
    }
}
