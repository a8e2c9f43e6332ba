//! Text serialization capability used for login bodies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ConnectorError;

/// Encodes values to text payloads and decodes them back.
pub trait Serializer: Send + Sync {
    fn to_text<T: Serialize>(&self, value: &T) -> Result<String, ConnectorError>;

    fn from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, ConnectorError>;
}

/// JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn to_text<T: Serialize>(&self, value: &T) -> Result<String, ConnectorError> {
        serde_json::to_string(value).map_err(|e| ConnectorError::Serialization(e.to_string()))
    }

    fn from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, ConnectorError> {
        serde_json::from_str(text).map_err(|e| ConnectorError::Deserialization(e.to_string()))
    }
}
