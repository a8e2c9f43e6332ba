//! The classified result of every connector operation.

use crate::error::ConnectorError;

/// What a request produced, delivered exactly once to the caller.
///
/// `Unauthorized` is only produced by login; other authenticated calls that
/// receive a 401 report it as `Error("401")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Unauthorized,
    Error(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Outcome::Unauthorized)
    }

    /// The success payload, absent for every failure.
    pub fn payload(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Diagnostic text of an `Error` outcome.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Outcome::Error(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Unauthorized => Outcome::Unauthorized,
            Outcome::Error(detail) => Outcome::Error(detail),
        }
    }
}

impl<T> From<ConnectorError> for Outcome<T> {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Unauthorized => Outcome::Unauthorized,
            other => Outcome::Error(other.diagnostic()),
        }
    }
}

impl<T> From<Result<T, ConnectorError>> for Outcome<T> {
    fn from(result: Result<T, ConnectorError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => err.into(),
        }
    }
}
