//! Login wire DTOs.
//!
//! # Design
//! Both shapes mirror the backend's JSON exactly: `{"email","password"}` in,
//! `{"token"}` out. The mock-server crate defines its own copies; the
//! integration tests catch schema drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for the login endpoint. Built per call and dropped once the
/// body is serialized.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response body.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginToken {
    pub token: String,
}

impl fmt::Debug for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginToken").field("token", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_to_wire_shape() {
        let json = serde_json::to_value(LoginCredentials::new("a@b.com", "x")).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", LoginCredentials::new("a@b.com", "s3cret"));
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn token_ignores_extra_fields() {
        let token: LoginToken =
            serde_json::from_str(r#"{"token":"abc123","expires_in":3600}"#).unwrap();
        assert_eq!(token.token, "abc123");
    }

    #[test]
    fn token_rejects_missing_field() {
        let result: Result<LoginToken, _> = serde_json::from_str(r#"{"access_token":"abc"}"#);
        assert!(result.is_err());
    }
}
