//! API request and response type definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Body of the login request.
///
/// The service expects a nested device-type object alongside the
/// credentials; the values are fixed for this client.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub device_type: DeviceType,
    pub username: &'a str,
    pub password: &'a str,
}

/// Nested device-type descriptor sent with the login request.
#[derive(Debug, Serialize)]
pub struct DeviceType {
    pub string: &'static str,
    pub valid: bool,
}

impl DeviceType {
    pub fn android() -> Self {
        Self {
            string: "android",
            valid: true,
        }
    }
}

impl<'a> LoginRequest<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self {
            device_type: DeviceType::android(),
            username,
            password,
        }
    }
}

/// Login response schema.
///
/// Every field is optional so that a structurally valid JSON object always
/// decodes; [`Session::from_login_response`] reports which required field
/// was absent. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub id: Option<f64>,
    pub token: Option<TokenData>,
}

/// Nested token object in the login response.
#[derive(Debug, Deserialize)]
pub struct TokenData {
    pub string: Option<String>,
}

/// One element of a resource listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub url: String,
}

/// An authenticated session: account id plus bearer token.
///
/// Built once from a successful login and never mutated; it lives only for
/// the duration of the process.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: u64,
    pub token: String,
}

impl Session {
    /// Validate a decoded login response and extract the session fields.
    ///
    /// The service returns the account id as a JSON number; it is used as
    /// an integer in later request paths.
    pub fn from_login_response(response: LoginResponse) -> Result<Self> {
        let id = response.id.ok_or(Error::MissingAccountId)?;
        if !id.is_finite() || id < 0.0 {
            return Err(Error::MissingAccountId);
        }

        let token = response.token.ok_or(Error::MissingToken)?;
        let token = match token.string {
            Some(s) if !s.is_empty() => s,
            _ => return Err(Error::MissingTokenString),
        };

        Ok(Self {
            account_id: id as u64,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_device_type() {
        let body = serde_json::to_value(LoginRequest::new("me@example.com", "pw")).unwrap();
        assert_eq!(body["device_type"]["string"], "android");
        assert_eq!(body["device_type"]["valid"], true);
        assert_eq!(body["username"], "me@example.com");
        assert_eq!(body["password"], "pw");
    }

    #[test]
    fn session_from_valid_response() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"id": 4217, "token": {"string": "tok-abc", "expires": 1}, "plan": "basic"}"#,
        )
        .unwrap();

        let session = Session::from_login_response(response).unwrap();
        assert_eq!(session.account_id, 4217);
        assert_eq!(session.token, "tok-abc");
    }

    #[test]
    fn session_requires_id() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token": {"string": "tok"}}"#).unwrap();
        assert!(matches!(
            Session::from_login_response(response),
            Err(Error::MissingAccountId)
        ));
    }

    #[test]
    fn session_rejects_negative_id() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"id": -1, "token": {"string": "tok"}}"#).unwrap();
        assert!(matches!(
            Session::from_login_response(response),
            Err(Error::MissingAccountId)
        ));
    }

    #[test]
    fn session_requires_token_object() {
        let response: LoginResponse = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(matches!(
            Session::from_login_response(response),
            Err(Error::MissingToken)
        ));
    }

    #[test]
    fn session_requires_token_string() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"id": 1, "token": {"kind": "bearer"}}"#).unwrap();
        assert!(matches!(
            Session::from_login_response(response),
            Err(Error::MissingTokenString)
        ));

        let response: LoginResponse =
            serde_json::from_str(r#"{"id": 1, "token": {"string": ""}}"#).unwrap();
        assert!(matches!(
            Session::from_login_response(response),
            Err(Error::MissingTokenString)
        ));
    }

    #[test]
    fn resources_decode_in_order() {
        let resources: Vec<Resource> = serde_json::from_str(
            r#"[{"url": "https://cdn/a.jpg", "size": 1}, {"url": "https://cdn/b.jpg"}]"#,
        )
        .unwrap();

        let urls: Vec<_> = resources.into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://cdn/a.jpg", "https://cdn/b.jpg"]);
    }

    #[test]
    fn resources_reject_error_object() {
        let result: std::result::Result<Vec<Resource>, _> =
            serde_json::from_str(r#"{"error": "no such account"}"#);
        assert!(result.is_err());
    }
}
