pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod signup;
pub use self::signup::signup;

pub mod start;
pub use self::start::start;

// common payload and reply shapes for the handlers
use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Email and password pair submitted by a caller
#[derive(ToSchema, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    // Presence is the only local check, format and strength belong to the
    // provider
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Canonical response body, `message` always present, `error` and `user`
/// only when they carry a value
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ApiResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
            user: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_user(mut self, subject: Option<String>) -> Self {
        self.user = subject;
        self
    }
}

pub type Reply = (StatusCode, Json<ApiResponse>);

/// Single normalization point for every route reply
#[must_use]
pub fn reply(status: StatusCode, response: ApiResponse) -> Reply {
    (status, Json(response))
}

/// Missing or malformed credentials, the provider is never called
#[must_use]
pub fn missing_credentials() -> Reply {
    reply(
        StatusCode::BAD_REQUEST,
        ApiResponse::new("Missing email or password."),
    )
}

/// Provider transport failure, always 400 with the detail attached
#[must_use]
pub fn provider_error(detail: &anyhow::Error) -> Reply {
    reply(
        StatusCode::BAD_REQUEST,
        ApiResponse::new("Authentication provider error.").with_error(detail.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_omits_empty_keys() {
        let body = serde_json::to_value(ApiResponse::new("hello")).unwrap();

        assert_eq!(body, serde_json::json!({"message": "hello"}));
    }

    #[test]
    fn test_api_response_keeps_error_and_user() {
        let response = ApiResponse::new("hello")
            .with_error("detail")
            .with_user(Some("user-1".to_string()));
        let body = serde_json::to_value(response).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"message": "hello", "error": "detail", "user": "user-1"})
        );
    }

    #[test]
    fn test_credentials_presence() {
        let complete = Credentials {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(complete.is_complete());

        let missing = Credentials {
            email: "a@b.com".to_string(),
            password: String::new(),
        };
        assert!(!missing.is_complete());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{credentials:?}");

        assert!(debug.contains("a@b.com"));
        assert!(debug.contains("***"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_missing_credentials_is_bad_request() {
        let (status, Json(body)) = missing_credentials();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing email or password.");
        assert!(body.error.is_none());
    }

    #[test]
    fn test_provider_error_carries_detail() {
        let err = anyhow::anyhow!("connection refused");
        let (status, Json(body)) = provider_error(&err);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("connection refused"));
    }
}
