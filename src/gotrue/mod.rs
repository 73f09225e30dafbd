use crate::{cli::globals::GlobalArgs, pordego::APP_USER_AGENT};
use anyhow::{anyhow, Result};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tracing::{debug, error, instrument};
use url::Url;

/// Result of a provider call that completed without a transport fault
#[derive(Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Provider accepted the operation, `subject` is the opaque account or
    /// session-owner identifier when the provider returned one
    Granted { subject: Option<String> },
    /// Provider completed but refused the operation
    Denied { detail: String },
}

/// GoTrue client, built once at startup and shared read-only across requests
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

impl Client {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the provider
    /// URL cannot be turned into an endpoint
    pub fn new(globals: &GlobalArgs) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;

        // Reject an unusable URL at startup instead of on the first request
        endpoint_url(&globals.gotrue_url, "/signup")?;

        Ok(Self {
            http,
            base_url: globals.gotrue_url.clone(),
            api_key: globals.gotrue_api_key.clone(),
        })
    }

    /// Create an account for the given credentials
    /// # Errors
    /// Returns an error if the provider request fails in transport, returns a
    /// non-JSON body, or fails with a server-side status
    #[instrument(skip(password))]
    pub async fn create_account(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let signup_url = endpoint_url(&self.base_url, "/signup")?;

        let payload = json!({
            "email": email,
            "password": password,
        });

        let response = self
            .http
            .post(&signup_url)
            .header("apikey", self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        let json_response: Value = match response.json().await {
            Ok(json_response) => json_response,
            Err(e) => return Err(anyhow!("{} - {}, {}", signup_url, status, e)),
        };

        if status.is_success() {
            let subject = subject(&json_response);

            debug!("account created, subject: {:?}", subject);

            return Ok(AuthOutcome::Granted { subject });
        }

        denied_or_error(&signup_url, status, &json_response)
    }

    /// Create a session for the given credentials
    /// # Errors
    /// Returns an error if the provider request fails in transport, returns a
    /// non-JSON body, or fails with a server-side status
    #[instrument(skip(password))]
    pub async fn create_session(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let token_url = endpoint_url(&self.base_url, "/token")?;

        let payload = json!({
            "email": email,
            "password": password,
        });

        let response = self
            .http
            .post(&token_url)
            .query(&[("grant_type", "password")])
            .header("apikey", self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        let json_response: Value = match response.json().await {
            Ok(json_response) => json_response,
            Err(e) => return Err(anyhow!("{} - {}, {}", token_url, status, e)),
        };

        if status.is_success() {
            let subject = subject(&json_response);

            debug!("session created, subject: {:?}", subject);

            return Ok(AuthOutcome::Granted { subject });
        }

        denied_or_error(&token_url, status, &json_response)
    }
}

/// Build a provider endpoint URL under /auth/v1
#[instrument]
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String> {
    let url = Url::parse(base_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    let endpoint_url = format!("{scheme}://{host}:{port}/auth/v1{path}");

    debug!("endpoint URL: {}", endpoint_url);

    Ok(endpoint_url)
}

// GoTrue is not consistent about the error key across versions
fn error_message(json_response: &Value) -> &str {
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| json_response.get(key).and_then(Value::as_str))
        .unwrap_or_default()
}

fn get_required_str<'a>(json_response: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = json_response;
    for key in path {
        current = current.get(*key)?;
    }
    current.as_str()
}

// Session responses nest the account under "user", signup responses may
// return the account object directly
fn subject(json_response: &Value) -> Option<String> {
    get_required_str(json_response, &["user", "id"])
        .or_else(|| get_required_str(json_response, &["id"]))
        .map(ToString::to_string)
}

fn denied_or_error(url: &str, status: StatusCode, json_response: &Value) -> Result<AuthOutcome> {
    let detail = error_message(json_response);

    // A client error with a provider message is a business refusal, anything
    // else is a transport-class fault for the caller to wrap
    if status.is_client_error() && !detail.is_empty() {
        debug!("provider denied the operation: {}", detail);

        return Ok(AuthOutcome::Denied {
            detail: detail.to_string(),
        });
    }

    error!("provider request failed: {} - {}", url, status);

    Err(anyhow!("{} - {}, {}", url, status, detail))
}
