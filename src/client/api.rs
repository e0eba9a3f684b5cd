use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::webinar::SignupRequest;
use crate::routes::webinar::SIGNUP_PATH;

pub const FALLBACK_ERROR: &str = "Something went wrong";

/// Why a submission did not succeed. Both kinds are shown to the user the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Rejected(message) | SubmitError::Transport(message) => message,
        }
    }
}

#[async_trait]
pub trait SignupApi: Send + Sync {
    async fn submit(&self, request: &SignupRequest) -> Result<(), SubmitError>;
}

/// Pulls a readable message out of an error body: `error` first (the delivery
/// cause), then `message`.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["error", "message"].iter().find_map(|key| {
                json.get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

pub struct HttpSignupApi {
    client: Client,
    endpoint: String,
}

impl HttpSignupApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SIGNUP_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SignupApi for HttpSignupApi {
    async fn submit(&self, request: &SignupRequest) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("Sign-up rejected ({}): {}", status, body);
        Err(SubmitError::Rejected(error_message(&body)))
    }
}
