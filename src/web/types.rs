//! Request and response bodies of the `web` module and their implementations.
//! Includes the structs that get validated during deserialization and tests for those.

use axum::http::StatusCode;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ClientError;

// ###################################
// ->   STRUCTS
// ###################################
/// The body of an inbound `POST /webhook`.
///
/// `api_key` is required and non-empty, `data` is opaque and defaults to `null` when absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub api_key: ApiKey,
    #[serde(default)]
    pub data: Value,
}

/// A non-empty API key as received from the client.
#[derive(Debug, Clone, Deref, Deserialize)]
#[serde(try_from = "String")]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: Into<String>,
    {
        let value = value.into();
        if value.is_empty() {
            return Err(DataParsingError::ApiKeyEmpty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for ApiKey {
    type Error = DataParsingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub status: u16,
    pub message: String,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

impl ApiErrorResponse {
    /// Stamps the client facing error with the current wall-clock time.
    pub fn new(status: StatusCode, client_error: &ClientError) -> Self {
        Self {
            status: status.as_u16(),
            message: client_error.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("apiKey must not be empty")]
    ApiKeyEmpty,
}
