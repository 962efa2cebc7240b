//! Webhook orchestration: validate the API key, then hand the opaque payload to a `DataProcessor`.

mod processor;

pub use processor::{DataProcessor, NoopProcessor, ProcessError};

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use tracing::info;

use crate::web::{
    auth::{ApiKeyValidator, AuthError},
    types::WebhookRequest,
    ClientError,
};

pub type Result<T> = core::result::Result<T, WebhookError>;

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
    #[error("processing error: {0}")]
    Process(#[from] ProcessError),
}

impl WebhookError {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        match self {
            WebhookError::Auth(auth_er) => auth_er.status_code_and_client_error(),
            WebhookError::Process(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ClientError::ServiceError)
            }
        }
    }
}

#[derive(Clone)]
pub struct WebhookHandler {
    validator: ApiKeyValidator,
    processor: Arc<dyn DataProcessor>,
}

impl WebhookHandler {
    pub fn new(validator: ApiKeyValidator, processor: Arc<dyn DataProcessor>) -> Self {
        WebhookHandler {
            validator,
            processor,
        }
    }

    /// Rejects an unknown key before the payload is looked at.
    /// A valid key forwards `data` to the processor.
    pub fn handle(&self, request: WebhookRequest) -> Result<()> {
        self.validator.validate(&request.api_key)?;
        self.process(&request.data)?;

        info!("Successfully processed webhook request.");
        Ok(())
    }

    fn process(&self, data: &Value) -> core::result::Result<(), ProcessError> {
        self.processor.process(data)
    }
}

impl std::fmt::Debug for WebhookHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookHandler")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}
