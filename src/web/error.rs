use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::webhook::WebhookError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("failed to extract the json body: {0}")]
    JsonExtraction(String),
    #[error("request body over the configured limit: {0}")]
    PayloadTooLarge(String),
    #[error("a request handler panicked: {0}")]
    Panic(String),

    #[error("webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps every server side error to the status code and error the client gets to see.
    /// Anything not classified here becomes a 500 with a generic message.
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::JsonExtraction(detail) => {
                (StatusCode::BAD_REQUEST, InvalidInput(detail.clone()))
            }
            Error::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, PayloadTooLarge),
            Error::Webhook(webhook_er) => webhook_er.status_code_and_client_error(),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
    #[display("Request body is too large")]
    PayloadTooLarge,
    #[display("{_0}")]
    Unauthorized(String),
    #[display("An unexpected error occurred. Please contact support.")]
    ServiceError,
}
