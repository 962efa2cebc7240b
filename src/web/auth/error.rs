use axum::http::StatusCode;

use crate::web::error::ClientError;

pub type Result<T> = core::result::Result<T, AuthError>;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid API Key")]
    InvalidApiKey,
}

impl AuthError {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        // The client sees this error's own message.
        (
            StatusCode::UNAUTHORIZED,
            ClientError::Unauthorized(self.to_string()),
        )
    }
}
