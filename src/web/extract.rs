//! Boundary validation of request bodies.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use derive_more::Deref;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::web::Error;

/// Same as `axum::Json` but every rejection becomes a `web::Error`, so malformed bodies,
/// missing fields and a missing `Content-Type` all end up as a 400 with the usual error body.
/// A body over the `DefaultBodyLimit` is a 413 instead.
#[derive(Debug, Deref)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    #[instrument(skip_all, name = "ValidJson from_request")]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Error::PayloadTooLarge(rejection.body_text());
        }
        Error::JsonExtraction(rejection.body_text())
    }
}
