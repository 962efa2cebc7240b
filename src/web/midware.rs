use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::web::{log, types::ApiErrorResponse, Error, REQUEST_ID_HEADER};

/// Turns an `Error` stashed in the response extensions into the client facing
/// `ApiErrorResponse`, and logs every request on the way out.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    let req_id = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });
    let req_id_str = req_id.to_str().unwrap_or("unknown").to_string();

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let body = ApiErrorResponse::new(*status, cl_err);

        let mut res = (*status, Json(body)).into_response();
        res.headers_mut().insert(REQUEST_ID_HEADER, req_id.clone());
        res
    });

    if let Err(er) = log::log_request(
        &req_id_str,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error.as_ref(),
    )
    .await
    {
        tracing::warn!("failed to log request {req_id_str}: {er}");
    }

    err_resp.unwrap_or(resp)
}
