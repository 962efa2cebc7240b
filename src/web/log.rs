use axum::http::{Method, StatusCode, Uri};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error};

use super::error::ClientError;
use crate::web::{Error, WebResult};

/// Emits one structured line per request.
/// Server errors that end up as a generic 500 are logged with their full detail here,
/// since the client never gets to see it.
pub async fn log_request(
    req_id: &str,
    req_method: Method,
    uri: Uri,
    status_code: StatusCode,
    web_error: Option<&Error>,
    client_status_and_error: Option<&(StatusCode, ClientError)>,
) -> WebResult<()> {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let req_method = req_method.to_string();
    let uri = uri.to_string();
    let client_error_type = client_status_and_error.map(|(_, ce)| ce.as_ref().to_string());
    let status_code = client_status_and_error
        .map(|(sc, _)| *sc)
        .unwrap_or(status_code);
    let web_error_type = web_error.map(|we| we.as_ref().to_string());

    if let Some(we) = web_error.filter(|_| status_code.is_server_error()) {
        error!("SERVER ERROR: {we} ID: {req_id}");
    }

    let logline = LogLine {
        timestamp,
        req_id: req_id.to_string(),
        req_method,
        uri,
        status_code: status_code.as_u16(),
        client_error_type,
        web_error_type,
    };

    debug!("LOGLINE: {}", json!(logline));

    Ok(())
}

#[derive(Serialize)]
struct LogLine {
    timestamp: String,
    req_id: String,

    req_method: String,
    uri: String,
    status_code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    client_error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    web_error_type: Option<String>,
}
