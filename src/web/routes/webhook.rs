use axum::extract::State;

use crate::{
    web::{extract::ValidJson, types::WebhookRequest, WebResult},
    AppState,
};

/// `POST /webhook` - an empty `200 OK` once the key checks out and the payload was processed.
#[tracing::instrument(name = "Receiving webhook", skip(app_state, request))]
pub async fn webhook(
    State(app_state): State<AppState>,
    ValidJson(request): ValidJson<WebhookRequest>,
) -> WebResult<()> {
    app_state.webhook_handler.handle(request)?;

    Ok(())
}
