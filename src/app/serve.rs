use std::{any::Any, time::Duration};

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderName, Request, Response},
    middleware,
    response::IntoResponse,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::{info, warn, Span};

use crate::{
    web::{self, midware, routes::routes, WebResult, REQUEST_ID_HEADER},
    App, AppState,
};

/// The core async function returning a future that will serve this application.
///
/// Accepts an `App` and sets up a TraceLayer that provides console logging.
/// Resolves once a shutdown signal (CTRL+C / SIGTERM) was received and in-flight requests finished.
///
/// Current implementation might return an IO error from `axum::serve`
pub async fn serve(app: App) -> WebResult<()> {
    let App {
        app_state,
        listener,
        body_limit_bytes,
    } = app;

    axum::serve(listener, build_router(app_state, body_limit_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{:<20} - stopped gracefully", "serve");
    Ok(())
}

/// Routes wrapped in the full middleware stack.
pub fn build_router(app_state: AppState, body_limit_bytes: usize) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace_layer = build_trace_layer();

    Router::new()
        .merge(routes(app_state))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        // Innermost, so a panic response still passes through the mapper below.
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            ServiceBuilder::new()
                // Set UUID per request
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    MakeRequestUuid,
                ))
                .layer(trace_layer)
                // Responses travel the stack bottom up, so the mapper sees the propagated
                // request id and any error produced below it.
                .layer(middleware::map_response(midware::response_mapper))
                // Propagate UUID to response, keep it last so it processes the response first!
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
}

/// Converts a panic into a `web::Error` so it goes through the same mapping as any other
/// unclassified error.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    web::Error::Panic(detail).into_response()
}

/// A helper function that sets up the `tower_http::TraceLayer` - tracing configuration.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let uuid = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .map(|uuid| uuid.to_str().unwrap_or("").to_string());

            tracing::error_span!(
                "serve",
                id = uuid,
                method = req.method().to_string(),
                path = req.uri().path()
            )
        })
        .on_request(|req: &Request<Body>, _s: &Span| tracing::info!("START @ {}", req.uri()))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let st_code = res.status().as_u16();

            if (400..=599).contains(&st_code) {
                tracing::error!("END in: {:?} - STATUS: {st_code}", latency)
            } else {
                tracing::info!("END in: {:?} - STATUS: {st_code}", latency)
            }
        })
}

/// Waits for CTRL+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => warn!("Received CTRL+C, shutting down"),
        () = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
