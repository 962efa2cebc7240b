//! A webhook receiver: `POST /webhook` checks the API key embedded in the JSON body and hands the
//! payload to a pluggable `DataProcessor`.

pub mod app;
pub mod config;
mod error;
pub mod web;
pub mod webhook;

pub use app::{serve, App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Compact, time-less console output. Defaults to `debug` unless `RUST_LOG` says otherwise.
pub fn init_dbg_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(env_filter)
        .compact()
        .init();
}

/// Full format with timestamps and targets. Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_production_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(env_filter)
        .init();
}
