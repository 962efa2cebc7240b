//! Shared setup for the API tests.
use std::{net::SocketAddr, sync::Arc, sync::OnceLock};

use anyhow::Result;
use hookomat::{
    config::{AppConfig, NetConfig, WebhookConfig, DEFAULT_BODY_LIMIT_BYTES},
    init_dbg_tracing,
    webhook::{DataProcessor, NoopProcessor},
    App,
};
use reqwest::{header::CONTENT_TYPE, Response};
use serde_json::Value;

pub const VALID_API_KEY: &str = "your-api-key";
pub const GENERIC_ERROR_MSG: &str = "An unexpected error occurred. Please contact support.";

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
}

/// Set `TEST_LOG` to see the server logs while the tests run.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_processor(Arc::new(NoopProcessor)).await
    }

    pub async fn spawn_with_processor(processor: Arc<dyn DataProcessor>) -> Result<Self> {
        Self::spawn_with(test_config(), processor).await
    }

    /// Serves the app on a tokio task with the given config.
    pub async fn spawn_with(config: AppConfig, processor: Arc<dyn DataProcessor>) -> Result<Self> {
        init_test_subscriber();

        let app = App::build_with_processor(config, processor).await?;
        let addr = app.local_addr()?;

        tokio::spawn(hookomat::serve(app));

        Ok(TestApp {
            addr,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn post_webhook(&self, body: &Value) -> Result<Response> {
        let res = self
            .http_client
            .post(self.url("/webhook"))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    /// Posts the body verbatim, with `Content-Type: application/json` unless `content_type` says otherwise.
    pub async fn post_webhook_raw(
        &self,
        body: &'static str,
        content_type: Option<&str>,
    ) -> Result<Response> {
        let mut req = self.http_client.post(self.url("/webhook")).body(body);
        if let Some(content_type) = content_type {
            req = req.header(CONTENT_TYPE, content_type);
        }
        Ok(req.send().await?)
    }
}

/// Localhost on an OS assigned port, accepting `VALID_API_KEY`.
pub fn test_config() -> AppConfig {
    AppConfig {
        net_config: NetConfig {
            host: [127, 0, 0, 1],
            // Binding port 0 triggers an OS scan for an available port.
            app_port: 0,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        },
        webhook_config: WebhookConfig::new(VALID_API_KEY),
    }
}

/// Current wall-clock time in milliseconds since the UNIX epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
