pub mod serve;

// re-export
pub use serve::serve;

use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    web::auth::ApiKeyValidator,
    webhook::{DataProcessor, NoopProcessor, WebhookHandler},
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
    pub body_limit_bytes: usize,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener, body_limit_bytes: usize) -> Self {
        App {
            app_state,
            listener,
            body_limit_bytes,
        }
    }

    /// Builds the app with the default no-op processor.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        Self::build_with_processor(config, Arc::new(NoopProcessor)).await
    }

    pub async fn build_with_processor(
        config: AppConfig,
        processor: Arc<dyn DataProcessor>,
    ) -> Result<Self> {
        let validator = ApiKeyValidator::new(config.webhook_config.api_key);
        let app_state = AppState::new(WebhookHandler::new(validator, processor));

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener, config.net_config.body_limit_bytes);
        Ok(app)
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

#[derive(Debug)]
pub struct InternalState {
    pub webhook_handler: WebhookHandler,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Debug, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(webhook_handler: WebhookHandler) -> Self {
        AppState(Arc::new(InternalState { webhook_handler }))
    }
}
