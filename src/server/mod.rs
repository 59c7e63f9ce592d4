pub mod api;

use crate::config::RelayConfig;
use crate::llm::chat::ChatClient;
use std::error::Error;
use std::sync::Arc;
use axum::Router;
use tokio::net::TcpListener;
use log::info;

use self::api::{create_router, AppState};

pub struct Server {
    config: RelayConfig,
    chat_client: Arc<dyn ChatClient>,
}

impl Server {
    pub fn new(config: RelayConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        Self { config, chat_client }
    }

    pub fn router(&self) -> Router {
        create_router(AppState::new(self.chat_client.clone()), self.config.body_limit_bytes)
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = &self.config.server_addr;
        let listener = TcpListener::bind(addr).await.map_err(|e|
            format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e)
        )?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("⚙️ Mode: {}", self.config.mode_label());

        axum::serve(listener, self.router().into_make_service()).await?;
        Ok(())
    }
}
