pub mod canned;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use config::RelayConfig;
use llm::chat::new_client;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = RelayConfig::from_args(&args);

    info!("--- Core Configuration ---");
    info!("Server Address: {}", config.server_addr);
    info!("Mode: {}", config.mode_label());
    info!("Gemini Model: {}", config.gemini.model);
    info!("Gemini Base URL: {}", config.gemini.base_url);
    match config.gemini.timeout {
        Some(timeout) => info!("Upstream Timeout: {}s", timeout.as_secs()),
        None => info!("Upstream Timeout: client default"),
    }
    info!("Body Limit: {} bytes", config.body_limit_bytes);
    info!("-------------------------");

    let chat_client = new_client(&config)?;
    let server = Server::new(config, chat_client);
    server.run().await?;

    Ok(())
}
