pub mod gemini;
pub mod local;

use async_trait::async_trait;
use log::info;
use std::error::Error as StdError;
use std::sync::Arc;

use self::gemini::GeminiChatClient;
use self::local::LocalChatClient;
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::chat::{ChatRequest, Source};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub source: Source,
    pub response: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Produces a reply to the request's message. Whether the earlier turns
    /// are read at all is up to the implementation.
    async fn complete(&self, request: &ChatRequest) -> Result<CompletionResponse, RelayError>;

    fn source(&self) -> Source;
}

/// Picks the upstream client when a usable key is configured, the canned
/// responder otherwise.
pub fn new_client(
    config: &RelayConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client: Arc<dyn ChatClient> = match &config.api_key {
        Some(api_key) => {
            let specific_client = GeminiChatClient::from_config(&config.gemini, api_key.clone())?;
            info!(
                "Chat client configured: Gemini, Model={}, BaseURL={}",
                config.gemini.model,
                config.gemini.base_url
            );
            Arc::new(specific_client)
        }
        None => {
            info!("Chat client configured: local canned responses");
            Arc::new(LocalChatClient::new())
        }
    };
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;

    fn config(api_key: Option<&str>) -> RelayConfig {
        RelayConfig {
            server_addr: "127.0.0.1:0".into(),
            body_limit_bytes: 1024,
            gemini: GeminiConfig {
                model: "gemini-2.0-flash".into(),
                base_url: "http://127.0.0.1:9".into(),
                timeout: None,
            },
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn factory_follows_the_resolved_credential() {
        let client = new_client(&config(None)).unwrap();
        assert_eq!(client.source(), Source::Local);

        let client = new_client(&config(Some("AIzaSyDummyKeyThatIsLongEnough"))).unwrap();
        assert_eq!(client.source(), Source::Gemini);
    }
}
