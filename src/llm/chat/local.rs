use async_trait::async_trait;
use log::debug;

use super::{ChatClient, CompletionResponse};
use crate::canned::ResponseCategory;
use crate::error::RelayError;
use crate::models::chat::{ChatRequest, Source};

/// Answers from the built-in response table. History is ignored.
#[derive(Debug, Default, Clone)]
pub struct LocalChatClient;

impl LocalChatClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatClient for LocalChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<CompletionResponse, RelayError> {
        let category = ResponseCategory::classify(&request.message);
        let response = category.pick(&mut rand::thread_rng()).to_string();
        debug!("LocalChatClient::complete() → category={}", category);
        Ok(CompletionResponse { source: Source::Local, response })
    }

    fn source(&self) -> Source {
        Source::Local
    }
}
