use async_trait::async_trait;
use log::{error, info};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;

use super::{ChatClient, CompletionResponse};
use crate::config::GeminiConfig;
use crate::error::RelayError;
use crate::models::chat::{ChatRequest, ChatTurn, Source, DEFAULT_ROLE};

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 1000;

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
}

#[derive(Deserialize)]
struct GoogleCandidate {
    content: Option<GoogleContent>,
}

#[derive(Deserialize)]
struct GoogleContent {
    #[serde(default)]
    parts: Vec<GooglePart>,
}

#[derive(Deserialize)]
struct GooglePart {
    text: Option<String>,
}

/// History turns in wire form, followed by `message` as the final user turn.
pub fn to_gemini_contents(conversation: &[ChatTurn], message: &str) -> Vec<GeminiContent> {
    conversation
        .iter()
        .map(|turn| GeminiContent {
            role: turn.role.clone(),
            parts: vec![GeminiPart {
                text: turn.content.clone(),
            }],
        })
        .chain(std::iter::once(GeminiContent {
            role: DEFAULT_ROLE.to_string(),
            parts: vec![GeminiPart { text: message.to_string() }],
        }))
        .collect()
}

/// `error.message` from an upstream error body, else the body itself.
pub fn upstream_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}

fn first_candidate_text(body: &str) -> Result<String, RelayError> {
    let parsed: GoogleResponse = serde_json::from_str(body)?;
    parsed.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| RelayError::Internal("Gemini response contained no candidate text".into()))
}

pub struct GeminiChatClient {
    http: HttpClient,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiChatClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Option<std::time::Duration>
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_key,
            model,
            base_url,
        })
    }

    pub fn from_config(
        config: &GeminiConfig,
        api_key: String
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        Self::new(api_key, config.model.clone(), config.base_url.clone(), config.timeout)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<CompletionResponse, RelayError> {
        let history = request.history()?;
        let payload = GeminiRequest {
            contents: to_gemini_contents(&history, &request.message),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };
        info!(
            "GeminiChatClient::complete() → model={} turns={}",
            self.model,
            payload.contents.len()
        );

        let resp = self.http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let pretty = serde_json
                ::from_str::<Value>(&body)
                .and_then(|v| serde_json::to_string_pretty(&v))
                .unwrap_or_else(|_| body.clone());
            error!("Gemini error ({}): {}", status, pretty);
            return Err(RelayError::Upstream(upstream_error_message(&body)));
        }

        let response = first_candidate_text(&body)?;
        Ok(CompletionResponse { source: Source::Gemini, response })
    }

    fn source(&self) -> Source {
        Source::Gemini
    }
}
