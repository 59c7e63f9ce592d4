use crate::canned::sample_suggestions;
use crate::config::SERVICE_NAME;
use crate::error::RelayError;
use crate::llm::chat::ChatClient;
use crate::models::chat::{
    now_iso8601,
    ChatRequest,
    ChatResponse,
    HealthResponse,
    RegenerateRequest,
    SuggestionsResponse,
};
use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json,
    Router,
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use log::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub chat_client: Arc<dyn ChatClient>,
}

impl AppState {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }
}

pub fn create_router(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/suggestions", get(suggestions_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/regenerate", post(regenerate_handler))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(cors)
        .with_state(state)
}

/// An empty body reads as `{}`, like a client that sent no JSON at all.
fn parse_body(body: &Bytes) -> Result<Value, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_slice(body)?)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        service: SERVICE_NAME.into(),
        timestamp: now_iso8601(),
    })
}

async fn suggestions_handler() -> Json<SuggestionsResponse> {
    let suggestions = sample_suggestions(&mut rand::thread_rng());
    Json(SuggestionsResponse {
        success: true,
        suggestions,
    })
}

async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, RelayError> {
    let request = ChatRequest::from_json(parse_body(&body)?).inspect_err(|e| {
        debug!("Rejected chat request: {}", e);
    })?;
    info!(
        "Chat request: source={:?} history_turns={}",
        state.chat_client.source(),
        request.history_len()
    );

    let completion = state.chat_client.complete(&request).await?;

    Ok(Json(ChatResponse::reply(completion.source, completion.response)))
}

async fn regenerate_handler(body: Bytes) -> Json<ChatResponse> {
    let request: RegenerateRequest = serde_json::from_slice(&body).unwrap_or_default();
    Json(ChatResponse::rephrase(&request.last_message_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_body_is_an_empty_object() {
        assert_eq!(parse_body(&Bytes::new()).unwrap(), serde_json::json!({}));
        assert_eq!(parse_body(&Bytes::from_static(b" \n")).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn broken_json_is_internal() {
        let err = parse_body(&Bytes::from_static(b"{\"message\":")).unwrap_err();
        assert!(matches!(err, RelayError::Internal(_)));
    }
}
