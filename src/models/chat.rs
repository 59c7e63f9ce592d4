use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RelayError;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const REPHRASE_PREFIX: &str = "Let me rephrase that:\n\n";

/// Current instant in the `2024-01-01T00:00:00.000Z` form.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Role given to history turns that carry none.
pub const DEFAULT_ROLE: &str = "user";

/// One earlier message of the conversation, normalized for forwarding.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    /// Reads a turn the way a loose JSON client sends it: a falsy or missing
    /// `role` becomes [`DEFAULT_ROLE`], a falsy or missing `content` becomes
    /// `""`, and any other non-string value is kept as its JSON text.
    pub fn from_value(turn: &Value) -> Result<Self, RelayError> {
        if turn.is_null() {
            return Err(RelayError::Internal("conversation contains a null turn".into()));
        }
        Ok(Self {
            role: truthy_text(turn.get("role")).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            content: truthy_text(turn.get("content")).unwrap_or_default(),
        })
    }
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    /// Raw `conversation` field, `Null` when absent. Only read by clients
    /// that forward history, through [`ChatRequest::history`].
    pub conversation: Value,
}

impl ChatRequest {
    /// Validates a raw `/api/chat` body. A missing, empty or non-string
    /// `message` is invalid input.
    pub fn from_json(mut body: Value) -> Result<Self, RelayError> {
        let message = match body.get("message") {
            Some(Value::String(message)) if !message.is_empty() => message.clone(),
            _ => return Err(RelayError::InvalidInput(MESSAGE_REQUIRED.to_string())),
        };

        let conversation = body
            .get_mut("conversation")
            .map(Value::take)
            .unwrap_or(Value::Null);

        Ok(Self { message, conversation })
    }

    /// Earlier turns in order. A `conversation` that is not a list is a
    /// malformed body.
    pub fn history(&self) -> Result<Vec<ChatTurn>, RelayError> {
        match &self.conversation {
            Value::Null => Ok(Vec::new()),
            Value::Array(turns) => turns.iter().map(ChatTurn::from_value).collect(),
            _ => Err(RelayError::Internal("conversation is not a list".into())),
        }
    }

    pub fn history_len(&self) -> usize {
        self.conversation.as_array().map_or(0, Vec::len)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Gemini,
    Local,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatResponse {
    pub fn reply(source: Source, response: String) -> Self {
        Self {
            success: true,
            source: Some(source),
            response: Some(response),
            error: None,
            timestamp: Some(now_iso8601()),
        }
    }

    pub fn failure(source: Option<Source>, error: String) -> Self {
        Self {
            success: false,
            source,
            response: None,
            error: Some(error),
            timestamp: None,
        }
    }

    pub fn rephrase(last_message: &str) -> Self {
        Self {
            success: true,
            source: None,
            response: Some(format!("{}{}", REPHRASE_PREFIX, last_message)),
            error: None,
            timestamp: Some(now_iso8601()),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegenerateRequest {
    #[serde(rename = "lastMessage", default)]
    pub last_message: Option<Value>,
}

impl RegenerateRequest {
    /// Text interpolated into the rephrase template. Never fails.
    pub fn last_message_text(&self) -> String {
        match &self.last_message {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
}
