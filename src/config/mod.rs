use crate::cli::Args;
use log::{info, warn};
use std::time::Duration;

/// Keys at or below this length are treated as placeholders and ignored.
pub const MIN_API_KEY_LEN: usize = 20;

pub const SERVICE_NAME: &str = "Gemini Chat API";

/// Runtime configuration resolved once from [`Args`] at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub server_addr: String,
    pub body_limit_bytes: usize,
    pub gemini: GeminiConfig,
    /// `Some` only when the configured key passes [`usable_api_key`].
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn from_args(args: &Args) -> Self {
        let api_key = usable_api_key(args.gemini_api_key.as_deref());
        match (&args.gemini_api_key, &api_key) {
            (_, Some(_)) => info!("Gemini API key configured, relaying chat to upstream."),
            (Some(_), None) => warn!(
                "GEMINI_API_KEY is set but not longer than {} characters. Falling back to local responses.",
                MIN_API_KEY_LEN
            ),
            (None, None) => warn!("GEMINI_API_KEY not set. Falling back to local responses."),
        }

        Self {
            server_addr: args.server_addr(),
            body_limit_bytes: args.body_limit_bytes,
            gemini: GeminiConfig {
                model: args.gemini_model.clone(),
                base_url: args.gemini_base_url.clone(),
                timeout: args.upstream_timeout_secs.map(Duration::from_secs),
            },
            api_key,
        }
    }

    pub fn upstream_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn mode_label(&self) -> &'static str {
        if self.upstream_enabled() {
            "Gemini API Enabled"
        } else {
            "Local Mode"
        }
    }
}

/// Length is the only check made; the key is never validated against the API.
pub fn usable_api_key(raw: Option<&str>) -> Option<String> {
    raw.filter(|key| key.chars().count() > MIN_API_KEY_LEN)
        .map(str::to_string)
}
