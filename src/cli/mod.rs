use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Interface the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    #[arg(long, env = "BODY_LIMIT_BYTES", default_value = "10485760")]
    pub body_limit_bytes: usize,

    // --- Gemini Args ---
    /// API key for the Gemini generateContent endpoint. Without a usable key the
    /// server answers from its built-in canned responses.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model name (e.g., gemini-2.0-flash, gemini-1.5-pro)
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    /// Origin of the Gemini API. The path /v1beta/models/<model>:generateContent is appended.
    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    /// Optional timeout in seconds for a single upstream call. Unset means the HTTP client default.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

impl Args {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
