//! API server configuration.

pub use aidoo_core::completion::openai::DEFAULT_BASE_URL as DEFAULT_OPENAI_BASE_URL;

/// Origins allowed to call the relay from a browser.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["https://aidoo.biz", "https://www.aidoo.biz"];

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// Root of the OpenAI-compatible API.
    pub openai_base_url: String,
    /// Credential for the completion service. Checked per request, not at start-up.
    pub openai_api_key: Option<String>,
    /// Exact `Origin` values that receive CORS headers.
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3100".into(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.into(),
            openai_api_key: None,
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default                                        |
    /// |-------------------|------------------------------------------------|
    /// | `BIND_ADDR`       | `127.0.0.1:3100`                               |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1`                    |
    /// | `OPENAI_API_KEY`  | unset                                          |
    /// | `ALLOWED_ORIGINS` | `https://aidoo.biz,https://www.aidoo.biz`      |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            openai_base_url: std::env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.allowed_origins),
        }
    }

    /// Whether `origin` is on the allow-list (exact match).
    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

/// The built-in allow-list as owned strings.
pub fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
