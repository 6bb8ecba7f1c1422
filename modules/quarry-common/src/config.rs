use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tavily API key. Optional because the credential may also arrive
    /// per-request; a request-level key takes precedence over this one.
    pub tavily_api_key: Option<String>,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a present var is malformed.
    pub fn from_env() -> Self {
        Self {
            tavily_api_key: env::var("TAVILY_API_KEY").ok().filter(|k| !k.is_empty()),
            web_host: env::var("QUARRY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("QUARRY_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("QUARRY_PORT must be a number"),
        }
    }
}
