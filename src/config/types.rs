use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub simulated: SimulatedConfig,
}

/// Which text generation capability backs the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Gemini `generateContent` API.
    #[default]
    Gemini,
    /// Local stand-in that answers after a fixed delay.
    Simulated,
}

/// Settings for the remote generation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Base URL for the API (e.g., "https://generativelanguage.googleapis.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model name used in the request path.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds (default: 60).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Upper bound on generated tokens (default: 1024).
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

/// Settings for the simulated generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedConfig {
    /// Artificial latency in milliseconds (default: 800).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_seconds() -> u32 {
    60
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_delay_ms() -> u64 {
    800
}

impl GenerationConfig {
    /// Resolve the API key from config, falling back to the environment.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}
