//! Client for the Gemini `generateContent` API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

use super::error::GenerationError;
use super::TextGenerator;

/// Client for calling the Gemini API.
pub struct GeminiGenerator {
    client: Client,
    config: GenerationConfig,
    api_key: String,
}

impl GeminiGenerator {
    /// Create a new GeminiGenerator from config.
    ///
    /// Fails with [`GenerationError::NotConfigured`] if no API key is
    /// available (neither in config nor env var).
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .resolve_api_key()
            .ok_or(GenerationError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, prompt: &str) -> ApiRequest {
        ApiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationSettings {
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.endpoint();
        let request_body = self.build_request(prompt);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Generation API error"
            );

            return Err(GenerationError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;

        let response_body: ApiResponse = serde_json::from_str(&response_text).map_err(|e| {
            GenerationError::ParseError(format!("Failed to parse response JSON: {}", e))
        })?;

        let text = extract_text(response_body)?;

        tracing::debug!(latency_ms, response_len = text.len(), "Generation succeeded");

        Ok(text)
    }
}

/// Join the text parts of the first candidate.
fn extract_text(response: ApiResponse) -> Result<String, GenerationError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    Ok(text)
}

/// `generateContent` request format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    generation_config: GenerationSettings,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    max_output_tokens: u32,
}

/// `generateContent` response format.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
