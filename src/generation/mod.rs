//! External text generation capability.
//!
//! The controller only knows the [`TextGenerator`] contract: hand over a
//! prompt, get text back or a failure. Concrete backends:
//!
//! - [`GeminiGenerator`] calls the Gemini `generateContent` endpoint
//! - [`SimulatedGenerator`] answers locally after a fixed delay

mod error;
mod gemini;
mod simulated;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, Provider};

pub use error::GenerationError;
pub use gemini::GeminiGenerator;
pub use simulated::SimulatedGenerator;

/// A backend that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the name of this generator for logging.
    fn name(&self) -> &'static str;

    /// Generate a reply for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Build the generator selected by `config`.
///
/// Selecting Gemini when the client cannot be built (usually a missing
/// API key) falls back to the simulated generator.
pub fn from_config(config: &Config) -> Arc<dyn TextGenerator> {
    match config.generation.provider {
        Provider::Simulated => Arc::new(SimulatedGenerator::from_config(&config.simulated)),
        Provider::Gemini => match GeminiGenerator::new(config.generation.clone()) {
            Ok(generator) => Arc::new(generator),
            Err(err) => {
                tracing::warn!(
                    api_key_env = %config.generation.api_key_env,
                    error = %err,
                    "Gemini generator unavailable, using simulated generator"
                );
                Arc::new(SimulatedGenerator::from_config(&config.simulated))
            }
        },
    }
}
