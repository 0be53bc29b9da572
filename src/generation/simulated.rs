//! Local generator used when no remote API is configured.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SimulatedConfig;

use super::error::GenerationError;
use super::TextGenerator;

/// Answers every prompt with a canned reply after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    delay: Duration,
}

impl SimulatedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SimulatedConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }

    fn reply_for(prompt: &str) -> String {
        format!(
            "Gemini would respond to: \"{}\"\n\n(simulated response, set an API key to call the real service)",
            prompt
        )
    }
}

#[async_trait]
impl TextGenerator for SimulatedGenerator {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::reply_for(prompt))
    }
}
