use crate::types::{AdvisorContext, DiagnosticImage};
use anyhow::Result;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use std::env;

use super::providers::ProviderClient;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone)]
pub struct AdvisorError(String);

impl AdvisorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AdvisorError {}

impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::new(err.to_string())
    }
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Instruction paired with every diagnostics upload.
pub const DIAGNOSTIC_INSTRUCTION: &str = "Analyze this image of a crop or livestock. Identify any visible signs of disease, pests, or nutritional deficiencies. Provide a diagnosis and recommended immediate actions for the farmer.";

/// Unified advisory client for AgriPulse
/// Handles provider auto-detection and per-context agent configuration
pub struct AdvisorAI {
    client: ProviderClient,
}

impl AdvisorAI {
    /// Create the advisory client from environment configuration
    pub fn from_env() -> Result<Self> {
        let client = ProviderClient::from_env()?;
        Ok(Self { client })
    }

    /// Single text-generation request under the given advisory context.
    /// The context's system instruction conditions the model; the response
    /// text may be empty and the caller decides what to show for that.
    pub async fn advise(&self, prompt: &str, context: AdvisorContext) -> Result<String> {
        match &self.client {
            ProviderClient::Gemini(client) => {
                client
                    .generate(Some(context.system_instruction()), prompt)
                    .await
            }
            ProviderClient::OpenAI(client) => {
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(context.system_instruction())
                    .max_tokens(4096)
                    .temperature(0.7)
                    .build();

                Ok(agent.prompt(prompt).await?)
            }
            ProviderClient::Anthropic(client) => {
                let model = env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(context.system_instruction())
                    .max_tokens(4096)
                    .temperature(0.7)
                    .build();

                Ok(agent.prompt(prompt).await?)
            }
            ProviderClient::Ollama(client) => {
                let model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:latest".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(context.system_instruction())
                    .build();

                Ok(agent.prompt(prompt).await?)
            }
        }
    }

    /// Single multimodal request pairing the uploaded image with the fixed
    /// diagnostic instruction. Only the Gemini provider accepts image bytes.
    pub async fn diagnose(&self, image: &DiagnosticImage) -> Result<String> {
        match &self.client {
            ProviderClient::Gemini(client) => {
                client
                    .generate_with_image(DIAGNOSTIC_INSTRUCTION, image)
                    .await
            }
            _ => Err(anyhow::anyhow!(
                "image diagnostics requires the Gemini provider; set GEMINI_API_KEY"
            )),
        }
    }
}

// ============================================
// Public API Functions
// ============================================

/// Advisory request for one prompt under one context tag.
pub async fn advisor_reply(prompt: String, context: AdvisorContext) -> AdvisorResult<String> {
    let ai = AdvisorAI::from_env()
        .map_err(|e| AdvisorError::new(format!("Failed to initialize advisor: {}", e)))?;

    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(AdvisorError::new("No prompt provided"));
    }

    ai.advise(trimmed, context)
        .await
        .map_err(|e| AdvisorError::new(format!("Advisor error: {}", e)))
}

/// Diagnostic analysis of one uploaded image.
pub async fn analyze_diagnostic_image(image: DiagnosticImage) -> AdvisorResult<String> {
    let ai = AdvisorAI::from_env()
        .map_err(|e| AdvisorError::new(format!("Failed to initialize advisor: {}", e)))?;

    ai.diagnose(&image)
        .await
        .map_err(|e| AdvisorError::new(format!("Diagnostics error: {}", e)))
}
