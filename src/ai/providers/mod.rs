pub mod gemini;

use anyhow::Result;
use rig::providers;
use std::env;
use tracing::debug;

pub use gemini::GeminiClient;

/// Enum to hold different provider clients
pub enum ProviderClient {
    Gemini(GeminiClient),
    OpenAI(providers::openai::Client),
    Anthropic(providers::anthropic::Client),
    Ollama(providers::ollama::Client),
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> Result<Self> {
        // Priority order:
        // 1. GEMINI_API_KEY → native Gemini (text + image diagnostics)
        // 2. OPENAI_API_KEY → OpenAI
        // 3. ANTHROPIC_API_KEY → Claude
        // 4. LLM_USE_OLLAMA=true → Ollama

        if let Ok(key) = env::var("GEMINI_API_KEY") {
            let endpoint = env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| gemini::DEFAULT_ENDPOINT.to_string());
            let model = env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string());
            debug!(%model, "advisor backed by Gemini");
            return Ok(Self::Gemini(GeminiClient::new(endpoint, model, key)));
        }

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            debug!("advisor backed by OpenAI");
            return Ok(Self::OpenAI(providers::openai::Client::new(&key)));
        }

        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            debug!("advisor backed by Anthropic");
            return Ok(Self::Anthropic(providers::anthropic::Client::new(&key)));
        }

        let use_ollama = env::var("LLM_USE_OLLAMA")
            .unwrap_or_else(|_| "false".into())
            .to_ascii_lowercase();

        if matches!(use_ollama.as_str(), "1" | "true" | "yes" | "on") {
            // Ollama endpoint is configured via OLLAMA_HOST environment variable
            // The Rig client reads this automatically (defaults to http://localhost:11434)
            debug!("advisor backed by Ollama");
            return Ok(Self::Ollama(providers::ollama::Client::new()));
        }

        Err(anyhow::anyhow!(
            "No AI provider configured. Set GEMINI_API_KEY, OPENAI_API_KEY, ANTHROPIC_API_KEY, or LLM_USE_OLLAMA=true"
        ))
    }
}
