/// Advisory module for AgriPulse
///
/// This module provides a unified interface for the remote generative-AI
/// backend. Gemini is the native provider (text + image diagnostics); Rig
/// covers OpenAI, Anthropic, and Ollama for text advisory, with automatic
/// detection based on environment variables.
///
/// # Architecture
///
/// - `client` - AdvisorAI wrapper and the free functions the views spawn
/// - `providers` - Provider clients (native Gemini, Rig-based)
///
/// # Usage
///
/// ```rust,no_run
/// use agripulse::ai::AdvisorAI;
/// use agripulse::types::AdvisorContext;
///
/// # async fn example() -> anyhow::Result<()> {
/// let ai = AdvisorAI::from_env()?;
/// let advice = ai.advise("How do I price my wheat?", AdvisorContext::Marketing).await?;
/// # Ok(())
/// # }
/// ```
mod client;
pub mod providers;

// Re-export main types
pub use client::{
    AdvisorAI, AdvisorError, AdvisorResult, DIAGNOSTIC_INSTRUCTION, advisor_reply,
    analyze_diagnostic_image,
};
