use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip)]
    pub created_at: Option<OffsetDateTime>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }
}

/// Advisory domain selected in the advisor screen. Each context carries the
/// system instruction sent alongside every prompt issued under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorContext {
    Management,
    Marketing,
    Hybrid,
}

impl AdvisorContext {
    pub const ALL: [AdvisorContext; 3] = [
        AdvisorContext::Management,
        AdvisorContext::Marketing,
        AdvisorContext::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdvisorContext::Management => "Management",
            AdvisorContext::Marketing => "Marketing",
            AdvisorContext::Hybrid => "Hybrid",
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        match self {
            AdvisorContext::Management => {
                "You are an expert agricultural project manager. Provide practical, step-by-step advice on farm operations, resource allocation, and seasonal planning."
            }
            AdvisorContext::Marketing => {
                "You are a specialist in agricultural commodities and marketing. Advise farmers on how to brand their produce, find buyers, understand market trends, and maximize profit."
            }
            AdvisorContext::Hybrid => {
                "You are an agronomist specializing in crop breeding. Help farmers understand the potential of hybridizing different varieties, focusing on yield, disease resistance, and climate adaptation."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("expected a data URL with a mime type header")]
    MissingHeader,
    #[error("expected base64-encoded image data")]
    NotBase64,
}

/// Encoded image payload held by the diagnostics screen. `data` is raw
/// base64 without the data-URL header; a new upload replaces the whole value.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticImage {
    pub mime_type: String,
    pub data: String,
}

impl DiagnosticImage {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: BASE64.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL, stripping the header.
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let rest = url.strip_prefix("data:").ok_or(ImageError::MissingHeader)?;
        let (header, payload) = rest.split_once(',').ok_or(ImageError::MissingHeader)?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or(ImageError::NotBase64)?;
        if mime_type.is_empty() {
            return Err(ImageError::MissingHeader);
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }

    /// Data URL form for the inline `<img>` preview.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Two parent varieties entered in the hybrid lab, combined into one
/// simulation prompt at submission time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HybridQuery {
    pub parent_a: String,
    pub parent_b: String,
}

impl HybridQuery {
    pub fn new(parent_a: impl Into<String>, parent_b: impl Into<String>) -> Self {
        Self {
            parent_a: parent_a.into(),
            parent_b: parent_b.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.parent_a.trim().is_empty() && !self.parent_b.trim().is_empty()
    }

    pub fn prompt(&self) -> String {
        format!(
            "Simulate a hybrid cross between {} and {}. Describe the potential characteristics of the new hybrid, including yield potential, disease resistance, climate suitability, and any specific management requirements. Format as a professional agronomy report.",
            self.parent_a.trim(),
            self.parent_b.trim(),
        )
    }
}

/// Per-screen request lifecycle. A screen may only move to `Pending` through
/// `try_begin`, which refuses while a request is already in flight; completion
/// lands back in an idle-equivalent state carrying the outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl RequestPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestPhase::Pending)
    }

    /// Guarded idle→pending transition. Returns false (and leaves the phase
    /// untouched) when a request is already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = RequestPhase::Pending;
        true
    }

    pub fn succeed(&mut self, report: String) {
        *self = RequestPhase::Succeeded(report);
    }

    pub fn fail(&mut self, message: String) {
        *self = RequestPhase::Failed(message);
    }

    pub fn report(&self) -> Option<&str> {
        match self {
            RequestPhase::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_instructions_are_distinct_and_on_topic() {
        assert!(
            AdvisorContext::Management
                .system_instruction()
                .contains("farm operations")
        );
        assert!(
            AdvisorContext::Marketing
                .system_instruction()
                .contains("market trends")
        );
        assert!(
            AdvisorContext::Hybrid
                .system_instruction()
                .contains("crop breeding")
        );

        let mut instructions: Vec<&str> = AdvisorContext::ALL
            .iter()
            .map(|c| c.system_instruction())
            .collect();
        instructions.dedup();
        assert_eq!(instructions.len(), 3);
    }

    #[test]
    fn data_url_header_is_stripped() {
        let image = DiagnosticImage::from_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn data_url_round_trips_through_preview_form() {
        let image = DiagnosticImage::from_bytes("image/jpeg", b"raw-bytes");
        let parsed = DiagnosticImage::from_data_url(&image.to_data_url()).unwrap();
        assert_eq!(parsed, image);
    }

    #[test]
    fn malformed_data_urls_are_rejected() {
        assert_eq!(
            DiagnosticImage::from_data_url("image/png;base64,xxxx"),
            Err(ImageError::MissingHeader)
        );
        assert_eq!(
            DiagnosticImage::from_data_url("data:image/png,xxxx"),
            Err(ImageError::NotBase64)
        );
    }

    #[test]
    fn hybrid_prompt_names_both_parents() {
        let query = HybridQuery::new("Heirloom Corn", " Drought Resistant Corn ");
        assert!(query.is_complete());
        let prompt = query.prompt();
        assert!(prompt.starts_with("Simulate a hybrid cross between Heirloom Corn and Drought Resistant Corn."));
        assert!(prompt.contains("professional agronomy report"));
    }

    #[test]
    fn blank_parents_are_incomplete() {
        assert!(!HybridQuery::new("", "Maize").is_complete());
        assert!(!HybridQuery::new("Maize", "   ").is_complete());
    }

    #[test]
    fn pending_phase_rejects_reentry() {
        let mut phase = RequestPhase::Idle;
        assert!(phase.try_begin());
        assert!(phase.is_pending());
        assert!(!phase.try_begin());
        assert!(phase.is_pending());
    }

    #[test]
    fn completed_phase_allows_resubmission() {
        let mut phase = RequestPhase::Pending;
        phase.succeed("report".into());
        assert_eq!(phase.report(), Some("report"));
        assert!(phase.try_begin());

        let mut phase = RequestPhase::Pending;
        phase.fail("unavailable".into());
        assert_eq!(phase.error(), Some("unavailable"));
        assert!(phase.try_begin());
    }
}
