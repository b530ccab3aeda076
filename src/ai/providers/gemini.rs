use crate::types::DiagnosticImage;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Native client for the Gemini `generateContent` endpoint. The only provider
/// that accepts inline image payloads, so the diagnostics screen requires it.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<InstructionBlock<'a>>,
    contents: Vec<ContentBlock<'a>>,
}

#[derive(Serialize)]
struct InstructionBlock<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct ContentBlock<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: &'a str,
}

// Gemini response types; every level may be absent on a blocked or empty
// completion, so extraction degrades to empty text instead of failing.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Pull the concatenated candidate text out of a `generateContent` response
/// body. Returns None when the body is not a response shape we recognize.
pub fn extract_candidate_text(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<GenerateResponse>(body).ok()?;
    let mut text = String::new();
    for candidate in parsed.candidates {
        if let Some(content) = candidate.content {
            for part in content.parts {
                if let Some(piece) = part.text {
                    text.push_str(&piece);
                }
            }
        }
    }
    Some(text)
}

fn advisory_request<'a>(instruction: Option<&'a str>, prompt: &'a str) -> GenerateRequest<'a> {
    GenerateRequest {
        system_instruction: instruction.map(|text| InstructionBlock {
            parts: vec![RequestPart::Text { text }],
        }),
        contents: vec![ContentBlock {
            role: "user",
            parts: vec![RequestPart::Text { text: prompt }],
        }],
    }
}

// The image part leads and the instruction text follows it, matching the
// multimodal part ordering the diagnostics endpoint expects.
fn diagnostic_request<'a>(instruction: &'a str, image: &'a DiagnosticImage) -> GenerateRequest<'a> {
    GenerateRequest {
        system_instruction: None,
        contents: vec![ContentBlock {
            role: "user",
            parts: vec![
                RequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: &image.mime_type,
                        data: &image.data,
                    },
                },
                RequestPart::Text { text: instruction },
            ],
        }],
    }
}

impl GeminiClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    pub async fn generate(&self, instruction: Option<&str>, prompt: &str) -> Result<String> {
        self.post(&advisory_request(instruction, prompt)).await
    }

    pub async fn generate_with_image(
        &self,
        instruction: &str,
        image: &DiagnosticImage,
    ) -> Result<String> {
        self.post(&diagnostic_request(instruction, image)).await
    }

    async fn post(&self, request: &GenerateRequest<'_>) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!("Gemini API error {}: {}", status, body));
        }

        // An unparseable success body is treated as an empty completion; the
        // screens substitute their fallback line for empty text.
        Ok(extract_candidate_text(&body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_request_carries_system_instruction() {
        let request = advisory_request(Some("You are an agronomist."), "How do I price my wheat?");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            "You are an agronomist."
        );
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "How do I price my wheat?"
        );
    }

    #[test]
    fn advisory_request_without_instruction_omits_the_block() {
        let request = advisory_request(None, "hello");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn diagnostic_request_pairs_image_with_instruction() {
        let image = DiagnosticImage {
            mime_type: "image/jpeg".into(),
            data: "Zm9v".into(),
        };
        let request = diagnostic_request("Identify disease signs.", &image);
        let value = serde_json::to_value(&request).unwrap();
        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "Zm9v");
        assert_eq!(parts[1]["text"], "Identify disease signs.");
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn candidate_text_is_joined_verbatim() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Rust "},{"text":"detected."}]}}]}"#;
        assert_eq!(
            extract_candidate_text(body).as_deref(),
            Some("Rust detected.")
        );
    }

    #[test]
    fn empty_and_partial_responses_degrade_to_empty_text() {
        assert_eq!(extract_candidate_text(r#"{}"#).as_deref(), Some(""));
        assert_eq!(
            extract_candidate_text(r#"{"candidates":[]}"#).as_deref(),
            Some("")
        );
        assert_eq!(
            extract_candidate_text(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).as_deref(),
            Some("")
        );
        assert_eq!(extract_candidate_text("not json"), None);
    }
}
