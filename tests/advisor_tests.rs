//! Integration tests for the AgriPulse advisory surface
//!
//! Exercises context/instruction selection, image payload handling, the
//! hybrid prompt, request-phase gating, and Gemini response extraction.

use agripulse::ai::DIAGNOSTIC_INSTRUCTION;
use agripulse::ai::providers::gemini::extract_candidate_text;
use agripulse::types::{
    AdvisorContext, ChatMessage, DiagnosticImage, HybridQuery, ImageError, RequestPhase, Role,
};

mod context_tests {
    use super::*;

    #[test]
    fn each_context_has_its_own_instruction() {
        let management = AdvisorContext::Management.system_instruction();
        let marketing = AdvisorContext::Marketing.system_instruction();
        let hybrid = AdvisorContext::Hybrid.system_instruction();

        assert!(management.starts_with("You are an expert agricultural project manager."));
        assert!(marketing.starts_with("You are a specialist in agricultural commodities"));
        assert!(hybrid.starts_with("You are an agronomist specializing in crop breeding."));

        assert_ne!(management, marketing);
        assert_ne!(marketing, hybrid);
        assert_ne!(management, hybrid);
    }

    #[test]
    fn instruction_selection_is_stable_across_calls() {
        for context in AdvisorContext::ALL {
            assert_eq!(context.system_instruction(), context.system_instruction());
        }
    }

    #[test]
    fn diagnostic_instruction_covers_the_screen_contract() {
        assert!(DIAGNOSTIC_INSTRUCTION.contains("disease"));
        assert!(DIAGNOSTIC_INSTRUCTION.contains("pests"));
        assert!(DIAGNOSTIC_INSTRUCTION.contains("recommended immediate actions"));
    }
}

mod image_tests {
    use super::*;

    #[test]
    fn upload_bytes_become_base64_payload() {
        let image = DiagnosticImage::from_bytes("image/jpeg", &[0xffu8, 0xd8, 0xff]);
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "/9j/");
    }

    #[test]
    fn data_url_header_is_stripped_for_transmission() {
        let image =
            DiagnosticImage::from_data_url("data:image/webp;base64,UklGR").expect("valid data URL");
        assert_eq!(image.mime_type, "image/webp");
        assert_eq!(image.data, "UklGR");
        assert!(!image.data.contains("data:"));
    }

    #[test]
    fn preview_url_embeds_mime_and_payload() {
        let image = DiagnosticImage::from_bytes("image/png", b"x");
        assert_eq!(image.to_data_url(), "data:image/png;base64,eA==");
    }

    #[test]
    fn invalid_payloads_surface_typed_errors() {
        assert_eq!(
            DiagnosticImage::from_data_url("plain text"),
            Err(ImageError::MissingHeader)
        );
        assert_eq!(
            DiagnosticImage::from_data_url("data:image/png;base32,xxxx"),
            Err(ImageError::NotBase64)
        );
    }
}

mod hybrid_tests {
    use super::*;

    #[test]
    fn prompt_combines_both_varieties() {
        let query = HybridQuery::new("Heirloom Corn", "Drought Resistant Corn");
        let prompt = query.prompt();
        assert!(prompt.contains("Heirloom Corn"));
        assert!(prompt.contains("Drought Resistant Corn"));
        assert!(prompt.contains("yield potential"));
    }

    #[test]
    fn whitespace_only_varieties_do_not_qualify() {
        assert!(!HybridQuery::new("  ", "\t").is_complete());
        assert!(HybridQuery::new("A", "B").is_complete());
    }
}

mod phase_tests {
    use super::*;

    #[test]
    fn one_request_in_flight_per_screen() {
        let mut phase = RequestPhase::default();
        assert!(phase.try_begin());
        // Re-triggering the action while pending must not start another request.
        assert!(!phase.try_begin());
        assert!(!phase.try_begin());
        phase.succeed("done".into());
        assert!(phase.try_begin());
    }

    #[test]
    fn failure_keeps_the_screen_usable() {
        let mut phase = RequestPhase::default();
        assert!(phase.try_begin());
        phase.fail("Error analyzing image. Please try again.".into());
        assert_eq!(phase.error(), Some("Error analyzing image. Please try again."));
        assert!(!phase.is_pending());
        assert!(phase.try_begin());
    }
}

mod response_tests {
    use super::*;

    #[test]
    fn response_text_is_returned_verbatim() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"**Diagnosis:** leaf rust"}]}}]}"#;
        assert_eq!(
            extract_candidate_text(body).as_deref(),
            Some("**Diagnosis:** leaf rust")
        );
    }

    #[test]
    fn absent_text_degrades_to_empty_not_panic() {
        assert_eq!(
            extract_candidate_text(r#"{"candidates":[{}]}"#).as_deref(),
            Some("")
        );
    }

    #[test]
    fn transcript_roles_serialize_lowercase() {
        let message = ChatMessage::user("How do I price my wheat?");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "How do I price my wheat?");

        let reply = ChatMessage::ai("Price against the local spot market.");
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["role"], "ai");
        assert!(matches!(reply.role, Role::Ai));
    }
}
