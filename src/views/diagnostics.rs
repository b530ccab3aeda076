use crate::ai::analyze_diagnostic_image;
use crate::types::{DiagnosticImage, RequestPhase};
use crate::views::shared::ResultPanel;
use dioxus::{events::FormEvent, prelude::*};
use tracing::error;

const ANALYZE_ERROR_MESSAGE: &str = "Error analyzing image. Please try again.";
const EMPTY_ANALYSIS_FALLBACK: &str = "Analysis failed.";
const RESULT_PLACEHOLDER: &str = "Analysis results will appear here after diagnostic run.";

fn guess_image_mime(file_name: &str) -> &'static str {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "heic" | "heif" => "image/heic",
        _ => "image/png",
    }
}

#[component]
pub fn DiagnosticsView() -> Element {
    let mut image = use_signal(|| Option::<DiagnosticImage>::None);
    let mut phase = use_signal(RequestPhase::default);

    let on_upload = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(name) = file_engine.files().first().cloned() {
                if let Some(bytes) = file_engine.read_file(&name).await {
                    let mime = guess_image_mime(&name);
                    image.set(Some(DiagnosticImage::from_bytes(mime, &bytes)));
                    // A fresh upload replaces the previous analysis.
                    phase.set(RequestPhase::Idle);
                }
            }
        }
    };

    let run_diagnostics = move |_| {
        let Some(payload) = image() else {
            return;
        };
        if !phase.with_mut(|p| p.try_begin()) {
            return;
        }
        spawn(async move {
            match analyze_diagnostic_image(payload).await {
                Ok(report) => phase.with_mut(|p| p.succeed(report)),
                Err(err) => {
                    error!("diagnostics request failed: {}", err);
                    phase.with_mut(|p| p.fail(ANALYZE_ERROR_MESSAGE.to_string()));
                }
            }
        });
    };

    let preview = image();
    let pending = phase().is_pending();

    rsx! {
        div { class: "screen-intro",
            h2 { "Crop & Livestock Diagnostics" }
            p { class: "text-muted",
                "Upload a photo of your crop or livestock to identify diseases, pests, or deficiencies."
            }
        }

        div { class: "split-layout",
            div { class: "upload-column",
                label { class: "upload-drop",
                    if let Some(img) = preview.as_ref() {
                        img { class: "upload-preview", src: "{img.to_data_url()}", alt: "Upload" }
                    } else {
                        div { class: "upload-hint",
                            p { "Click to upload a photo" }
                            p { class: "text-muted", "PNG, JPG up to 10MB" }
                        }
                    }
                    input {
                        class: "file-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_upload,
                    }
                }
                button {
                    class: "btn btn-primary btn-wide",
                    r#type: "button",
                    disabled: preview.is_none() || pending,
                    onclick: run_diagnostics,
                    if pending { "Analyzing..." } else { "Run Diagnostics" }
                }
            }

            ResultPanel {
                phase: phase(),
                placeholder: RESULT_PLACEHOLDER,
                fallback: EMPTY_ANALYSIS_FALLBACK,
                busy_label: "Analyzing...",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_guess_follows_extension() {
        assert_eq!(guess_image_mime("leaf.JPG"), "image/jpeg");
        assert_eq!(guess_image_mime("cow.webp"), "image/webp");
        assert_eq!(guess_image_mime("plot.heic"), "image/heic");
        assert_eq!(guess_image_mime("scan"), "image/png");
    }
}
