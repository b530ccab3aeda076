use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use dioxus::prelude::*;
use once_cell::sync::Lazy;

use crate::types::RequestPhase;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options
});

// Model output is rendered, not trusted, so raw HTML stays escaped.
pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

#[component]
pub fn PendingShimmer(label: &'static str) -> Element {
    rsx! {
        div { class: "shimmer-line",
            span { class: "shimmer-text", "{label}" }
        }
    }
}

/// Result pane shared by the diagnostics and hybrid screens: placeholder
/// while idle, shimmer while a request is in flight, markdown-rendered report
/// on success (or the screen's fallback line when the model returned empty
/// text), and the screen's fixed error line on failure.
#[component]
pub fn ResultPanel(
    phase: RequestPhase,
    placeholder: &'static str,
    fallback: &'static str,
    busy_label: &'static str,
) -> Element {
    let body = match &phase {
        RequestPhase::Idle => rsx! {
            p { class: "panel-placeholder", "{placeholder}" }
        },
        RequestPhase::Pending => rsx! {
            PendingShimmer { label: busy_label }
        },
        RequestPhase::Succeeded(report) => {
            let text = if report.trim().is_empty() {
                fallback
            } else {
                report.as_str()
            };
            let html = markdown_to_html(text);
            rsx! {
                div { class: "md", dangerous_inner_html: "{html}" }
            }
        }
        RequestPhase::Failed(message) => rsx! {
            p { class: "panel-error", "{message}" }
        },
    };

    rsx! {
        div { class: "result-panel", {body} }
    }
}
