use crate::ai::advisor_reply;
use crate::types::{AdvisorContext, ChatMessage, Role};
use crate::views::shared::{PendingShimmer, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing::error;

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// Substituted when the model comes back with empty text.
const EMPTY_REPLY_FALLBACK: &str = "I am sorry, I could not process that.";
/// Appended to the transcript when the advisor backend cannot be reached.
const ADVISOR_ERROR_MESSAGE: &str = "Error connecting to AI advisor. Please try again.";

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn display_reply(reply: String) -> String {
    if reply.trim().is_empty() {
        EMPTY_REPLY_FALLBACK.to_string()
    } else {
        reply
    }
}

#[component]
pub fn AdvisorView() -> Element {
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut input = use_signal(String::new);
    let context = use_signal(|| AdvisorContext::Management);
    let sending = use_signal(|| false);

    let mut send_message = {
        let mut messages = messages;
        let mut sending_signal = sending;
        let mut input_signal = input;
        let context_signal = context;
        move |text: String| {
            let trimmed = text.trim();
            if trimmed.is_empty() || sending_signal() {
                return;
            }

            let prompt = trimmed.to_string();
            input_signal.set(String::new());
            messages.with_mut(|msgs| msgs.push(ChatMessage::user(prompt.clone())));
            sending_signal.set(true);

            let active_context = context_signal();
            let mut messages = messages;
            spawn(async move {
                let entry = match advisor_reply(prompt, active_context).await {
                    Ok(reply) => ChatMessage::ai(display_reply(reply)),
                    Err(err) => {
                        error!("advisor request failed: {}", err);
                        ChatMessage::ai(ADVISOR_ERROR_MESSAGE)
                    }
                };
                messages.with_mut(|msgs| msgs.push(entry));
                sending_signal.set(false);
            });
        }
    };

    let messages_snapshot = messages();
    let active_context = context();
    let placeholder = format!("Ask about {}...", active_context.label().to_lowercase());

    rsx! {
        div { class: "advisor-wrap",
            div { class: "context-bar",
                for ctx in AdvisorContext::ALL {
                    ContextPill { context, value: ctx }
                }
            }

            div { id: "advisor-transcript", class: "chat-list",
                if messages_snapshot.is_empty() {
                    div { class: "chat-empty",
                        h3 { "Ask your AI Advisor" }
                        p { class: "text-muted",
                            "Get expert advice on farm management, crop marketing, or hybrid product development."
                        }
                    }
                }
                for msg in messages_snapshot.iter() {
                    div { class: format_args!("message-row {}", match msg.role { Role::User => "user", Role::Ai => "ai" }),
                        div { class: "message-stack",
                            div { class: format_args!("bubble {}", match msg.role { Role::User => "user", Role::Ai => "ai" }),
                                if matches!(msg.role, Role::Ai) {
                                    AiBubble { content: msg.content.clone() }
                                } else { "{msg.content}" }
                            }
                            if let Some(ts) = format_message_timestamp(msg.created_at) {
                                div { class: format_args!(
                                        "message-meta {}",
                                        match msg.role { Role::User => "align-end", Role::Ai => "align-start" }
                                    ),
                                    span { class: "message-timestamp", "{ts}" }
                                }
                            }
                        }
                    }
                }
                if sending() {
                    div { class: "message-row ai",
                        div { class: "bubble ai",
                            PendingShimmer { label: "Thinking..." }
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    input {
                        class: "composer-input",
                        r#type: "text",
                        placeholder: "{placeholder}",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        disabled: sending(),
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: sending() || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn ContextPill(context: Signal<AdvisorContext>, value: AdvisorContext) -> Element {
    let mut context = context;
    let class = if context() == value {
        "context-pill active"
    } else {
        "context-pill"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| context.set(value),
            "{value.label()} Advice"
        }
    }
}

#[component]
fn AiBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy markdown", onclick: on_copy, "Copy" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}
