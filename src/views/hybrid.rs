use crate::ai::advisor_reply;
use crate::types::{AdvisorContext, HybridQuery, RequestPhase};
use crate::views::shared::ResultPanel;
use dioxus::prelude::*;
use tracing::error;

const SIMULATE_ERROR_MESSAGE: &str = "Error simulating hybrid. Please try again.";
const EMPTY_SIMULATION_FALLBACK: &str = "Simulation failed.";
const RESULT_PLACEHOLDER: &str = "Enter parent varieties and simulate to see hybrid potential.";

#[component]
pub fn HybridLabView() -> Element {
    let mut parent_a = use_signal(String::new);
    let mut parent_b = use_signal(String::new);
    let mut phase = use_signal(RequestPhase::default);

    let simulate = move |_| {
        let query = HybridQuery::new(parent_a(), parent_b());
        if !query.is_complete() {
            return;
        }
        if !phase.with_mut(|p| p.try_begin()) {
            return;
        }
        spawn(async move {
            match advisor_reply(query.prompt(), AdvisorContext::Hybrid).await {
                Ok(report) => phase.with_mut(|p| p.succeed(report)),
                Err(err) => {
                    error!("hybrid simulation failed: {}", err);
                    phase.with_mut(|p| p.fail(SIMULATE_ERROR_MESSAGE.to_string()));
                }
            }
        });
    };

    let pending = phase().is_pending();
    let incomplete = !HybridQuery::new(parent_a(), parent_b()).is_complete();

    rsx! {
        div { class: "screen-intro",
            h2 { "Hybrid Innovation Lab" }
            p { class: "text-muted",
                "Explore the possibilities of crossing different crop varieties to create superior hybrid products."
            }
        }

        div { class: "split-layout hybrid-layout",
            div { class: "hybrid-form-column",
                div { class: "card",
                    h3 { "Parent Varieties" }
                    div { class: "field",
                        label { class: "field-label", "Parent A (e.g. Heirloom Corn)" }
                        input {
                            r#type: "text",
                            placeholder: "Variety name...",
                            value: "{parent_a}",
                            oninput: move |ev| parent_a.set(ev.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "Parent B (e.g. Drought Resistant Corn)" }
                        input {
                            r#type: "text",
                            placeholder: "Variety name...",
                            value: "{parent_b}",
                            oninput: move |ev| parent_b.set(ev.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-wide",
                        r#type: "button",
                        disabled: incomplete || pending,
                        onclick: simulate,
                        if pending { "Simulating..." } else { "Simulate Hybrid" }
                    }
                }

                div { class: "card card-accent",
                    h4 { "Why Hybridize?" }
                    ul { class: "info-list",
                        li { "Increase yield through heterosis (hybrid vigor)." }
                        li { "Combine resistance to multiple pests/diseases." }
                        li { "Improve uniformity for mechanical harvesting." }
                    }
                }
            }

            ResultPanel {
                phase: phase(),
                placeholder: RESULT_PLACEHOLDER,
                fallback: EMPTY_SIMULATION_FALLBACK,
                busy_label: "Simulating...",
            }
        }
    }
}
