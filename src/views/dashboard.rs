use crate::ui::AppTab;
use dioxus::{events::MouseEvent, prelude::*};

#[component]
pub fn DashboardView(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;

    rsx! {
        section { class: "screen-intro align-start",
            h1 { "Welcome back, Farmer." }
            p { class: "text-muted", "Here's what's happening on your farm today." }
        }

        div { class: "stat-grid",
            StatCard { title: "Active Projects", value: "4", subtitle: "2 nearing harvest" }
            StatCard { title: "Market Outlook", value: "Positive", subtitle: "Maize prices up 5%" }
            StatCard { title: "Health Alerts", value: "1", subtitle: "Potential rust in Plot B" }
        }

        div { class: "split-layout",
            div { class: "card",
                h3 { "Quick Actions" }
                div { class: "action-list",
                    ActionButton {
                        label: "Diagnose a Crop Problem",
                        onclick: move |_| active_tab.set(AppTab::Diagnostics),
                    }
                    ActionButton {
                        label: "Get Marketing Advice",
                        onclick: move |_| active_tab.set(AppTab::Advisor),
                    }
                    ActionButton {
                        label: "Explore Hybrid Varieties",
                        onclick: move |_| active_tab.set(AppTab::HybridLab),
                    }
                }
            }

            div { class: "card card-feature",
                h3 { "Seasonal Tip" }
                p {
                    "Current humidity levels are high. Consider adjusting your irrigation schedule for the tomato crop to prevent fungal growth."
                }
                button {
                    class: "btn btn-inverse",
                    r#type: "button",
                    onclick: move |_| active_tab.set(AppTab::Advisor),
                    "Learn More"
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "card stat-card",
            h4 { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            p { class: "stat-subtitle", "{subtitle}" }
        }
    }
}

#[component]
fn ActionButton(label: &'static str, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "action-row",
            r#type: "button",
            onclick: move |ev| onclick.call(ev),
            span { "{label}" }
            span { class: "action-chevron", "›" }
        }
    }
}
