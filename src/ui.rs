use crate::views::{AdvisorView, DashboardView, DiagnosticsView, HybridLabView};
use dioxus::prelude::*;

const AGRIPULSE_CSS: Asset = asset!("/assets/agripulse.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Dashboard,
    Advisor,
    Diagnostics,
    HybridLab,
}

impl AppTab {
    const ALL: [AppTab; 4] = [
        AppTab::Dashboard,
        AppTab::Advisor,
        AppTab::Diagnostics,
        AppTab::HybridLab,
    ];

    fn label(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Dashboard",
            AppTab::Advisor => "AI Advisor",
            AppTab::Diagnostics => "Diagnostics",
            AppTab::HybridLab => "Hybrid Lab",
        }
    }
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Dashboard);
    let sidebar_open = use_signal(|| true);

    rsx! {
        document::Link { rel: "stylesheet", href: AGRIPULSE_CSS }
        div { class: "app-shell",
            Sidebar { active_tab, sidebar_open }
            main { class: "app-main",
                AppHeader { active_tab }
                div { class: "screen-scroll",
                    TabPanels { active_tab }
                }
            }
        }
    }
}

#[component]
fn Sidebar(active_tab: Signal<AppTab>, sidebar_open: Signal<bool>) -> Element {
    let mut sidebar_open = sidebar_open;
    let open = sidebar_open();
    rsx! {
        aside { class: format_args!("sidebar {}", if open { "open" } else { "collapsed" }),
            div { class: "brand",
                div { class: "brand-mark", "A" }
                if open {
                    span { class: "brand-name", "AgriPulse" }
                }
            }
            nav { class: "sidebar-nav",
                for tab in AppTab::ALL {
                    NavItem { active_tab, tab, collapsed: !open }
                }
            }
            button {
                class: "sidebar-toggle",
                r#type: "button",
                onclick: move |_| sidebar_open.set(!open),
                if open { "‹" } else { "›" }
            }
        }
    }
}

#[component]
fn NavItem(active_tab: Signal<AppTab>, tab: AppTab, collapsed: bool) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "nav-item active"
    } else {
        "nav-item"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            span { class: "nav-dot" }
            if !collapsed {
                span { "{tab.label()}" }
            }
        }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        header { class: "app-header",
            h2 { class: "header-title", "{active_tab().label()}" }
            div { class: "ticker-pill",
                span { class: "ticker-dot" }
                "Live Market: Wheat +2.4%"
            }
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Dashboard,
                children: rsx!( DashboardView { active_tab } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Advisor,
                children: rsx!( AdvisorView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Diagnostics,
                children: rsx!( DiagnosticsView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::HybridLab,
                children: rsx!( HybridLabView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}
