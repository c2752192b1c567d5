#![allow(non_snake_case)]

use dioxus::prelude::*;

mod api;
mod state;
mod storage;
mod views;

use state::{ACTIVE_TAB, SERVICE_CONFIG, TAB_EXPERIMENTS, TAB_GENERATOR, TAB_SETTINGS};
use views::experiments::ExperimentPanel;
use views::generator::GeneratorPanel;
use views::settings::SettingsPanel;
use views::tabs::{pane_class, TabBar};

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        api::init();
    });

    let settings_active = ACTIVE_TAB.read().is_active(TAB_SETTINGS);

    let service_text = {
        let config = SERVICE_CONFIG.read();
        if config.base_url.is_empty() {
            "Service: same origin".to_string()
        } else {
            format!("Service: {}", config.base_url)
        }
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { class: "app-shell",
            // Header
            header { class: "app-header",
                h1 { class: "app-title", "Hash Fingerprint" }

                div { class: "header-controls",
                    span { class: "service-status", "{service_text}" }
                }
            }

            TabBar {}

            main { class: "tab-content",
                div { id: TAB_GENERATOR, class: pane_class(TAB_GENERATOR),
                    GeneratorPanel {}
                }

                div { id: TAB_EXPERIMENTS, class: pane_class(TAB_EXPERIMENTS),
                    ExperimentPanel {}
                }

                // Mounted on demand so its drafts start from the loaded config
                div { id: TAB_SETTINGS, class: pane_class(TAB_SETTINGS),
                    if settings_active {
                        SettingsPanel {}
                    }
                }
            }
        }
    }
}
