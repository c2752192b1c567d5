#![allow(non_snake_case)]

use dioxus::prelude::*;
use fingerprint_common::config::{ServiceConfig, DEFAULT_TIMEOUT_MS};

use crate::state::{PARAMS, SERVICE_CONFIG};

#[component]
pub fn SettingsPanel() -> Element {
    let config = SERVICE_CONFIG.read().clone();
    let params = PARAMS.read().clone();

    let mut base_url = use_signal(|| config.base_url.clone());
    let mut timeout_secs = use_signal(|| (config.timeout_ms / 1000).to_string());
    let mut saved = use_signal(|| false);

    rsx! {
        div { class: "settings-panel",
            div { class: "settings-section",
                h2 { "Service" }

                label { class: "settings-field",
                    span { "Base URL" }
                    input {
                        r#type: "text",
                        placeholder: "same origin",
                        value: "{base_url}",
                        oninput: move |e| {
                            base_url.set(e.value());
                            saved.set(false);
                        },
                    }
                }

                label { class: "settings-field",
                    span { "Timeout (seconds)" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{timeout_secs}",
                        oninput: move |e| {
                            timeout_secs.set(e.value());
                            saved.set(false);
                        },
                    }
                }

                button {
                    class: "secondary-button",
                    onclick: move |_| {
                        let timeout_ms = timeout_secs
                            .read()
                            .trim()
                            .parse::<u32>()
                            .ok()
                            .filter(|s| *s > 0)
                            .map(|s| s.saturating_mul(1000))
                            .unwrap_or(DEFAULT_TIMEOUT_MS);
                        let config = ServiceConfig {
                            base_url: base_url.read().trim().to_string(),
                            timeout_ms,
                        };
                        crate::storage::save_config(&config);
                        tracing::info!(
                            "Service settings saved: base {:?}, timeout {} ms",
                            config.base_url,
                            config.timeout_ms
                        );
                        *SERVICE_CONFIG.write() = config;
                        saved.set(true);
                    },
                    "Save"
                }
                if saved() {
                    span { class: "settings-saved", "Saved" }
                }

                p { class: "text-secondary", style: "font-size: 0.8rem;",
                    "Leave the base URL empty when this page is served by the fingerprint service itself."
                }
            }

            div { class: "settings-section",
                h2 { "Parameters" }

                p { class: "text-secondary",
                    "Size {params.size}, {params.hash_function}, salt {params.salt_percent}%, smooth radius {params.smooth_radius}"
                }

                button {
                    class: "clear-cache-btn",
                    title: "Forget remembered parameters",
                    onclick: move |_| {
                        crate::storage::clear_params();
                    },
                    "Reset to defaults"
                }
            }
        }
    }
}
