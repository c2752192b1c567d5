#![allow(non_snake_case)]

use dioxus::prelude::*;
use fingerprint_common::experiment::{ExperimentKind, CHART_PLACEHOLDER};

use super::visibility_class;
use crate::state::EXPERIMENT;

#[component]
pub fn ExperimentPanel() -> Element {
    let phase = EXPERIMENT.read().clone();
    let enabled = phase.controls_enabled();
    let loading = phase.is_loading();
    let loading_class = visibility_class("loading", loading);

    rsx! {
        div { class: "experiments",
            p { class: "text-secondary",
                "Run a predefined benchmark on the service and inspect its raw output."
            }

            div { class: "experiment-buttons",
                for kind in ExperimentKind::ALL {
                    button {
                        key: "{kind}",
                        class: "experiment-button",
                        "data-type": "{kind}",
                        disabled: !enabled,
                        onclick: move |_| {
                            crate::api::experiment::run(kind.into());
                        },
                        "{kind.button_label()}"
                    }
                }
            }

            div { id: "experiment-loading", class: "{loading_class}",
                span { class: "spinner" }
                span { "Running experiment..." }
            }

            div { id: "experiment-results", class: "experiment-results",
                if let Some(result) = phase.success() {
                    h3 { "{result.title()}" }
                    p { "{result.description()}" }
                    div { class: "experiment-chart",
                        p { "{CHART_PLACEHOLDER}" }
                    }
                    div { class: "experiment-data",
                        h4 { "Raw Data" }
                        pre { "{result.pretty_payload()}" }
                    }
                }
                if let Some(e) = phase.failure() {
                    p { class: "error", "{e.user_message()}" }
                }
            }
        }
    }
}
