#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::GENERATION;

#[component]
pub fn FingerprintResults() -> Element {
    let phase = GENERATION.read();
    let Some(result) = phase.success() else {
        return rsx! {
            div { id: "results", class: "results hidden" }
        };
    };

    let raw_src = result.raw_image.data_url();
    let enhanced_src = result.enhanced_image.data_url();
    let entries = result.stats.entries();

    rsx! {
        div { id: "results", class: "results",
            div { class: "fingerprint-images",
                figure {
                    img { id: "raw-fingerprint", src: "{raw_src}", alt: "Raw fingerprint" }
                    figcaption { "Raw" }
                }
                figure {
                    img { id: "enhanced-fingerprint", src: "{enhanced_src}", alt: "Enhanced fingerprint" }
                    figcaption { "Enhanced" }
                }
            }

            div { id: "stats-display", class: "stats-display",
                for entry in entries.iter() {
                    div { key: "{entry.label}", class: "stat-item",
                        div { class: "stat-value", "{entry.value}" }
                        div { class: "stat-label", "{entry.label}" }
                    }
                }
            }
        }
    }
}
