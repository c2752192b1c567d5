#![allow(non_snake_case)]

use dioxus::prelude::*;
use fingerprint_common::params::{HASH_FUNCTIONS, MAP_SIZES, MAX_SALT_PERCENT, MAX_SMOOTH_RADIUS};

use super::fingerprint_results::FingerprintResults;
use super::param_slider::ParamSlider;
use super::visibility_class;
use crate::state::{GENERATION, PARAMS, TEXT_INPUT};

#[component]
pub fn GeneratorPanel() -> Element {
    let text = TEXT_INPUT.read().clone();
    let params = PARAMS.read().clone();
    let (loading, enabled) = {
        let phase = GENERATION.read();
        (phase.is_loading(), phase.controls_enabled())
    };
    let loading_class = visibility_class("loading", loading);

    rsx! {
        div { class: "generator",
            textarea {
                id: "text-input",
                class: "text-input",
                rows: "8",
                placeholder: "Paste or type the text to fingerprint...",
                value: "{text}",
                oninput: move |e| {
                    *TEXT_INPUT.write() = e.value();
                },
            }

            div { class: "param-grid",
                div { class: "param-row",
                    label { r#for: "hash-function", "Hash function" }
                    select {
                        id: "hash-function",
                        value: "{params.hash_function}",
                        onchange: move |e| {
                            PARAMS.write().hash_function = e.value();
                        },
                        for name in HASH_FUNCTIONS.iter() {
                            option {
                                key: "{name}",
                                value: "{name}",
                                selected: *name == params.hash_function,
                                "{name}"
                            }
                        }
                    }
                }

                div { class: "param-row",
                    label { r#for: "map-size", "Map size" }
                    select {
                        id: "map-size",
                        value: "{params.size}",
                        onchange: move |e| {
                            if let Ok(size) = e.value().parse::<u32>() {
                                PARAMS.write().size = size;
                            }
                        },
                        for size in MAP_SIZES.iter() {
                            option {
                                key: "{size}",
                                value: "{size}",
                                selected: *size == params.size,
                                "{size} x {size}"
                            }
                        }
                    }
                }

                ParamSlider {
                    id: "salt-level",
                    label: "Salt level",
                    min: 0,
                    max: MAX_SALT_PERCENT,
                    value: params.salt_percent,
                    on_change: move |v| {
                        PARAMS.write().salt_percent = v;
                    },
                }

                ParamSlider {
                    id: "smooth-radius",
                    label: "Smooth radius",
                    min: 0,
                    max: MAX_SMOOTH_RADIUS,
                    value: params.smooth_radius,
                    on_change: move |v| {
                        PARAMS.write().smooth_radius = v;
                    },
                }
            }

            button {
                id: "generate-button",
                class: "primary-button",
                disabled: !enabled,
                onclick: move |_| {
                    crate::api::fingerprint::generate();
                },
                "Generate Fingerprint"
            }

            div { id: "loading", class: "{loading_class}",
                span { class: "spinner" }
                span { "Generating fingerprint..." }
            }

            FingerprintResults {}
        }
    }
}
