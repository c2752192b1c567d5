#![allow(non_snake_case)]

use dioxus::prelude::*;
use fingerprint_common::view::slider_display;

/// Range input with its value echoed beside it.
#[component]
pub fn ParamSlider(
    id: &'static str,
    label: &'static str,
    min: u32,
    max: u32,
    value: u32,
    on_change: EventHandler<u32>,
) -> Element {
    let display = slider_display(id, value);

    rsx! {
        div { class: "param-row",
            label { r#for: "{id}", "{label}" }
            div { class: "param-control",
                input {
                    r#type: "range",
                    id: "{id}",
                    min: "{min}",
                    max: "{max}",
                    value: "{value}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(v) = e.value().parse::<u32>() {
                            on_change.call(v);
                        }
                    },
                }
                span { class: "param-value", "{display}" }
            }
        }
    }
}
