#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::ACTIVE_TAB;

#[component]
pub fn TabBar() -> Element {
    let tabs = ACTIVE_TAB.read().clone();

    rsx! {
        nav { class: "tab-bar",
            for tab in tabs.tabs().iter() {
                {
                    let class = if tabs.is_active(tab.id) {
                        "tab-button active"
                    } else {
                        "tab-button"
                    };

                    rsx! {
                        button {
                            key: "{tab.id}",
                            class: "{class}",
                            "data-tab": "{tab.id}",
                            onclick: move |_| {
                                ACTIVE_TAB.write().activate(tab.id);
                            },
                            "{tab.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Class for the pane a tab button targets.
pub fn pane_class(id: &str) -> &'static str {
    if ACTIVE_TAB.read().is_active(id) {
        "tab-pane active"
    } else {
        "tab-pane"
    }
}
