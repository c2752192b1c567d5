pub mod experiment;
pub mod fingerprint;
pub mod http;

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;

use crate::state::SERVICE_CONFIG;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    crate::storage::load_params();

    let config = crate::storage::load_config();
    tracing::info!(
        "Fingerprint service at {:?} (timeout {} ms)",
        if config.base_url.is_empty() {
            "same origin"
        } else {
            config.base_url.as_str()
        },
        config.timeout_ms
    );
    *SERVICE_CONFIG.write() = config;
}

/// Blocking browser alert. Used for generation failures only; experiment
/// failures render inline.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
