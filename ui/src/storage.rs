use dioxus::prelude::*;
use fingerprint_common::config::{ServiceConfig, DEFAULT_TIMEOUT_MS};
use fingerprint_common::params::FingerprintParams;
use serde::{Deserialize, Serialize};

use crate::state::PARAMS;

const PARAMS_KEY: &str = "fingerprint_params";

/// Bump this when FingerprintParams changes shape to drop stale entries.
const PARAMS_VERSION: u32 = 1;

const BASE_URL_KEY: &str = "fingerprint_api_base";
const TIMEOUT_KEY: &str = "fingerprint_timeout_ms";

#[derive(Serialize, Deserialize)]
struct StoredParams {
    #[serde(default)]
    version: u32,
    params: FingerprintParams,
}

/// Restore the last-used parameters from localStorage.
pub fn load_params() {
    let storage = match get_storage() {
        Some(s) => s,
        None => return,
    };
    let json = match storage.get_item(PARAMS_KEY) {
        Ok(Some(j)) => j,
        _ => return,
    };
    let stored: StoredParams = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(_) => {
            let _ = storage.remove_item(PARAMS_KEY);
            return;
        }
    };
    if stored.version != PARAMS_VERSION {
        tracing::info!(
            "Stored parameter version mismatch ({} != {}), discarding",
            stored.version,
            PARAMS_VERSION
        );
        let _ = storage.remove_item(PARAMS_KEY);
        return;
    }
    if let Err(e) = stored.params.validate() {
        tracing::warn!("Stored parameters rejected: {}", e);
        let _ = storage.remove_item(PARAMS_KEY);
        return;
    }
    *PARAMS.write() = stored.params;
    tracing::info!("Restored fingerprint parameters from localStorage");
}

/// Remember parameters that just produced a fingerprint.
pub fn save_params(params: &FingerprintParams) {
    let storage = match get_storage() {
        Some(s) => s,
        None => return,
    };
    let stored = StoredParams {
        version: PARAMS_VERSION,
        params: params.clone(),
    };
    if let Ok(json) = serde_json::to_string(&stored) {
        let _ = storage.set_item(PARAMS_KEY, &json);
    }
}

/// Forget stored parameters and put the controls back to defaults.
pub fn clear_params() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(PARAMS_KEY);
    }
    *PARAMS.write() = FingerprintParams::default();
    tracing::info!("Parameters reset to defaults");
}

/// Service location with any localStorage overrides applied.
pub fn load_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    let Some(storage) = get_storage() else {
        return config;
    };
    if let Ok(Some(base)) = storage.get_item(BASE_URL_KEY) {
        config.base_url = base;
    }
    config.timeout_ms = storage
        .get_item(TIMEOUT_KEY)
        .ok()
        .flatten()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    config
}

pub fn save_config(config: &ServiceConfig) {
    let Some(storage) = get_storage() else {
        return;
    };
    if config.base_url.is_empty() {
        let _ = storage.remove_item(BASE_URL_KEY);
    } else {
        let _ = storage.set_item(BASE_URL_KEY, &config.base_url);
    }
    let _ = storage.set_item(TIMEOUT_KEY, &config.timeout_ms.to_string());
}

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
