use dioxus::prelude::*;
use fingerprint_common::config::ServiceConfig;
use fingerprint_common::error::ServiceError;
use fingerprint_common::request::FingerprintRequest;
use fingerprint_common::response::{decode_fingerprint_response, FingerprintResult};

use crate::state::{GENERATION, PARAMS, SERVICE_CONFIG, TEXT_INPUT};

use super::alert;
use super::http::post_form;

/// Handle a click on the generate button.
///
/// Blank text alerts and sends nothing. Otherwise the panel enters Loading
/// (results hidden, button disabled) until the request settles either way.
pub fn generate() {
    let text = TEXT_INPUT.read().clone();
    let params = PARAMS.read().clone();

    let request = match FingerprintRequest::new(&text, params) {
        Ok(r) => r,
        Err(e) => {
            alert(&e.to_string());
            return;
        }
    };

    if GENERATION.write().begin().is_err() {
        tracing::debug!("Generation already in flight, ignoring click");
        return;
    }

    let config = SERVICE_CONFIG.read().clone();
    spawn(async move {
        let outcome = submit(&config, &request).await;
        match &outcome {
            Ok(result) => {
                tracing::info!(
                    "Fingerprint ready: {} words, {} collisions",
                    result.stats.total_words,
                    result.stats.collisions
                );
                crate::storage::save_params(request.params());
            }
            Err(e) => {
                tracing::warn!("Fingerprint generation failed: {}", e);
                alert(&e.user_message());
            }
        }
        GENERATION.write().settle(outcome);
    });
}

async fn submit(
    config: &ServiceConfig,
    request: &FingerprintRequest,
) -> Result<FingerprintResult, ServiceError> {
    let url = config.generate_url();
    tracing::info!(
        "POST {} ({} chars, size {}, {})",
        url,
        request.text().len(),
        request.params().size,
        request.params().hash_function
    );
    let body = post_form(&url, &request.form_fields(), config.timeout_ms).await?;
    decode_fingerprint_response(&body)
}
