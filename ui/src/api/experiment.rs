use dioxus::prelude::*;
use fingerprint_common::request::ExperimentRequest;
use fingerprint_common::response::decode_experiment_response;

use crate::state::{EXPERIMENT, SERVICE_CONFIG};

use super::http::post_form;

/// Handle a click on any experiment button. All experiment buttons share one
/// phase, so a second experiment cannot start until the first settles.
pub fn run(request: ExperimentRequest) {
    if EXPERIMENT.write().begin().is_err() {
        tracing::debug!("Experiment already running, ignoring {}", request.kind);
        return;
    }

    if request.known().is_none() {
        tracing::warn!("Submitting unrecognised experiment type {:?}", request.kind);
    }

    let config = SERVICE_CONFIG.read().clone();
    spawn(async move {
        let url = config.experiment_url();
        tracing::info!("POST {} (type {})", url, request.kind);

        let outcome = match post_form(&url, &request.form_fields(), config.timeout_ms).await {
            Ok(body) => decode_experiment_response(&request.kind, &body),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            tracing::warn!("Experiment {} failed: {}", request.kind, e);
        }
        EXPERIMENT.write().settle(outcome);
    });
}
