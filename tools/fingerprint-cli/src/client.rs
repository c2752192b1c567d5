use std::time::Duration;

use fingerprint_common::config::ServiceConfig;
use fingerprint_common::error::ServiceError;
use fingerprint_common::request::{ExperimentRequest, FingerprintRequest, FormField};
use fingerprint_common::response::{
    decode_experiment_response, decode_fingerprint_response, ExperimentResult, FingerprintResult,
};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;

/// Blocking client for the two service endpoints.
pub struct ServiceClient {
    http: Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms as u64))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn generate(&self, request: &FingerprintRequest) -> Result<FingerprintResult, ServiceError> {
        let url = self.config.generate_url();
        tracing::info!(
            "POST {} ({} chars, size {}, {})",
            url,
            request.text().len(),
            request.params().size,
            request.params().hash_function
        );
        let body = self.post_form(&url, request.form_fields())?;
        decode_fingerprint_response(&body)
    }

    pub fn experiment(&self, request: &ExperimentRequest) -> Result<ExperimentResult, ServiceError> {
        let url = self.config.experiment_url();
        tracing::info!("POST {} (type {})", url, request.kind);
        let body = self.post_form(&url, request.form_fields())?;
        decode_experiment_response(&request.kind, &body)
    }

    /// Status codes are logged but not acted on; the body decides success.
    fn post_form(&self, url: &str, fields: Vec<FormField>) -> Result<String, ServiceError> {
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered HTTP {}", url, status);
        }

        response.text().map_err(|e| self.transport(e))
    }

    fn transport(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(self.config.timeout_ms)
        } else {
            ServiceError::Transport(e.to_string())
        }
    }
}
