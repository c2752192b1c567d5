use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;
use crate::experiment;

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A PNG exactly as it travels: base64 text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `<img src>`.
    pub fn data_url(&self) -> String {
        format!("{}{}", PNG_DATA_URL_PREFIX, self.0)
    }

    pub fn decode(&self) -> Result<Vec<u8>, ServiceError> {
        BASE64
            .decode(self.0.as_bytes())
            .map_err(|e| ServiceError::Invalid(format!("image is not valid base64: {}", e)))
    }
}

/// Word and collision counts reported alongside the images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintStats {
    pub total_words: u64,
    pub unique_words: u64,
    pub collisions: u64,
    pub max_collision_level: u64,
}

/// One labelled row of the statistics panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: u64,
}

impl FingerprintStats {
    /// Panel rows, always four and always in this order.
    pub fn entries(&self) -> [StatEntry; 4] {
        [
            StatEntry {
                label: "Total Words",
                value: self.total_words,
            },
            StatEntry {
                label: "Unique Words",
                value: self.unique_words,
            },
            StatEntry {
                label: "Collisions",
                value: self.collisions,
            },
            StatEntry {
                label: "Max Collision Level",
                value: self.max_collision_level,
            },
        ]
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.unique_words > self.total_words {
            return Err(ServiceError::Invalid(format!(
                "uniqueWords ({}) exceeds totalWords ({})",
                self.unique_words, self.total_words
            )));
        }
        Ok(())
    }
}

/// Successful answer of the generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintResult {
    pub raw_image: EncodedImage,
    pub enhanced_image: EncodedImage,
    pub stats: FingerprintStats,
}

impl FingerprintResult {
    fn validate(&self) -> Result<(), ServiceError> {
        let images = [
            ("raw_image", &self.raw_image),
            ("enhanced_image", &self.enhanced_image),
        ];
        for (name, image) in images {
            if image.as_str().is_empty() {
                return Err(ServiceError::Invalid(format!("{} is empty", name)));
            }
            image.decode()?;
        }
        self.stats.validate()
    }
}

/// Successful answer of the experiment endpoint. The payload shape belongs
/// to the service and is kept as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentResult {
    pub kind: String,
    pub payload: Value,
}

impl ExperimentResult {
    pub fn title(&self) -> &'static str {
        experiment::title_for(&self.kind)
    }

    pub fn description(&self) -> &'static str {
        experiment::description_for(&self.kind)
    }

    /// Payload with two-space indentation.
    pub fn pretty_payload(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string())
    }
}

/// The application-level error carried in a body, if any.
///
/// Follows the truthiness the service's own clients rely on: a missing,
/// `null`, `false`, zero or empty-string `error` is not a failure.
pub fn service_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode and validate a generation response body. HTTP status is ignored:
/// only the body decides success.
pub fn decode_fingerprint_response(body: &str) -> Result<FingerprintResult, ServiceError> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(msg) = service_error(&value) {
        return Err(ServiceError::Service(msg));
    }
    let result: FingerprintResult = serde_json::from_value(value)?;
    result.validate()?;
    Ok(result)
}

/// Decode an experiment response body for the given declared type.
pub fn decode_experiment_response(
    kind: &str,
    body: &str,
) -> Result<ExperimentResult, ServiceError> {
    let payload: Value = serde_json::from_str(body)?;
    if let Some(msg) = service_error(&payload) {
        return Err(ServiceError::Service(msg));
    }
    Ok(ExperimentResult {
        kind: kind.to_string(),
        payload,
    })
}
