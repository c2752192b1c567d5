use crate::error::RequestError;
use crate::experiment::ExperimentKind;
use crate::params::FingerprintParams;

/// One multipart form field as (name, value).
pub type FormField = (&'static str, String);

/// A validated request to the generation endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct FingerprintRequest {
    text: String,
    params: FingerprintParams,
}

impl FingerprintRequest {
    /// Trims the text and checks it is non-empty before anything is built.
    pub fn new(text: &str, params: FingerprintParams) -> Result<Self, RequestError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RequestError::EmptyText);
        }
        params.validate()?;
        Ok(Self {
            text: text.to_string(),
            params,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &FingerprintParams {
        &self.params
    }

    /// Form fields in submission order.
    pub fn form_fields(&self) -> Vec<FormField> {
        vec![
            ("text", self.text.clone()),
            ("size", self.params.size.to_string()),
            ("hashFunction", self.params.hash_function.clone()),
            ("saltLevel", self.params.salt_fraction().to_string()),
            ("smoothRadius", self.params.smooth_radius.to_string()),
        ]
    }
}

/// A request to the experiment endpoint.
///
/// Carries the raw type string so buttons declaring a type the client does
/// not know still reach the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentRequest {
    pub kind: String,
}

impl ExperimentRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn known(&self) -> Option<ExperimentKind> {
        self.kind.parse().ok()
    }

    pub fn form_fields(&self) -> Vec<FormField> {
        vec![("type", self.kind.clone())]
    }
}

impl From<ExperimentKind> for ExperimentRequest {
    fn from(kind: ExperimentKind) -> Self {
        Self::new(kind.as_str())
    }
}
