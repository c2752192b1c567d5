/// Path of the fingerprint generation endpoint.
pub const GENERATE_PATH: &str = "/api/generate-fingerprint";

/// Path of the experiment endpoint.
pub const EXPERIMENT_PATH: &str = "/api/run-experiment";

/// Client timeout. The service caps its own worker at 30 s, so this leaves
/// headroom for JVM start-up and encoding.
pub const DEFAULT_TIMEOUT_MS: u32 = 60_000;

/// Where and how to reach the fingerprint service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Scheme + host (+ optional prefix). Empty means same origin.
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ServiceConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn generate_url(&self) -> String {
        endpoint_url(&self.base_url, GENERATE_PATH)
    }

    pub fn experiment_url(&self) -> String {
        endpoint_url(&self.base_url, EXPERIMENT_PATH)
    }
}

/// Join a base URL and an absolute endpoint path without doubling slashes.
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
