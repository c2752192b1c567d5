use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Map sizes offered by the size selector.
pub const MAP_SIZES: &[u32] = &[32, 64, 128, 256, 512];

/// Hash function identifiers understood by the service. Sent verbatim.
pub const HASH_FUNCTIONS: &[&str] = &[
    "String Length",
    "First Character",
    "Character Sum",
    "Java hashCode",
    "Polynomial",
];

pub const DEFAULT_SIZE: u32 = 128;
pub const DEFAULT_HASH_FUNCTION: &str = "String Length";
pub const DEFAULT_SALT_PERCENT: u32 = 5;
pub const DEFAULT_SMOOTH_RADIUS: u32 = 2;

pub const MAX_SALT_PERCENT: u32 = 100;
pub const MAX_SMOOTH_RADIUS: u32 = 10;

/// Everything the user tunes besides the text itself.
///
/// The salt level is kept as the slider's integer percentage; the wire value
/// is the fraction, see [`FingerprintParams::salt_fraction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintParams {
    pub size: u32,
    pub hash_function: String,
    pub salt_percent: u32,
    pub smooth_radius: u32,
}

impl Default for FingerprintParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            hash_function: DEFAULT_HASH_FUNCTION.to_string(),
            salt_percent: DEFAULT_SALT_PERCENT,
            smooth_radius: DEFAULT_SMOOTH_RADIUS,
        }
    }
}

impl FingerprintParams {
    /// Salt level normalized to [0, 1].
    pub fn salt_fraction(&self) -> f64 {
        salt_fraction(self.salt_percent)
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.size == 0 {
            return Err(RequestError::ZeroSize);
        }
        if self.salt_percent > MAX_SALT_PERCENT {
            return Err(RequestError::SaltOutOfRange(self.salt_percent));
        }
        Ok(())
    }
}

pub fn salt_fraction(percent: u32) -> f64 {
    percent as f64 / 100.0
}
