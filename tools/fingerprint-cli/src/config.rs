use std::fs;
use std::path::PathBuf;

use fingerprint_common::config::{ServiceConfig, DEFAULT_TIMEOUT_MS};
use serde::Deserialize;

/// Flask's development server address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// On-disk client settings. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u32>,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("hash-fingerprint");
    p.push("client.toml");
    Some(p)
}

/// Read the config file. A missing default file is fine; a missing file the
/// user named explicitly is an error.
pub fn read_file_config(path: Option<&str>) -> Result<FileConfig, Box<dyn std::error::Error>> {
    let explicit = path.is_some();
    let Some(path) = path.map(PathBuf::from).or_else(default_config_path) else {
        return Ok(FileConfig::default());
    };
    if !explicit && !path.exists() {
        return Ok(FileConfig::default());
    }
    let text = fs::read_to_string(&path)
        .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
    let config: FileConfig = toml::from_str(&text)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Layer defaults, file values, then the command-line override.
pub fn resolve(file: FileConfig, base_url_flag: Option<String>) -> ServiceConfig {
    let base_url = base_url_flag
        .or(file.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout_ms = file
        .timeout_secs
        .filter(|s| *s > 0)
        .map(|s| s.saturating_mul(1000))
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    ServiceConfig {
        timeout_ms,
        ..ServiceConfig::with_base_url(base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_flag() {
        let config = resolve(FileConfig::default(), None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn flag_beats_file() {
        let file = FileConfig {
            base_url: Some("http://file:1".into()),
            timeout_secs: Some(5),
        };
        let config = resolve(file, Some("http://flag:2".into()));
        assert_eq!(config.base_url, "http://flag:2");
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let file = FileConfig {
            base_url: None,
            timeout_secs: Some(0),
        };
        assert_eq!(resolve(file, None).timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn reads_toml_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "base_url = \"http://10.0.0.2:8080\"\ntimeout_secs = 12").unwrap();
        let config = read_file_config(f.path().to_str()).unwrap();
        assert_eq!(
            config,
            FileConfig {
                base_url: Some("http://10.0.0.2:8080".into()),
                timeout_secs: Some(12),
            }
        );
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(read_file_config(missing.to_str()).is_err());
    }
}
