//! Analyzer configuration: parsing and validation.
//!
//! A small TOML file can pin the default report path and projection target
//! so the CLI does not need them on every invocation:
//!
//! ```toml
//! report = "/path/to/battery-report.html"
//! target_health = 75.0
//! ```

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

/// Projection target used when neither the CLI nor the config supplies one.
pub const DEFAULT_TARGET_HEALTH: f64 = 80.0;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Default path to the HTML report.
    pub report: Option<String>,
    /// Default projection target, validated to lie in `[0, 100]`.
    pub target_health: Option<f64>,
}

impl AnalyzerConfig {
    pub fn target_or_default(&self) -> f64 {
        self.target_health.unwrap_or(DEFAULT_TARGET_HEALTH)
    }
}

/// Parse and validate a config from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<AnalyzerConfig> {
    let cfg: AnalyzerConfig = toml::from_str(toml_str).context("failed to parse analyzer TOML")?;
    if let Some(target) = cfg.target_health {
        if !(0.0..=100.0).contains(&target) {
            bail!("target_health must be between 0 and 100, got {target}");
        }
    }
    Ok(cfg)
}

/// Read an analyzer TOML file from disk, parse, and validate it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<AnalyzerConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_defaults() {
        let cfg = load_config_str("report = \"r.html\"\n").unwrap();
        assert_eq!(cfg.report.as_deref(), Some("r.html"));
        assert_eq!(cfg.target_or_default(), DEFAULT_TARGET_HEALTH);

        let cfg = load_config_str("target_health = 75.0\n").unwrap();
        assert_eq!(cfg.target_or_default(), 75.0);
    }

    #[test]
    fn out_of_range_target_fails_at_load() {
        let err = load_config_str("target_health = 150.0\n").unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(load_config_str("unknown_key = 1\n").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analyzer.toml");
        std::fs::write(&path, "report = \"r.html\"\ntarget_health = 70.0\n").unwrap();
        let cfg = load_config_path(&path).unwrap();
        assert_eq!(cfg.report.as_deref(), Some("r.html"));
        assert_eq!(cfg.target_or_default(), 70.0);
    }
}
