use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::badge::DEFAULT_ENDPOINT;
use crate::coverage::DEFAULT_THRESHOLD;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Clover XML report to read
    #[serde(default = "default_report")]
    pub report: PathBuf,
    /// Minimum statement coverage ratio, in [0, 1]
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Static badge endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Directory the badge images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "BadgeTarget::statements")]
    pub statements: BadgeTarget,
    #[serde(default = "BadgeTarget::methods")]
    pub methods: BadgeTarget,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BadgeTarget {
    pub caption: String,
    pub file: PathBuf,
}

impl BadgeTarget {
    fn statements() -> Self {
        Self {
            caption: "code coverage".to_string(),
            file: PathBuf::from("code_coverage.svg"),
        }
    }

    fn methods() -> Self {
        Self {
            caption: "methods coverage".to_string(),
            file: PathBuf::from("methods_coverage.svg"),
        }
    }
}

fn default_report() -> PathBuf {
    PathBuf::from("../report.xml")
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: default_report(),
            threshold: default_threshold(),
            endpoint: default_endpoint(),
            output_dir: default_output_dir(),
            statements: BadgeTarget::statements(),
            methods: BadgeTarget::methods(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            anyhow::bail!(
                "threshold must be a ratio between 0 and 1, got {}",
                self.threshold
            );
        }

        if self.endpoint.trim().is_empty() {
            anyhow::bail!("endpoint must not be empty");
        }

        Ok(())
    }

    pub fn statements_path(&self) -> PathBuf {
        self.output_dir.join(&self.statements.file)
    }

    pub fn methods_path(&self) -> PathBuf {
        self.output_dir.join(&self.methods.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.report, PathBuf::from("../report.xml"));
        assert_eq!(config.threshold, 0.92);
        assert_eq!(config.endpoint, "https://img.shields.io/badge");
        assert_eq!(config.statements_path(), PathBuf::from("./code_coverage.svg"));
        assert_eq!(config.methods.caption, "methods coverage");
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
report = "build/logs/clover.xml"
threshold = 0.85
output_dir = "badges"

[methods]
caption = "methods"
file = "methods.svg"
"#;

        let config = Config::from_toml(toml_content).unwrap();
        assert_eq!(config.report, PathBuf::from("build/logs/clover.xml"));
        assert_eq!(config.threshold, 0.85);
        assert_eq!(config.methods_path(), PathBuf::from("badges/methods.svg"));
        assert_eq!(config.statements.caption, "code coverage");
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = Config::from_toml("threshold = 92").unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("treshold = 0.9").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("covbadge.toml")).unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);

        assert!(Config::load(&dir.path().join("covbadge.toml")).is_err());
    }
}
