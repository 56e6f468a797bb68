//! Configuration management.

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use portable_core::{ResetPolicy, ValidatorSettings, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Dots that must be exceeded before an application ID is accepted.
    pub threshold: Option<usize>,

    /// Dot counter reset policy.
    pub reset: Option<ResetPolicy>,

    /// Print the per-character scan trace.
    #[serde(default = "default_true")]
    pub trace: bool,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: None,
            reset: None,
            trace: true,
            output_format: None,
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "portable", "portable-config")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Use `explicit` when given (expanding `~` and `$VARS`), else the default path.
    pub fn resolve_path(explicit: Option<&str>) -> Result<PathBuf> {
        match explicit {
            Some(raw) => {
                let expanded = shellexpand::full(raw)
                    .map_err(|e| anyhow::anyhow!("Could not expand config path {raw}: {e}"))?;
                Ok(PathBuf::from(expanded.as_ref()))
            }
            None => Self::path(),
        }
    }

    /// Load configuration from file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Loop settings with defaults filled in.
    pub fn settings(&self) -> ValidatorSettings {
        ValidatorSettings {
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
            reset: self.reset.unwrap_or_default(),
        }
    }

    /// Update one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "threshold" => {
                self.threshold = Some(value.parse().map_err(|_| {
                    anyhow::anyhow!("threshold must be a non-negative integer, got '{value}'")
                })?);
            }
            "reset" => self.reset = Some(value.parse()?),
            "trace" => self.trace = value.parse()?,
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     threshold      - Dots to exceed before accepting (default 2)\n  \
                     reset          - Dot counter policy (cumulative/per-attempt)\n  \
                     trace          - Print every scanned character (true/false)\n  \
                     output_format  - Report format (pretty/json/csv/yaml)",
                    key
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings(), ValidatorSettings::default());
        assert!(config.trace);
    }

    #[test]
    fn partial_file_keeps_trace_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "threshold = 4\nreset = \"per-attempt\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.trace);
        assert_eq!(
            config.settings(),
            ValidatorSettings {
                threshold: 4,
                reset: ResetPolicy::PerAttempt,
            }
        );
    }

    #[test]
    fn save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("threshold", "5").unwrap();
        config.set("reset", "per-attempt").unwrap();
        config.set("trace", "false").unwrap();
        config.set("output", "yaml").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut config = Config::default();
        assert!(config.set("threshold", "-1").is_err());
        assert!(config.set("reset", "weekly").is_err());
        assert!(config.set("trace", "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "threshold = \"lots\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn explicit_path_expands_variables() {
        std::env::set_var("PORTABLE_CONFIG_TEST_ROOT", "/srv/portable");
        let path = Config::resolve_path(Some("$PORTABLE_CONFIG_TEST_ROOT/config.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/srv/portable/config.toml"));
    }

    #[test]
    fn explicit_path_expands_home() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let path = Config::resolve_path(Some("~/portable.toml")).unwrap();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with("portable.toml"));
    }

    #[test]
    fn undefined_variable_is_an_error() {
        assert!(Config::resolve_path(Some("$PORTABLE_CONFIG_TEST_UNSET_VAR/x.toml")).is_err());
    }

    #[test]
    fn explicit_path_is_used() {
        let path = Config::resolve_path(Some("/tmp/portable/config.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/portable/config.toml"));
    }
}
