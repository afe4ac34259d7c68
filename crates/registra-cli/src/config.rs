//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`REGISTRA_OUTPUT__LOCALE=ar`)
//! 3. `--config FILE` (must exist when given)
//! 4. `.registra.toml` in the current directory (optional)
//! 5. The platform config file (optional)
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use registra_core::domain::Locale;

use crate::cli::OutputFormat;

/// Environment variable prefix; nesting uses `__`.
pub const ENV_PREFIX: &str = "REGISTRA";

/// File name of a per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".registra.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Intake settings.
    pub intake: IntakeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left on `auto`.
    pub format: OutputFormat,
    pub locale: Locale,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Pin "today" for age checks; the system date is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    /// Load configuration by layering defaults, files and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// implicit locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(global: &Path, local: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("serialising defaults")?)
            .add_source(File::from(global).format(FileFormat::Toml).required(false))
            .add_source(File::from(local).format(FileFormat::Toml).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "using explicit config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("reading configuration sources")?;

        config
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.registra.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "registra", "registra")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `config set` and `init` write to.
    pub fn target_path(explicit: Option<&PathBuf>, local: bool) -> PathBuf {
        match explicit {
            Some(path) => path.clone(),
            None if local => PathBuf::from(LOCAL_CONFIG_FILE),
            None => Self::config_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn missing(temp: &TempDir, name: &str) -> PathBuf {
        temp.path().join(name)
    }

    #[test]
    fn defaults_are_english_auto() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.output.locale, Locale::English);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert!(!cfg.output.no_color);
        assert!(cfg.intake.today.is_none());
    }

    #[test]
    fn load_without_files_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(
            &missing(&temp, "global.toml"),
            &missing(&temp, "local.toml"),
            None,
        )
        .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn explicit_file_overrides_local() {
        let temp = TempDir::new().unwrap();
        let local = temp.path().join("local.toml");
        let explicit = temp.path().join("explicit.toml");
        fs::write(&local, "[output]\nlocale = \"ar\"\nno_color = true\n").unwrap();
        fs::write(&explicit, "[output]\nlocale = \"en\"\n\n[intake]\ntoday = \"2026-10-18\"\n")
            .unwrap();

        let cfg =
            AppConfig::load_from(&missing(&temp, "global.toml"), &local, Some(&explicit)).unwrap();
        assert_eq!(cfg.output.locale, Locale::English);
        assert!(cfg.output.no_color);
        assert_eq!(cfg.intake.today, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = AppConfig::load_from(
            &missing(&temp, "global.toml"),
            &missing(&temp, "local.toml"),
            Some(&missing(&temp, "nope.toml")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_locale_is_error() {
        let temp = TempDir::new().unwrap();
        let local = temp.path().join("local.toml");
        fs::write(&local, "[output]\nlocale = \"fr\"\n").unwrap();
        let result = AppConfig::load_from(&missing(&temp, "global.toml"), &local, None);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn target_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/registra.toml");
        assert_eq!(AppConfig::target_path(Some(&explicit), true), explicit);
        assert_eq!(
            AppConfig::target_path(None, true),
            PathBuf::from(LOCAL_CONFIG_FILE)
        );
    }
}
