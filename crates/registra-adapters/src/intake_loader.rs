//! File-based intake source.
//!
//! Reads a pre-filled intake snapshot from disk so a whole registration can
//! be checked in one go.
//!
//! # `intake.toml` format
//!
//! ```toml
//! [company]
//! name                = "Ahmed Al Saud"
//! entity_type         = "limited_liability"   # id or either label; optional
//! registration_number = "4098765432"
//!
//! [representative]
//! full_name   = "Ahmed Saleh Al Saud"
//! national_id = "1023456789"
//! birth_date  = "1990-05-14"                  # YYYY-MM-DD; optional
//! ```
//!
//! A `.json` file with the same shape is accepted too. Every section and
//! field is optional: missing values load as empty so the validators report
//! them, exactly as a blank form would.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use registra_core::{
    application::{ApplicationError, ports::IntakeSource},
    domain::{
        CompanyIdentity, DomainError, EntityType, IntakeForm, RepresentativeIdentity, rules,
    },
    error::RegistraResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of an intake file.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct IntakeManifest {
    pub company: CompanySection,
    pub representative: RepresentativeSection,
}

/// `[company]` section.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct CompanySection {
    pub name: String,
    /// Catalog id, Arabic label or English label.
    pub entity_type: Option<String>,
    pub registration_number: String,
}

/// `[representative]` section.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct RepresentativeSection {
    pub full_name: String,
    pub national_id: String,
    /// Kept as text so a malformed date is reported with the offending value.
    pub birth_date: Option<String>,
}

impl IntakeManifest {
    /// Resolve the raw manifest into domain values.
    ///
    /// Blank selections become "nothing selected"; a non-blank entity type
    /// outside the catalog and an unparseable date are errors.
    pub fn into_form(self) -> Result<IntakeForm, DomainError> {
        let entity_type = match non_blank(self.company.entity_type) {
            Some(value) => Some(
                EntityType::lookup(&value).ok_or(DomainError::UnknownEntityType { id: value })?,
            ),
            None => None,
        };

        let birth_date = non_blank(self.representative.birth_date)
            .map(|value| rules::parse_date(&value))
            .transpose()?;

        let mut company = CompanyIdentity::new()
            .with_name(self.company.name)
            .with_registration_number(self.company.registration_number);
        company.select_entity_type(entity_type);

        let mut representative = RepresentativeIdentity::new()
            .with_full_name(self.representative.full_name)
            .with_national_id(self.representative.national_id);
        representative.select_birth_date(birth_date);

        Ok(IntakeForm::new(company, representative))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Serialization format of an intake file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeFormat {
    Toml,
    Json,
}

impl IntakeFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// Loads an [`IntakeForm`] from a TOML or JSON file.
///
/// # Example
///
/// ```no_run
/// use registra_adapters::FileIntakeSource;
/// use registra_core::application::ports::IntakeSource;
///
/// let source = FileIntakeSource::new("./intake.toml");
/// let form = source.load()?;
/// println!("Loaded intake for {}", form.company.name);
/// # Ok::<(), registra_core::error::RegistraError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileIntakeSource {
    path: PathBuf,
    format: IntakeFormat,
}

impl FileIntakeSource {
    /// Create a source for `path`, detecting the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = IntakeFormat::from_path(&path);
        Self { path, format }
    }

    /// Override the detected format.
    pub fn with_format(mut self, format: IntakeFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> IntakeFormat {
        self.format
    }

    /// Parse intake text that has already been read.
    pub fn parse(&self, raw: &str) -> RegistraResult<IntakeForm> {
        let manifest: IntakeManifest = match self.format {
            IntakeFormat::Toml => toml::from_str(raw).map_err(|e| self.malformed(e))?,
            IntakeFormat::Json => serde_json::from_str(raw).map_err(|e| self.malformed(e))?,
        };
        Ok(manifest.into_form()?)
    }

    fn source_error(&self, reason: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::IntakeSource {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn malformed(&self, reason: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::IntakeMalformed {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl IntakeSource for FileIntakeSource {
    #[instrument(skip(self), fields(path = %self.path.display(), format = self.format.as_str()))]
    fn load(&self) -> RegistraResult<IntakeForm> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.source_error(e))?;
        let form = self.parse(&raw)?;
        debug!(
            entity_type = ?form.company.entity_type,
            has_birth_date = form.representative.birth_date.is_some(),
            "loaded intake file"
        );
        Ok(form)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.format.as_str())
    }
}
