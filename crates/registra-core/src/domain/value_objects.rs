//! Domain value objects: EntityType, Field, ValidationIssue, WizardStep, Locale.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO validation logic. Patterns and thresholds live in
//! `rules.rs`; this file only defines the types, their string
//! representations and their parsers.
//!
//! # Adding a legal form
//!
//! 1. Add the enum variant to [`EntityType`]
//! 2. Add it to [`EntityType::ALL`] at the position it should be displayed
//! 3. Add the `id`, `label` and `english_label` arms

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── EntityType ───────────────────────────────────────────────────────────────

/// A legal form a company can be registered under.
///
/// The catalog is closed: presentation renders [`EntityType::ALL`] for
/// selection and the validators only ever see one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    SoleProprietorship,
    LimitedLiability,
    JointStock,
    SimplifiedJointStock,
    GeneralPartnership,
    LimitedPartnership,
    ProfessionalCompany,
}

impl EntityType {
    /// Every legal form, in display order.
    pub const ALL: [EntityType; 7] = [
        Self::SoleProprietorship,
        Self::LimitedLiability,
        Self::JointStock,
        Self::SimplifiedJointStock,
        Self::GeneralPartnership,
        Self::LimitedPartnership,
        Self::ProfessionalCompany,
    ];

    /// Stable identifier, safe for config files and wire formats.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SoleProprietorship => "sole_proprietorship",
            Self::LimitedLiability => "limited_liability",
            Self::JointStock => "joint_stock",
            Self::SimplifiedJointStock => "simplified_joint_stock",
            Self::GeneralPartnership => "general_partnership",
            Self::LimitedPartnership => "limited_partnership",
            Self::ProfessionalCompany => "professional_company",
        }
    }

    /// Arabic display label, as registered with the ministry.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SoleProprietorship => "مؤسسة فردية",
            Self::LimitedLiability => "شركة ذات مسؤولية محدودة",
            Self::JointStock => "شركة مساهمة",
            Self::SimplifiedJointStock => "شركة مساهمة مبسطة",
            Self::GeneralPartnership => "شركة تضامن",
            Self::LimitedPartnership => "شركة توصية بسيطة",
            Self::ProfessionalCompany => "شركة مهنية",
        }
    }

    pub const fn english_label(&self) -> &'static str {
        match self {
            Self::SoleProprietorship => "Sole Proprietorship",
            Self::LimitedLiability => "Limited Liability Company",
            Self::JointStock => "Joint Stock Company",
            Self::SimplifiedJointStock => "Simplified Joint Stock Company",
            Self::GeneralPartnership => "General Partnership",
            Self::LimitedPartnership => "Limited Partnership",
            Self::ProfessionalCompany => "Professional Company",
        }
    }

    /// Display label for the given locale.
    pub const fn label_in(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.label(),
            Locale::English => self.english_label(),
        }
    }

    /// Resolve a selection coming from presentation.
    ///
    /// Accepts the id (ASCII case-insensitive) or either display label
    /// (exact, after trimming). Returns `None` for anything outside the
    /// catalog.
    pub fn lookup(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|entity| {
            entity.id().eq_ignore_ascii_case(value)
                || entity.label() == value
                || entity.english_label() == value
        })
    }

    /// All catalog ids, in display order.
    pub fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(EntityType::id).collect()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EntityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| DomainError::UnknownEntityType { id: s.to_string() })
    }
}

// ── Field ────────────────────────────────────────────────────────────────────

/// A form field the engine can report an error against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // company step
    Name,
    EntityType,
    RegistrationNumber,
    // representative step
    FullName,
    NationalId,
    BirthDate,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::EntityType => "entityType",
            Self::RegistrationNumber => "registrationNumber",
            Self::FullName => "fullName",
            Self::NationalId => "nationalId",
            Self::BirthDate => "birthDate",
        }
    }

    /// Label shown beside the field.
    pub const fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Name, Locale::English) => "Company name",
            (Self::Name, Locale::Arabic) => "اسم الشركة",
            (Self::EntityType, Locale::English) => "Entity type",
            (Self::EntityType, Locale::Arabic) => "نوع الكيان",
            (Self::RegistrationNumber, Locale::English) => "Commercial registration number",
            (Self::RegistrationNumber, Locale::Arabic) => "رقم السجل التجاري",
            (Self::FullName, Locale::English) => "Representative full name",
            (Self::FullName, Locale::Arabic) => "الاسم الرباعي",
            (Self::NationalId, Locale::English) => "National ID",
            (Self::NationalId, Locale::Arabic) => "رقم الهوية الوطنية",
            (Self::BirthDate, Locale::English) => "Date of birth",
            (Self::BirthDate, Locale::Arabic) => "تاريخ الميلاد",
        }
    }

    /// The wizard step whose form owns this field.
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::Name | Self::EntityType | Self::RegistrationNumber => WizardStep::CompanyInfo,
            Self::FullName | Self::NationalId | Self::BirthDate => WizardStep::RepresentativeInfo,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ValidationIssue ──────────────────────────────────────────────────────────

/// Why a field was rejected.
///
/// These are expected outcomes of validating user input, not errors: they
/// are collected into a `ValidationVerdict` and never returned through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationIssue {
    /// Required text field left blank.
    EmptyField,
    /// Required choice left unset.
    MissingSelection,
    /// Value present but does not match the required pattern.
    FormatMismatch,
    /// Name present but has fewer tokens than required.
    IncompleteName,
    /// Date of birth not selected.
    MissingDate,
    /// Date of birth selected but the person is younger than the age of majority.
    Underage,
}

impl ValidationIssue {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::MissingSelection => "missing_selection",
            Self::FormatMismatch => "format_mismatch",
            Self::IncompleteName => "incomplete_name",
            Self::MissingDate => "missing_date",
            Self::Underage => "underage",
        }
    }

    /// Message shown to the user for this issue on `field`.
    pub const fn message(&self, field: Field, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english_message(field),
            Locale::Arabic => self.arabic_message(field),
        }
    }

    const fn english_message(&self, field: Field) -> &'static str {
        match (self, field) {
            (Self::EmptyField, Field::Name) => "Company name is required",
            (Self::EmptyField, _) => "This field is required",
            (Self::MissingSelection, _) => "Select the company's legal entity type",
            (Self::FormatMismatch, Field::RegistrationNumber) => {
                "Commercial registration number must be 10 digits starting with 10, 40 or 70"
            }
            (Self::FormatMismatch, Field::NationalId) => {
                "National ID must be 10 digits starting with 1"
            }
            (Self::FormatMismatch, _) => "Invalid format",
            (Self::IncompleteName, _) => {
                "Enter the full legal name (at least first and family name)"
            }
            (Self::MissingDate, _) => "Select the date of birth",
            (Self::Underage, _) => "The legal representative must be at least 18 years old",
        }
    }

    const fn arabic_message(&self, field: Field) -> &'static str {
        match (self, field) {
            (Self::EmptyField, Field::Name) => "اسم الشركة مطلوب",
            (Self::EmptyField, _) => "هذا الحقل مطلوب",
            (Self::MissingSelection, _) => "يرجى اختيار نوع الكيان",
            (Self::FormatMismatch, Field::RegistrationNumber) => {
                "رقم السجل التجاري يجب أن يتكون من 10 أرقام ويبدأ بـ 10 أو 40 أو 70"
            }
            (Self::FormatMismatch, Field::NationalId) => {
                "رقم الهوية الوطنية يجب أن يتكون من 10 أرقام ويبدأ بالرقم 1"
            }
            (Self::FormatMismatch, _) => "صيغة غير صحيحة",
            (Self::IncompleteName, _) => "يرجى إدخال الاسم الرباعي",
            (Self::MissingDate, _) => "يرجى اختيار تاريخ الميلاد",
            (Self::Underage, _) => "يجب ألا يقل عمر الممثل النظامي عن 18 عامًا",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ── WizardStep ───────────────────────────────────────────────────────────────

/// A stage of the intake flow.
///
/// `Documents` belongs to the external document-upload stage; reaching it
/// means the engine is ready to hand off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    CompanyInfo,
    RepresentativeInfo,
    Documents,
}

impl WizardStep {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyInfo => "company_info",
            Self::RepresentativeInfo => "representative_info",
            Self::Documents => "documents",
        }
    }

    /// One-based position, for "step 1 of 3" style indicators.
    pub const fn number(&self) -> u8 {
        match self {
            Self::CompanyInfo => 1,
            Self::RepresentativeInfo => 2,
            Self::Documents => 3,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::CompanyInfo => Some(Self::RepresentativeInfo),
            Self::RepresentativeInfo => Some(Self::Documents),
            Self::Documents => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::CompanyInfo => None,
            Self::RepresentativeInfo => Some(Self::CompanyInfo),
            Self::Documents => Some(Self::RepresentativeInfo),
        }
    }

    /// Whether this step is owned by a downstream stage.
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::Documents)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Locale ───────────────────────────────────────────────────────────────────

/// Language of user-facing messages. Only the two fixed tables exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            other => Err(DomainError::UnsupportedLocale {
                locale: other.to_string(),
            }),
        }
    }
}
