use chrono::NaiveDate;
use tracing::trace;

use crate::domain::{
    entities::ValidationVerdict,
    error::DomainError,
    rules,
    value_objects::{EntityType, Field, ValidationIssue},
};

/// Validates the company-identity step.
///
/// Every check runs on every call: the verdict lists all offending fields
/// at once, never just the first.
pub struct CompanyIdentityValidator;

impl CompanyIdentityValidator {
    pub fn validate(
        name: &str,
        entity_type: Option<EntityType>,
        registration_number: &str,
    ) -> ValidationVerdict {
        let mut verdict = ValidationVerdict::new();
        verdict.record(Field::Name, Self::check_name(name));
        verdict.record(Field::EntityType, Self::check_entity_type(entity_type));
        verdict.record(
            Field::RegistrationNumber,
            Self::check_registration_number(registration_number),
        );

        trace!(errors = verdict.error_count(), "company identity validated");
        verdict
    }

    /// Validate with the entity type still in its raw, presentation form.
    ///
    /// `None` or a blank id means nothing was selected and is reported in
    /// the verdict. An id outside the catalog means the caller rendered
    /// something the engine never offered, so it is returned as an error
    /// instead.
    pub fn validate_raw(
        name: &str,
        entity_type_id: Option<&str>,
        registration_number: &str,
    ) -> Result<ValidationVerdict, DomainError> {
        let entity_type = match entity_type_id.map(str::trim) {
            None | Some("") => None,
            Some(id) => Some(
                EntityType::lookup(id)
                    .ok_or_else(|| DomainError::UnknownEntityType { id: id.to_string() })?,
            ),
        };

        Ok(Self::validate(name, entity_type, registration_number))
    }

    fn check_name(name: &str) -> Option<ValidationIssue> {
        name.trim()
            .is_empty()
            .then_some(ValidationIssue::EmptyField)
    }

    fn check_entity_type(entity_type: Option<EntityType>) -> Option<ValidationIssue> {
        entity_type
            .is_none()
            .then_some(ValidationIssue::MissingSelection)
    }

    fn check_registration_number(number: &str) -> Option<ValidationIssue> {
        (!rules::is_registration_number(number)).then_some(ValidationIssue::FormatMismatch)
    }
}

/// Validates the legal-representative step.
///
/// `today` is passed in rather than read from the wall clock; callers get it
/// from the `Clock` port.
pub struct RepresentativeIdentityValidator;

impl RepresentativeIdentityValidator {
    pub fn validate(
        full_name: &str,
        national_id: &str,
        birth_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> ValidationVerdict {
        let mut verdict = ValidationVerdict::new();
        verdict.record(Field::FullName, Self::check_full_name(full_name));
        verdict.record(Field::NationalId, Self::check_national_id(national_id));
        verdict.record(Field::BirthDate, Self::check_birth_date(birth_date, today));

        trace!(
            errors = verdict.error_count(),
            %today,
            "representative identity validated"
        );
        verdict
    }

    fn check_full_name(full_name: &str) -> Option<ValidationIssue> {
        (!rules::is_complete_name(full_name)).then_some(ValidationIssue::IncompleteName)
    }

    fn check_national_id(national_id: &str) -> Option<ValidationIssue> {
        (!rules::is_national_id(national_id)).then_some(ValidationIssue::FormatMismatch)
    }

    fn check_birth_date(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<ValidationIssue> {
        match birth_date {
            None => Some(ValidationIssue::MissingDate),
            Some(birth) if !rules::is_of_age(birth, today) => Some(ValidationIssue::Underage),
            Some(_) => None,
        }
    }
}
