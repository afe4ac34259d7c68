// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Registra.
//!
//! This module contains the pure intake rules: what a well-formed company
//! and legal representative look like, and when the flow may move on.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No clock reads, filesystem or network; "today" is a parameter
//! - **Few external crates**: std + thiserror + chrono (calendar math) + serde
//! - **Immutable results**: a `ValidationVerdict` is built fresh per call
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;
pub mod wizard;

mod validation;

// Re-exports for convenience
pub use entities::{CompanyIdentity, IntakeForm, RepresentativeIdentity, ValidationVerdict};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{EntityType, Field, Locale, ValidationIssue, WizardStep};

pub use validation::{CompanyIdentityValidator, RepresentativeIdentityValidator};
pub use wizard::{Transition, WizardController};

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    // ========================================================================
    // Full flow, domain only
    // ========================================================================

    #[test]
    fn company_then_representative_reaches_handoff() {
        let mut wizard = WizardController::new();

        let company = CompanyIdentity::new()
            .with_name("Ahmed Al Saud")
            .with_entity_type(EntityType::LimitedLiability)
            .with_registration_number("4098765432");
        assert!(wizard.advance(&company.validate()).moved());

        let representative = RepresentativeIdentity::new()
            .with_full_name("Ahmed Saleh Al Saud")
            .with_national_id("1023456789")
            .with_birth_date(NaiveDate::from_ymd_opt(1985, 2, 3).unwrap());
        assert!(wizard.advance(&representative.validate(today())).moved());

        assert!(wizard.is_ready_for_handoff());
    }

    #[test]
    fn invalid_representative_blocks_then_back_returns_to_company() {
        let mut wizard = WizardController::new();
        let company = CompanyIdentity::new()
            .with_name("Acme")
            .with_entity_type(EntityType::GeneralPartnership)
            .with_registration_number("1012345678");
        let _ = wizard.advance(&company.validate());

        let minor = RepresentativeIdentity::new()
            .with_full_name("Sara Khalid")
            .with_national_id("1098765432")
            .with_birth_date(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        let verdict = minor.validate(today());
        assert_eq!(
            wizard.advance(&verdict),
            Transition::Blocked(WizardStep::RepresentativeInfo)
        );
        assert_eq!(
            verdict.message_for(Field::BirthDate, Locale::English),
            Some("The legal representative must be at least 18 years old")
        );

        assert_eq!(
            wizard.retreat(),
            Transition::Retreated(WizardStep::CompanyInfo)
        );
    }

    #[test]
    fn arabic_messages_map_one_to_one() {
        let verdict = CompanyIdentity::new().validate();
        let messages = verdict.messages(Locale::Arabic);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[&Field::Name], "اسم الشركة مطلوب");
    }
}
