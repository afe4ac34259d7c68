//! Intake Service - main application orchestrator.
//!
//! This service is what a presentation layer talks to:
//! 1. Validate field values on every edit (no state change)
//! 2. Submit a step on "continue" (validate, then gate the wizard)
//! 3. Go back on request (never gated)
//!
//! It owns the wizard state of exactly one in-flight intake and reads
//! "today" through the injected [`Clock`].

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{ApplicationError, ports::Clock},
    domain::{
        CompanyIdentity, CompanyIdentityValidator, IntakeForm, RepresentativeIdentity,
        RepresentativeIdentityValidator, Transition, ValidationVerdict, WizardController,
        WizardStep,
    },
    error::RegistraResult,
};

/// Result of submitting one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub verdict: ValidationVerdict,
    pub transition: Transition,
}

impl StepOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self.transition, Transition::Advanced(_))
    }
}

/// Summary of driving a whole snapshot through the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReport {
    pub session: Uuid,
    pub today: NaiveDate,
    pub company: StepOutcome,
    /// `None` when the company step blocked and the representative step was
    /// never reached.
    pub representative: Option<StepOutcome>,
    pub final_step: WizardStep,
}

impl IntakeReport {
    pub fn ready_for_handoff(&self) -> bool {
        self.final_step.is_external()
    }

    /// The verdict of the step the flow stopped on, if it stopped early.
    pub fn blocking_verdict(&self) -> Option<&ValidationVerdict> {
        if !self.company.advanced() {
            return Some(&self.company.verdict);
        }
        self.representative
            .as_ref()
            .filter(|outcome| !outcome.advanced())
            .map(|outcome| &outcome.verdict)
    }
}

/// Orchestrates one intake flow.
pub struct IntakeService {
    clock: Box<dyn Clock>,
    wizard: WizardController,
    session: Uuid,
}

impl IntakeService {
    /// Start a new flow on the first step.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        let session = Uuid::new_v4();
        debug!(%session, "intake session started");
        Self {
            clock,
            wizard: WizardController::new(),
            session,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn is_ready_for_handoff(&self) -> bool {
        self.wizard.is_ready_for_handoff()
    }

    // ── per-edit validation ─────────────────────────────────────────────

    /// Validate company fields as the presentation layer holds them.
    ///
    /// Only an entity-type id outside the catalog is an `Err`; every other
    /// problem is reported in the verdict.
    pub fn validate_company_identity(
        &self,
        name: &str,
        entity_type_id: Option<&str>,
        registration_number: &str,
    ) -> RegistraResult<ValidationVerdict> {
        Ok(CompanyIdentityValidator::validate_raw(
            name,
            entity_type_id,
            registration_number,
        )?)
    }

    /// Validate representative fields against today's date.
    pub fn validate_representative_identity(
        &self,
        full_name: &str,
        national_id: &str,
        birth_date: Option<NaiveDate>,
    ) -> ValidationVerdict {
        RepresentativeIdentityValidator::validate(full_name, national_id, birth_date, self.today())
    }

    // ── navigation ──────────────────────────────────────────────────────

    /// "Continue" on the company step.
    #[instrument(skip_all, fields(session = %self.session))]
    pub fn submit_company(&mut self, company: &CompanyIdentity) -> RegistraResult<StepOutcome> {
        self.expect_step(WizardStep::CompanyInfo)?;
        let verdict = company.validate();
        Ok(self.gate(verdict))
    }

    /// "Continue" on the representative step.
    #[instrument(skip_all, fields(session = %self.session))]
    pub fn submit_representative(
        &mut self,
        representative: &RepresentativeIdentity,
    ) -> RegistraResult<StepOutcome> {
        self.expect_step(WizardStep::RepresentativeInfo)?;
        let verdict = representative.validate(self.today());
        Ok(self.gate(verdict))
    }

    /// "Back". Never validated.
    #[instrument(skip_all, fields(session = %self.session))]
    pub fn back(&mut self) -> Transition {
        let transition = self.wizard.retreat();
        debug!(?transition, "back requested");
        transition
    }

    /// Drive a complete snapshot through both steps from the start,
    /// stopping at the first step that does not pass.
    #[instrument(skip_all, fields(session = %self.session))]
    pub fn run(&mut self, form: &IntakeForm) -> RegistraResult<IntakeReport> {
        self.wizard = WizardController::new();

        let company = self.submit_company(&form.company)?;
        let representative = if company.advanced() {
            Some(self.submit_representative(&form.representative)?)
        } else {
            None
        };

        let report = IntakeReport {
            session: self.session,
            today: self.today(),
            company,
            representative,
            final_step: self.step(),
        };
        info!(
            final_step = %report.final_step,
            ready = report.ready_for_handoff(),
            "intake run finished"
        );
        Ok(report)
    }

    fn expect_step(&self, submitted: WizardStep) -> RegistraResult<()> {
        let current = self.wizard.step();
        if current != submitted {
            return Err(ApplicationError::OutOfStep { submitted, current }.into());
        }
        Ok(())
    }

    fn gate(&mut self, verdict: ValidationVerdict) -> StepOutcome {
        let transition = self.wizard.advance(&verdict);
        match transition {
            Transition::Advanced(step) if step.is_external() => {
                info!("intake ready for document hand-off");
            }
            Transition::Advanced(step) => info!(%step, "step passed"),
            Transition::Blocked(step) => {
                info!(%step, errors = verdict.error_count(), "step blocked")
            }
            Transition::Retreated(_) | Transition::Stayed(_) => {}
        }
        StepOutcome {
            verdict,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockClock;
    use crate::domain::{EntityType, Field, ValidationIssue};
    use crate::error::RegistraError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service_on(today: NaiveDate) -> IntakeService {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today);
        IntakeService::new(Box::new(clock))
    }

    fn valid_company() -> CompanyIdentity {
        CompanyIdentity::new()
            .with_name("Ahmed Al Saud")
            .with_entity_type(EntityType::LimitedLiability)
            .with_registration_number("4098765432")
    }

    fn representative_born(birth: NaiveDate) -> RepresentativeIdentity {
        RepresentativeIdentity::new()
            .with_full_name("Ahmed Saleh Al Saud")
            .with_national_id("1023456789")
            .with_birth_date(birth)
    }

    #[test]
    fn validation_does_not_move_the_wizard() {
        let service = service_on(date(2026, 10, 18));
        let verdict = service.validate_company_identity("", None, "").unwrap();
        assert_eq!(verdict.error_count(), 3);
        assert_eq!(service.step(), WizardStep::CompanyInfo);
    }

    #[test]
    fn unknown_entity_type_is_an_error_not_a_verdict() {
        let service = service_on(date(2026, 10, 18));
        let err = service
            .validate_company_identity("Acme", Some("cooperative"), "1012345678")
            .unwrap_err();
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn representative_age_uses_injected_clock() {
        let birth = date(2008, 10, 19);

        let service = service_on(date(2026, 10, 18));
        let verdict = service.validate_representative_identity("A B", "1023456789", Some(birth));
        assert_eq!(
            verdict.error_for(Field::BirthDate),
            Some(ValidationIssue::Underage)
        );

        let service = service_on(date(2026, 10, 19));
        let verdict = service.validate_representative_identity("A B", "1023456789", Some(birth));
        assert!(verdict.is_valid());
    }

    #[test]
    fn clock_is_read_once_per_representative_validation() {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .times(1)
            .return_const(date(2026, 10, 18));
        let service = IntakeService::new(Box::new(clock));
        let _ = service.validate_representative_identity("A B", "1023456789", None);
    }

    #[test]
    fn submit_invalid_company_blocks() {
        let mut service = service_on(date(2026, 10, 18));
        let outcome = service.submit_company(&CompanyIdentity::new()).unwrap();
        assert!(!outcome.advanced());
        assert_eq!(outcome.transition, Transition::Blocked(WizardStep::CompanyInfo));
        assert_eq!(outcome.verdict.error_count(), 3);
        assert_eq!(service.step(), WizardStep::CompanyInfo);
    }

    #[test]
    fn submit_both_steps_reaches_handoff() {
        let mut service = service_on(date(2026, 10, 18));
        assert!(service.submit_company(&valid_company()).unwrap().advanced());
        let outcome = service
            .submit_representative(&representative_born(date(1990, 5, 14)))
            .unwrap();
        assert_eq!(outcome.transition, Transition::Advanced(WizardStep::Documents));
        assert!(service.is_ready_for_handoff());
    }

    #[test]
    fn submitting_out_of_step_is_rejected() {
        let mut service = service_on(date(2026, 10, 18));
        let err = service
            .submit_representative(&representative_born(date(1990, 5, 14)))
            .unwrap_err();
        assert_eq!(
            err,
            RegistraError::Application(ApplicationError::OutOfStep {
                submitted: WizardStep::RepresentativeInfo,
                current: WizardStep::CompanyInfo,
            })
        );
    }

    #[test]
    fn back_then_resubmit_revalidates() {
        let mut service = service_on(date(2026, 10, 18));
        let _ = service.submit_company(&valid_company()).unwrap();
        assert_eq!(service.back(), Transition::Retreated(WizardStep::CompanyInfo));
        assert_eq!(service.back(), Transition::Stayed(WizardStep::CompanyInfo));

        let mut edited = valid_company();
        edited.set_registration_number("5012345678");
        let outcome = service.submit_company(&edited).unwrap();
        assert!(!outcome.advanced());
        assert_eq!(
            outcome.verdict.error_for(Field::RegistrationNumber),
            Some(ValidationIssue::FormatMismatch)
        );
    }

    #[test]
    fn run_stops_at_first_blocked_step() {
        let mut service = service_on(date(2026, 10, 18));
        let form = IntakeForm::new(CompanyIdentity::new(), representative_born(date(1990, 1, 1)));
        let report = service.run(&form).unwrap();
        assert!(report.representative.is_none());
        assert_eq!(report.final_step, WizardStep::CompanyInfo);
        assert_eq!(report.blocking_verdict().map(|v| v.error_count()), Some(3));
    }

    #[test]
    fn run_reports_underage_representative() {
        let mut service = service_on(date(2026, 10, 18));
        let form = IntakeForm::new(valid_company(), representative_born(date(2010, 6, 1)));
        let report = service.run(&form).unwrap();
        assert_eq!(report.final_step, WizardStep::RepresentativeInfo);
        assert!(!report.ready_for_handoff());
        let blocking = report.blocking_verdict().unwrap();
        assert_eq!(
            blocking.error_for(Field::BirthDate),
            Some(ValidationIssue::Underage)
        );
    }

    #[test]
    fn run_restarts_from_first_step() {
        let mut service = service_on(date(2026, 10, 18));
        let form = IntakeForm::new(valid_company(), representative_born(date(1990, 1, 1)));
        assert!(service.run(&form).unwrap().ready_for_handoff());
        let report = service.run(&form).unwrap();
        assert!(report.ready_for_handoff());
        assert_eq!(report.blocking_verdict(), None);
    }
}
