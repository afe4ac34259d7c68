//! `registra company`: validate the company step.

use tracing::{info, instrument};

use registra_core::{application::IntakeService, domain::WizardStep};

use crate::{
    cli::CompanyArgs,
    commands::{clock_for, report_verdict},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Validate company identity fields and print the verdict.
#[instrument(skip_all)]
pub fn execute(args: CompanyArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = IntakeService::new(clock_for(None, &config));

    let verdict = service.validate_company_identity(
        &args.name,
        args.entity_type.as_deref(),
        &args.registration_number,
    )?;
    info!(valid = verdict.is_valid(), "company identity checked");

    report_verdict(&output, WizardStep::CompanyInfo, &verdict)
}
