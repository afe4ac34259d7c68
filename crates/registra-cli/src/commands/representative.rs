//! `registra representative`: validate the legal-representative step.

use tracing::{info, instrument};

use registra_core::{
    application::IntakeService,
    domain::{WizardStep, rules},
    error::RegistraError,
};

use crate::{
    cli::{OutputFormat, RepresentativeArgs},
    commands::{clock_for, report_verdict},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Validate representative fields against "today" and print the verdict.
#[instrument(skip_all)]
pub fn execute(
    args: RepresentativeArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // A blank date is "not selected"; a malformed one is a usage error.
    let birth_date = args
        .birth_date
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(rules::parse_date)
        .transpose()
        .map_err(RegistraError::from)?;

    let service = IntakeService::new(clock_for(args.today, &config));
    let today = service.today();

    let verdict =
        service.validate_representative_identity(&args.full_name, &args.national_id, birth_date);
    info!(%today, valid = verdict.is_valid(), "representative identity checked");

    if output.format() != OutputFormat::Json {
        output.info(&format!("Age checked as of {today}"))?;
    }
    report_verdict(&output, WizardStep::RepresentativeInfo, &verdict)
}
