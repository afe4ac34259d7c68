//! `registra check`: run an intake file through the whole wizard.

use serde::Serialize;
use tracing::{info, instrument};

use registra_adapters::FileIntakeSource;
use registra_core::{
    application::{IntakeReport, IntakeService, ports::IntakeSource},
    domain::{Locale, WizardStep},
};

use crate::{
    cli::{CheckArgs, OutputFormat},
    commands::{VerdictView, clock_for},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a whole-file check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportView<'a> {
    source: String,
    session: String,
    today: String,
    final_step: WizardStep,
    ready_for_handoff: bool,
    steps: Vec<VerdictView<'a>>,
}

impl<'a> ReportView<'a> {
    fn new(source: String, report: &'a IntakeReport, locale: Locale) -> Self {
        let mut steps = vec![VerdictView::new(
            WizardStep::CompanyInfo,
            &report.company.verdict,
            locale,
        )];
        if let Some(representative) = &report.representative {
            steps.push(VerdictView::new(
                WizardStep::RepresentativeInfo,
                &representative.verdict,
                locale,
            ));
        }

        Self {
            source,
            session: report.session.to_string(),
            today: report.today.to_string(),
            final_step: report.final_step,
            ready_for_handoff: report.ready_for_handoff(),
            steps,
        }
    }
}

/// Load the file, drive both steps, and report where the flow stopped.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = FileIntakeSource::new(&args.file);
    let form = source.load()?;

    let mut service = IntakeService::new(clock_for(args.today, &config));
    let report = service.run(&form)?;
    info!(final_step = %report.final_step, "intake file checked");

    if output.format() == OutputFormat::Json {
        output.json(&ReportView::new(source.describe(), &report, output.locale()))?;
    } else {
        output.header(&format!("Checking {}", source.describe()))?;
        output.verdict(WizardStep::CompanyInfo, &report.company.verdict)?;
        match &report.representative {
            Some(outcome) => output.verdict(WizardStep::RepresentativeInfo, &outcome.verdict)?,
            None => output.warning("Representative step not reached")?,
        }
        if report.ready_for_handoff() {
            output.success("Ready for document upload")?;
        }
    }

    match report.blocking_verdict() {
        Some(verdict) => Err(CliError::VerdictRejected {
            step: report.final_step,
            errors: verdict.error_count(),
        }),
        None => Ok(()),
    }
}
