//! Command handlers, one module per subcommand.

pub mod check;
pub mod company;
pub mod completions;
pub mod config;
pub mod entity_types;
pub mod init;
pub mod interactive;
pub mod representative;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use registra_adapters::{FixedClock, SystemClock};
use registra_core::{
    application::ports::Clock,
    domain::{Field, Locale, ValidationVerdict, WizardStep},
};

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// `--today` beats `intake.today`; otherwise the system date.
pub(crate) fn clock_for(today: Option<NaiveDate>, config: &AppConfig) -> Box<dyn Clock> {
    match today.or(config.intake.today) {
        Some(date) => {
            debug!(%date, "using pinned clock");
            Box::new(FixedClock::new(date))
        }
        None => Box::new(SystemClock::new()),
    }
}

/// JSON shape of one step's verdict.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerdictView<'a> {
    step: WizardStep,
    valid: bool,
    #[serde(flatten)]
    verdict: &'a ValidationVerdict,
    messages: BTreeMap<Field, &'static str>,
}

impl<'a> VerdictView<'a> {
    pub(crate) fn new(step: WizardStep, verdict: &'a ValidationVerdict, locale: Locale) -> Self {
        Self {
            step,
            valid: verdict.is_valid(),
            verdict,
            messages: verdict.messages(locale),
        }
    }
}

/// Print a single-step verdict and turn a rejection into exit code 2.
pub(crate) fn report_verdict(
    output: &OutputManager,
    step: WizardStep,
    verdict: &ValidationVerdict,
) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output.json(&VerdictView::new(step, verdict, output.locale()))?,
        _ => output.verdict(step, verdict)?,
    }

    if verdict.is_valid() {
        Ok(())
    } else {
        Err(CliError::VerdictRejected {
            step,
            errors: verdict.error_count(),
        })
    }
}
