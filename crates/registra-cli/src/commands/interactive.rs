//! `registra interactive`: guided prompts for both steps.
//!
//! Mirrors the on-screen wizard: each "continue" re-validates the step and
//! stays put on errors; the representative step offers Back without
//! validating.

use crate::{
    cli::InteractiveArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[cfg(not(feature = "interactive"))]
pub fn execute(_args: InteractiveArgs, _config: AppConfig, _output: OutputManager) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
pub fn execute(args: InteractiveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    use std::io::IsTerminal;

    use tracing::{info, instrument};

    use registra_core::{
        application::{CatalogService, IntakeService},
        domain::{CompanyIdentity, RepresentativeIdentity, Transition, WizardStep},
    };

    use crate::commands::clock_for;

    #[instrument(skip_all, fields(session = %service.session_id()))]
    fn drive(service: &mut IntakeService, output: &OutputManager) -> CliResult<()> {
        let mut company = CompanyIdentity::new();
        let mut representative = RepresentativeIdentity::new();

        loop {
            match service.step() {
                WizardStep::CompanyInfo => {
                    prompts::company(&mut company, output.locale())?;
                    let outcome = service.submit_company(&company)?;
                    output.verdict(WizardStep::CompanyInfo, &outcome.verdict)?;
                }
                WizardStep::RepresentativeInfo => {
                    prompts::representative(&mut representative, output.locale())?;
                    if !prompts::continue_or_back(output.locale())? {
                        let _ = service.back();
                        continue;
                    }
                    let outcome = service.submit_representative(&representative)?;
                    output.verdict(WizardStep::RepresentativeInfo, &outcome.verdict)?;
                    if let Transition::Advanced(step) = outcome.transition {
                        info!(%step, "intake complete");
                    }
                }
                WizardStep::Documents => {
                    output.success("Company and representative accepted")?;
                    output.info("Continue with document upload")?;
                    return Ok(());
                }
            }
        }
    }

    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "interactive mode needs a terminal".into(),
            source: None,
        });
    }

    output.header("Company registration")?;
    output.print(&format!(
        "{} legal forms available; type to filter.",
        CatalogService::new().list().len()
    ))?;

    let mut service = IntakeService::new(clock_for(args.today, &config));
    drive(&mut service, &output)
}

#[cfg(feature = "interactive")]
mod prompts {
    use dialoguer::{FuzzySelect, Input, Select, theme::ColorfulTheme};

    use registra_core::{
        application::CatalogService,
        domain::{CompanyIdentity, EntityType, Field, Locale, RepresentativeIdentity, rules},
        error::RegistraError,
    };

    use crate::error::{CliError, CliResult};

    fn prompt_error(err: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "Prompt failed".into(),
            source: std::io::Error::other(err),
        }
    }

    /// Text prompt pre-filled with the current value.
    fn text(field: Field, locale: Locale, current: &str) -> CliResult<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(field.label(locale))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    pub(super) fn company(company: &mut CompanyIdentity, locale: Locale) -> CliResult<()> {
        company.set_name(text(Field::Name, locale, &company.name)?);

        let labels: Vec<&str> = CatalogService::new()
            .list()
            .iter()
            .map(|info| info.label_in(locale))
            .collect();
        let current = EntityType::ALL
            .iter()
            .position(|entity| Some(*entity) == company.entity_type);

        let theme = ColorfulTheme::default();
        let mut select = FuzzySelect::with_theme(&theme)
            .with_prompt(Field::EntityType.label(locale))
            .items(&labels);
        if let Some(index) = current {
            select = select.default(index);
        }
        match select.interact_opt().map_err(prompt_error)? {
            Some(index) => company.select_entity_type(EntityType::ALL.get(index).copied()),
            None => return Err(CliError::Cancelled),
        }

        company.set_registration_number(text(
            Field::RegistrationNumber,
            locale,
            &company.registration_number,
        )?);
        Ok(())
    }

    pub(super) fn representative(
        representative: &mut RepresentativeIdentity,
        locale: Locale,
    ) -> CliResult<()> {
        representative.set_full_name(text(Field::FullName, locale, &representative.full_name)?);
        representative.set_national_id(text(
            Field::NationalId,
            locale,
            &representative.national_id,
        )?);

        let current = representative
            .birth_date
            .map(|date| date.format(rules::DATE_FORMAT).to_string())
            .unwrap_or_default();
        let raw = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} (YYYY-MM-DD)", Field::BirthDate.label(locale)))
            .with_initial_text(current)
            .allow_empty(true)
            .validate_with(|value: &String| -> Result<(), String> {
                if value.trim().is_empty() {
                    return Ok(());
                }
                rules::parse_date(value)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_error)?;

        let birth_date = if raw.trim().is_empty() {
            None
        } else {
            Some(rules::parse_date(&raw).map_err(RegistraError::from)?)
        };
        representative.select_birth_date(birth_date);
        Ok(())
    }

    /// Labels for the step-2 navigation choice, Continue first.
    pub(super) const fn navigation_labels(locale: Locale) -> [&'static str; 2] {
        match locale {
            Locale::English => ["Continue", "Back"],
            Locale::Arabic => ["متابعة", "رجوع"],
        }
    }

    /// `true` for Continue, `false` for Back.
    pub(super) fn continue_or_back(locale: Locale) -> CliResult<bool> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .items(&navigation_labels(locale))
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        match choice {
            Some(index) => Ok(index == 0),
            None => Err(CliError::Cancelled),
        }
    }
}
