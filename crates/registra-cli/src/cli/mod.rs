//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "registra",
    bin_name = "registra",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Business-registration intake: validate company and representative details",
    long_about = "Registra checks a company's legal identity and its legal \
                  representative against the registration rules, one wizard \
                  step at a time.",
    after_help = "EXAMPLES:\n\
        \x20 registra company --name \"Ahmed Al Saud\" --entity-type limited_liability --cr-number 4098765432\n\
        \x20 registra representative --name \"Ahmed Saleh Al Saud\" --national-id 1023456789 --birth-date 1990-05-14\n\
        \x20 registra check intake.toml --locale ar\n\
        \x20 registra completions bash > /usr/share/bash-completion/completions/registra",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the company step.
    #[command(
        about = "Validate company identity (step 1)",
        after_help = "EXAMPLES:\n\
            \x20 registra company --name \"Al Noor Trading\" --entity-type joint_stock --cr-number 7012345678\n\
            \x20 registra company --name \"شركة الأفق\" --entity-type \"شركة مساهمة\" --cr-number 1012345678"
    )]
    Company(CompanyArgs),

    /// Validate the representative step.
    #[command(
        visible_alias = "rep",
        about = "Validate legal representative (step 2)",
        after_help = "EXAMPLES:\n\
            \x20 registra representative --name \"Sara Al Qahtani\" --national-id 1000000001 --birth-date 1995-02-01\n\
            \x20 registra rep --name \"Sara Al Qahtani\" --national-id 1000000001 --birth-date 2008-10-19 --today 2026-10-18"
    )]
    Representative(RepresentativeArgs),

    /// List the legal forms a company can be registered as.
    #[command(
        visible_alias = "types",
        about = "List entity types",
        after_help = "EXAMPLES:\n\
            \x20 registra entity-types\n\
            \x20 registra entity-types --format json\n\
            \x20 registra entity-types --locale ar"
    )]
    EntityTypes(EntityTypesArgs),

    /// Run a whole intake file through the wizard.
    #[command(
        about = "Check an intake file (TOML or JSON)",
        after_help = "EXAMPLES:\n\
            \x20 registra check intake.toml\n\
            \x20 registra check intake.json --today 2026-10-18 --output-format json"
    )]
    Check(CheckArgs),

    /// Guided prompts for both steps.
    #[command(visible_alias = "i", about = "Interactive guided intake")]
    Interactive(InteractiveArgs),

    /// Initialise a Registra configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 registra init           # default location\n\
            \x20 registra init --local   # .registra.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 registra completions bash > ~/.local/share/bash-completion/completions/registra\n\
            \x20 registra completions zsh  > ~/.zfunc/_registra\n\
            \x20 registra completions fish > ~/.config/fish/completions/registra.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Registra configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 registra config get output.locale\n\
            \x20 registra config set output.locale ar\n\
            \x20 registra config list"
    )]
    Config(ConfigCommands),
}

// ── company ───────────────────────────────────────────────────────────────────

/// Arguments for `registra company`.
#[derive(Debug, Args)]
pub struct CompanyArgs {
    /// Company name.
    #[arg(short = 'n', long = "name", default_value = "", help = "Company name")]
    pub name: String,

    /// Legal form: catalog id, Arabic label or English label.
    #[arg(
        short = 't',
        long = "entity-type",
        value_name = "TYPE",
        help = "Entity type (see `registra entity-types`)"
    )]
    pub entity_type: Option<String>,

    /// Commercial registration number.
    #[arg(
        short = 'r',
        long = "cr-number",
        value_name = "NUMBER",
        default_value = "",
        help = "Commercial registration number (10 digits, starts with 10, 40 or 70)"
    )]
    pub registration_number: String,
}

// ── representative ────────────────────────────────────────────────────────────

/// Arguments for `registra representative`.
#[derive(Debug, Args)]
pub struct RepresentativeArgs {
    /// Full name of the legal representative.
    #[arg(
        short = 'n',
        long = "name",
        default_value = "",
        help = "Representative full name"
    )]
    pub full_name: String,

    /// National ID.
    #[arg(
        short = 'i',
        long = "national-id",
        value_name = "ID",
        default_value = "",
        help = "National ID (10 digits, starts with 1)"
    )]
    pub national_id: String,

    /// Date of birth, `YYYY-MM-DD`.
    #[arg(
        short = 'b',
        long = "birth-date",
        value_name = "DATE",
        help = "Date of birth (YYYY-MM-DD)"
    )]
    pub birth_date: Option<String>,

    /// Pin "today" for the age check.
    #[arg(long = "today", value_name = "DATE", help = "Evaluate age as of DATE (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

// ── entity-types ──────────────────────────────────────────────────────────────

/// Arguments for `registra entity-types`.
#[derive(Debug, Args)]
pub struct EntityTypesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `entity-types` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `registra check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Intake file; `.json` is read as JSON, anything else as TOML.
    #[arg(value_name = "FILE", help = "Intake file to check")]
    pub file: PathBuf,

    /// Pin "today" for the age check.
    #[arg(long = "today", value_name = "DATE", help = "Evaluate age as of DATE (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

// ── interactive ───────────────────────────────────────────────────────────────

/// Arguments for `registra interactive`.
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Pin "today" for the age check.
    #[arg(long = "today", value_name = "DATE", help = "Evaluate age as of DATE (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `registra init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.registra.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `registra completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `registra config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.locale`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_company_command() {
        let cli = Cli::parse_from([
            "registra",
            "company",
            "--name",
            "Acme Trading",
            "--entity-type",
            "joint_stock",
            "--cr-number",
            "7012345678",
        ]);
        let Commands::Company(args) = cli.command else {
            panic!("expected Company command");
        };
        assert_eq!(args.entity_type.as_deref(), Some("joint_stock"));
        assert_eq!(args.registration_number, "7012345678");
    }

    #[test]
    fn company_fields_default_to_blank() {
        let cli = Cli::parse_from(["registra", "company"]);
        let Commands::Company(args) = cli.command else {
            panic!("expected Company command");
        };
        assert!(args.name.is_empty());
        assert!(args.entity_type.is_none());
        assert!(args.registration_number.is_empty());
    }

    #[test]
    fn today_parses_as_date() {
        let cli = Cli::parse_from(["registra", "rep", "--today", "2026-10-18"]);
        let Commands::Representative(args) = cli.command else {
            panic!("expected Representative command");
        };
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn bad_today_is_rejected() {
        let result = Cli::try_parse_from(["registra", "check", "x.toml", "--today", "18/10/2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn locale_is_global() {
        let cli = Cli::parse_from(["registra", "entity-types", "--locale", "ar"]);
        assert_eq!(cli.global.locale, Some(registra_core::domain::Locale::Arabic));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = Cli::try_parse_from(["registra", "--locale", "fr", "entity-types"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["registra", "--quiet", "--verbose", "entity-types"]);
        assert!(result.is_err());
    }
}
