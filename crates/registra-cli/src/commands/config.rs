//! `registra config`: read and write configuration values.

use std::{path::Path, str::FromStr};

use clap::ValueEnum;
use tracing::debug;

use registra_core::domain::{Locale, rules};

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Every key `get` and `set` understand.
const KEYS: [&str; 4] = [
    "output.no_color",
    "output.format",
    "output.locale",
    "intake.today",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::target_path(global.config.as_ref(), false);
            let normalized = normalize_value(&key, &value)?;
            set_in_file(&path, &key, normalized)?;
            output.success(&format!("Set {key} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::target_path(global.config.as_ref(), false);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn invalid_value(key: &str, value: &str, reason: impl std::fmt::Display) -> CliError {
    CliError::ConfigError {
        message: format!("Invalid value '{value}' for {key}: {reason}"),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.as_str().to_string()),
        "output.locale" => Ok(config.output.locale.to_string()),
        "intake.today" => Ok(config
            .intake
            .today
            .map(|date| date.to_string())
            .unwrap_or_default()),
        _ => Err(unknown_key(key)),
    }
}

/// Validate `value` for `key`; `None` means "remove the key".
fn normalize_value(key: &str, value: &str) -> CliResult<Option<toml::Value>> {
    let value = value.trim();
    let normalized = match key {
        "output.no_color" => toml::Value::Boolean(
            value
                .parse::<bool>()
                .map_err(|e| invalid_value(key, value, e))?,
        ),
        "output.format" => {
            let format =
                OutputFormat::from_str(value, true).map_err(|e| invalid_value(key, value, e))?;
            toml::Value::String(format.as_str().into())
        }
        "output.locale" => {
            let locale = Locale::from_str(value).map_err(|e| invalid_value(key, value, e))?;
            toml::Value::String(locale.as_str().into())
        }
        "intake.today" if value.is_empty() => return Ok(None),
        "intake.today" => {
            let date = rules::parse_date(value).map_err(|e| invalid_value(key, value, e))?;
            toml::Value::String(date.format(rules::DATE_FORMAT).to_string())
        }
        _ => return Err(unknown_key(key)),
    };
    Ok(Some(normalized))
}

/// Set (or remove) a dotted `section.name` key in a TOML table.
fn apply(table: &mut toml::Table, key: &str, value: Option<toml::Value>) -> CliResult<()> {
    let (section, name) = key.split_once('.').ok_or_else(|| unknown_key(key))?;

    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(section_table) = entry else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in the config file is not a table"),
            source: None,
        });
    };

    match value {
        Some(value) => {
            section_table.insert(name.to_string(), value);
        }
        None => {
            section_table.remove(name);
        }
    }
    Ok(())
}

fn set_in_file(path: &Path, key: &str, value: Option<toml::Value>) -> CliResult<()> {
    let mut table = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        raw.parse::<toml::Table>()
            .with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
    } else {
        toml::Table::new()
    };

    apply(&mut table, key, value)?;
    debug!(path = %path.display(), key, "writing config");

    let text = toml::to_string_pretty(&table).with_cli_context(|| "Failed to serialise config")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
