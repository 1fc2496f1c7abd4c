//! `bundle-maker config`: read and write configuration values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const OUTPUT_FORMATS: [&str; 4] = ["auto", "human", "plain", "json"];

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` path; writes go there when it is given.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            if output.is_json() {
                output.json(&BTreeMap::from([(key, value)]))?;
            } else {
                output.print(&format!("{key} = {value:?}"))?;
            }
        }

        ConfigCommands::Set { key, value } => {
            set_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value:?} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            KNOWN_KEYS.join(", ")
        ),
        source: None,
    }
}

/// Update one key in the TOML file at `path`, creating the file if needed.
///
/// Keys not touched by the update, including unknown ones, are preserved.
fn set_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let (section, field) = KNOWN_KEYS
        .contains(&key)
        .then(|| key.split_once('.'))
        .flatten()
        .ok_or_else(|| unknown_key(key))?;

    let mut table = if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read config '{}'", path.display()))?;
        text.parse::<Table>().map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        Table::new()
    };

    let entry = table
        .entry(section)
        .or_insert_with(|| Value::Table(Table::new()));
    let Value::Table(section_table) = entry else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_string(), parse_value(key, value)?);

    // The updated document must still describe a valid configuration.
    Value::Table(table.clone())
        .try_into::<AppConfig>()
        .map_err(|e| CliError::ConfigError {
            message: format!("Invalid configuration after update: {e}"),
            source: Some(Box::new(e)),
        })?;

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn parse_value(key: &str, value: &str) -> CliResult<Value> {
    match key {
        "output.no_color" => value.parse::<bool>().map(Value::Boolean).map_err(|_| {
            CliError::invalid_input(format!("'{key}' expects true or false, got '{value}'"))
        }),
        "output.format" if !OUTPUT_FORMATS.contains(&value) => Err(CliError::invalid_input(
            format!("'{key}' must be one of {}", OUTPUT_FORMATS.join(", ")),
        )),
        _ => Ok(Value::String(value.to_string())),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
