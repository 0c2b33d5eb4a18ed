//! `seemstome config`: read and write configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Shape of a settable key, used to parse `config set` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    Text,
    Flag,
    Seconds,
    List,
}

const KEYS: &[(&str, KeyKind)] = &[
    ("docs.source_dir", KeyKind::Text),
    ("docs.output_file", KeyKind::Text),
    ("docs.extensions", KeyKind::List),
    ("docs.include_hidden", KeyKind::Flag),
    ("scaffolder.program", KeyKind::Text),
    ("scaffolder.args", KeyKind::List),
    ("scaffolder.subcommand", KeyKind::Text),
    ("scaffolder.timeout_secs", KeyKind::Seconds),
    ("scaffolder.strict_exit", KeyKind::Flag),
    ("output.no_color", KeyKind::Flag),
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::active_path(config_file);
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let docs = &config.docs;
    let scaffolder = &config.scaffolder;
    match key {
        "docs.source_dir" => Ok(docs.source_dir.display().to_string()),
        "docs.output_file" => Ok(docs
            .output_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "docs.extensions" => Ok(docs.extensions.join(",")),
        "docs.include_hidden" => Ok(docs.include_hidden.to_string()),
        "scaffolder.program" => Ok(scaffolder.program.clone()),
        "scaffolder.args" => Ok(scaffolder.resolved_args().join(" ")),
        "scaffolder.subcommand" => Ok(scaffolder.subcommand.clone()),
        "scaffolder.timeout_secs" => Ok(scaffolder
            .timeout_secs
            .map(|s| s.to_string())
            .unwrap_or_default()),
        "scaffolder.strict_exit" => Ok(scaffolder.strict_exit.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(unknown_key(key)),
    }
}

/// Update one key in the TOML file at `path`, creating it if needed.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let kind = KEYS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| unknown_key(key))?;
    let value = parse_value(key, kind, raw)?;

    let mut table: toml::Table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&text).with_cli_context(|| format!("'{}' is not valid TOML", path.display()))?
    } else {
        toml::Table::new()
    };

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let section = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(section) = section else {
        return Err(CliError::ConfigError {
            message: format!("'{}' in '{}' is not a table", key, path.display()),
            source: None,
        });
    };
    section.insert(field.to_string(), value);

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn parse_value(key: &str, kind: KeyKind, raw: &str) -> CliResult<toml::Value> {
    let invalid = |expected: &str| CliError::InvalidInput {
        message: format!("'{raw}' is not a valid value for {key} (expected {expected})"),
        source: None,
    };

    Ok(match kind {
        KeyKind::Text => toml::Value::String(raw.to_string()),
        KeyKind::Flag => toml::Value::Boolean(raw.parse().map_err(|_| invalid("true or false"))?),
        KeyKind::Seconds => {
            let secs: u32 = raw.parse().map_err(|_| invalid("a whole number of seconds"))?;
            toml::Value::Integer(i64::from(secs))
        }
        KeyKind::List => toml::Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| toml::Value::String(s.to_string()))
                .collect(),
        ),
    })
}

fn unknown_key(key: &str) -> CliError {
    let known: Vec<_> = KEYS.iter().map(|(k, _)| *k).collect();
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", known.join(", ")),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "scaffolder.program").unwrap(), "node");
        assert_eq!(get_config_value(&cfg, "docs.extensions").unwrap(), "md,txt,doc");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn every_settable_key_is_readable() {
        let cfg = AppConfig::default();
        for (key, _) in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn set_creates_file_and_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");

        set_config_value(&path, "scaffolder.program", "deno").unwrap();
        set_config_value(&path, "scaffolder.timeout_secs", "45").unwrap();
        set_config_value(&path, "docs.extensions", "md, rst").unwrap();

        let cfg = AppConfig::load(Some(&path), true).unwrap();
        assert_eq!(cfg.scaffolder.program, "deno");
        assert_eq!(cfg.scaffolder.timeout_secs, Some(45));
        assert_eq!(cfg.docs.extensions, vec!["md", "rst"]);
    }

    #[test]
    fn set_rejects_bad_values_and_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        assert!(matches!(
            set_config_value(&path, "scaffolder.strict_exit", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            set_config_value(&path, "scaffolder.colour", "red"),
            Err(CliError::ConfigError { .. })
        ));
        assert!(!path.exists());
    }
}
