//! `viperx config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.data(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Effective value of `key`; unset optional keys print as an empty string.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.author" => Ok(config.defaults.author.clone().unwrap_or_default()),
        "defaults.license" => Ok(config.defaults.license.clone()),
        "defaults.python_version" => Ok(config.defaults.python_version.clone()),
        "defaults.project_type" => Ok(config.defaults.project_type.clone()),
        "defaults.explain" => Ok(config.defaults.explain.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "templates.user_dir" => Ok(config.template_dir(None).display().to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.license").unwrap(), "MIT");
        assert_eq!(get_config_value(&cfg, "defaults.project_type").unwrap(), "classic");
        assert_eq!(get_config_value(&cfg, "defaults.author").unwrap(), "");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn user_dir_reports_effective_path() {
        let mut cfg = AppConfig::default();
        assert!(
            get_config_value(&cfg, "templates.user_dir")
                .unwrap()
                .ends_with("templates")
        );
        cfg.templates.user_dir = Some(PathBuf::from("/srv/tpl"));
        assert_eq!(get_config_value(&cfg, "templates.user_dir").unwrap(), "/srv/tpl");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "defaults.lang"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
