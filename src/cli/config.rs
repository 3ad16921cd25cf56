//! `config` command: show, locate and edit the configuration file.

use std::error::Error;
use std::path::Path;

use crate::cli::settings::{SettingError, SettingRegistry};
use crate::cli::ConfigCommands;
use crate::core::config::{path_display, Config};

pub fn run_config(path: &Path, command: ConfigCommands) -> Result<(), Box<dyn Error>> {
    let registry = SettingRegistry::new();
    match command {
        ConfigCommands::Show => {
            let config = Config::load_from_path(path)?;
            println!("{}", format_config(&registry, &config));
        }
        ConfigCommands::Path => println!("{}", path_display(path)),
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from_path(path)?;
            match apply_set(&registry, &mut config, &key, &value) {
                Ok(message) => {
                    config.save_to_path(path)?;
                    println!("{message}");
                }
                Err(err) => {
                    err.print();
                    return Err(Box::new(err));
                }
            }
        }
        ConfigCommands::Unset { key } => {
            let mut config = Config::load_from_path(path)?;
            match apply_unset(&registry, &mut config, &key) {
                Ok(message) => {
                    config.save_to_path(path)?;
                    println!("{message}");
                }
                Err(err) => {
                    err.print();
                    return Err(Box::new(err));
                }
            }
        }
    }
    Ok(())
}

pub fn format_config(registry: &SettingRegistry, config: &Config) -> String {
    let mut out = String::from("Current configuration:");
    for key in registry.keys_display_order() {
        if let Some(handler) = registry.get(key) {
            out.push('\n');
            out.push_str(&handler.format(config));
        }
    }
    out
}

pub fn apply_set(
    registry: &SettingRegistry,
    config: &mut Config,
    key: &str,
    value: &[String],
) -> Result<String, SettingError> {
    registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?
        .set(value, config)
}

pub fn apply_unset(
    registry: &SettingRegistry,
    config: &mut Config,
    key: &str,
) -> Result<String, SettingError> {
    registry
        .get(key)
        .map(|handler| handler.unset(config))
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))
}
