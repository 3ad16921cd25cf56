//! Helper functions for settings operations.

use super::error::SettingError;
use crate::utils::syntax::available_themes;

/// Parse a boolean value from user input.
///
/// Accepts: on/off, true/false, yes/no (case-insensitive).
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Format a boolean value for display.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Resolve a theme name against the bundled syntect themes, ignoring case.
pub fn validate_theme(input: &str) -> Result<String, SettingError> {
    available_themes()
        .into_iter()
        .find(|name| name.eq_ignore_ascii_case(input.trim()))
        .ok_or_else(|| SettingError::UnknownTheme {
            input: input.to_string(),
        })
}

pub fn success_set(key: &str, display: &str) -> String {
    format!("✅ Set {key} to: {display}")
}
