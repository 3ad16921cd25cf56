//! Boolean setting handlers for on/off settings.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{format_bool, parse_bool, success_set};
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;

/// Data-driven handler for boolean (on/off) settings.
pub struct BooleanHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    get: fn(&Config) -> Option<bool>,
    set_field: fn(&mut Config, Option<bool>),
}

impl SettingHandler for BooleanHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        }

        let input = args.join(" ");
        let value = parse_bool(&input).ok_or(SettingError::InvalidBoolean(input))?;
        (self.set_field)(config, Some(value));
        Ok(success_set(self.key, format_bool(value)))
    }

    fn unset(&self, config: &mut Config) -> String {
        (self.set_field)(config, None);
        format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_display
        )
    }

    fn format(&self, config: &Config) -> String {
        match (self.get)(config) {
            Some(value) => format!("  {}: {}", self.key, format_bool(value)),
            None => format!("  {}: (unset, default: {})", self.key, self.default_display),
        }
    }
}

/// Create a handler for the `syntax-highlighting` setting.
pub fn syntax_highlighting_handler() -> BooleanHandler {
    BooleanHandler {
        key: "syntax-highlighting",
        hint: "To set syntax highlighting, specify on or off:",
        example: "chatmark config set syntax-highlighting off",
        default_display: "on",
        get: |c| c.syntax_highlighting,
        set_field: |c, v| c.syntax_highlighting = v,
    }
}

/// Create a handler for the `sanitize` setting.
pub fn sanitize_handler() -> BooleanHandler {
    BooleanHandler {
        key: "sanitize",
        hint: "To set HTML sanitizing, specify on or off:",
        example: "chatmark config set sanitize on",
        default_display: "on",
        get: |c| c.sanitize,
        set_field: |c, v| c.sanitize = v,
    }
}
