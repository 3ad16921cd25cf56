//! Count-valued settings.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::success_set;
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;

/// Data-driven handler for non-negative count settings.
pub struct NumberHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_value: usize,
    max_value: usize,
    get: fn(&Config) -> Option<usize>,
    set_field: fn(&mut Config, Option<usize>),
}

impl SettingHandler for NumberHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(input) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        };
        let value: usize = input
            .trim()
            .parse()
            .map_err(|_| SettingError::InvalidNumber(input.clone()))?;
        if value > self.max_value {
            return Err(SettingError::InvalidValue {
                key: self.key,
                reason: format!("must be at most {}", self.max_value),
            });
        }
        (self.set_field)(config, Some(value));
        Ok(success_set(self.key, &value.to_string()))
    }

    fn unset(&self, config: &mut Config) -> String {
        (self.set_field)(config, None);
        format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_value
        )
    }

    fn format(&self, config: &Config) -> String {
        match (self.get)(config) {
            Some(value) => format!("  {}: {value}", self.key),
            None => format!("  {}: (unset, default: {})", self.key, self.default_value),
        }
    }
}

/// Create a handler for the `cache-capacity` setting.
pub fn cache_capacity_handler() -> NumberHandler {
    NumberHandler {
        key: "cache-capacity",
        hint: "To set the render cache size, specify a number of messages:",
        example: "chatmark config set cache-capacity 500",
        default_value: crate::render::DEFAULT_CACHE_CAPACITY,
        max_value: 100_000,
        get: |c| c.cache_capacity,
        set_field: |c, v| c.cache_capacity = v,
    }
}
