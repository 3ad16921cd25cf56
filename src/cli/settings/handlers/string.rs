//! String setting handlers for text-based settings.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{success_set, validate_theme};
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::DEFAULT_SYNTAX_THEME;
use crate::render::widgets::DEFAULT_WIDGET_FENCE_TAG;

/// Handler for the `syntax-theme` setting.
pub struct SyntaxThemeHandler;

impl SettingHandler for SyntaxThemeHandler {
    fn key(&self) -> &'static str {
        "syntax-theme"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set the highlight theme, provide a bundled syntect theme name:",
                example: "chatmark config set syntax-theme base16-ocean.dark",
            });
        }
        let theme = validate_theme(&args.join(" "))?;
        let message = success_set("syntax-theme", &theme);
        config.syntax_theme = Some(theme);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> String {
        config.syntax_theme = None;
        format!("✅ Unset syntax-theme (will use default: {DEFAULT_SYNTAX_THEME})")
    }

    fn format(&self, config: &Config) -> String {
        match &config.syntax_theme {
            Some(theme) => format!("  syntax-theme: {theme}"),
            None => format!("  syntax-theme: (unset, default: {DEFAULT_SYNTAX_THEME})"),
        }
    }
}

/// Handler for the `widget-fence-tag` setting.
pub struct WidgetFenceTagHandler;

impl SettingHandler for WidgetFenceTagHandler {
    fn key(&self) -> &'static str {
        "widget-fence-tag"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(tag) = args.first().map(|t| t.trim()) else {
            return Err(SettingError::MissingArgs {
                hint: "To set the widget fence tag, provide the info-string token:",
                example: "chatmark config set widget-fence-tag ui-widget",
            });
        };
        if args.len() > 1 || tag.is_empty() || tag.contains(['`', '~']) {
            return Err(SettingError::InvalidValue {
                key: "widget-fence-tag",
                reason: "must be a single word without backticks or tildes".to_string(),
            });
        }
        config.widget_fence_tag = Some(tag.to_string());
        Ok(success_set("widget-fence-tag", tag))
    }

    fn unset(&self, config: &mut Config) -> String {
        config.widget_fence_tag = None;
        format!("✅ Unset widget-fence-tag (will use default: {DEFAULT_WIDGET_FENCE_TAG})")
    }

    fn format(&self, config: &Config) -> String {
        match &config.widget_fence_tag {
            Some(tag) => format!("  widget-fence-tag: {tag}"),
            None => format!("  widget-fence-tag: (unset, default: {DEFAULT_WIDGET_FENCE_TAG})"),
        }
    }
}
