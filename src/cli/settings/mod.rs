//! Settings management for `chatmark config set/unset`.
//!
//! Each configuration key has a [`SettingHandler`]; handlers are grouped by
//! value shape:
//!
//! - Boolean settings (`syntax-highlighting`, `sanitize`)
//! - Number settings (`cache-capacity`)
//! - String settings (`syntax-theme`, `widget-fence-tag`)

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
///
/// Handlers mutate an in-memory [`Config`]; the caller persists it.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the configuration value from the words following the key.
    ///
    /// # Returns
    /// A success message to display, or an error.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Unset (clear) the configuration value.
    fn unset(&self, config: &mut Config) -> String;

    /// Format the current value for display in `chatmark config show`.
    fn format(&self, config: &Config) -> String;
}
