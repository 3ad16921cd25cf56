use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration. Every field is optional; unset fields resolve to
/// the defaults in [`super::defaults`].
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of rendered messages kept in the render cache
    pub cache_capacity: Option<usize>,
    /// Highlight fenced code blocks with syntect
    pub syntax_highlighting: Option<bool>,
    /// syntect theme used for the `css` stylesheet
    pub syntax_theme: Option<String>,
    /// Info-string token that marks a fenced block as a widget
    pub widget_fence_tag: Option<String>,
    /// Run rendered HTML through the sanitizer
    pub sanitize: Option<bool>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/chatmark/config.toml` → `~/.config/chatmark/config.toml`
/// - macOS: `/Users/user/Library/Application Support/...` → `~/Library/Application Support/...`
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
