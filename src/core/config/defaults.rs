use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_SANITIZE, DEFAULT_SYNTAX_HIGHLIGHTING, DEFAULT_SYNTAX_THEME};
use crate::render::widgets::DEFAULT_WIDGET_FENCE_TAG;
use crate::render::DEFAULT_CACHE_CAPACITY;

/// Fully resolved renderer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererSettings {
    pub cache_capacity: usize,
    pub syntax_highlighting: bool,
    pub syntax_theme: String,
    pub widget_fence_tag: String,
    pub sanitize: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Config::default().renderer_settings()
    }
}

impl Config {
    pub fn renderer_settings(&self) -> RendererSettings {
        RendererSettings {
            cache_capacity: self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY),
            syntax_highlighting: self
                .syntax_highlighting
                .unwrap_or(DEFAULT_SYNTAX_HIGHLIGHTING),
            syntax_theme: self
                .syntax_theme
                .clone()
                .unwrap_or_else(|| DEFAULT_SYNTAX_THEME.to_string()),
            widget_fence_tag: self
                .widget_fence_tag
                .as_deref()
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .unwrap_or(DEFAULT_WIDGET_FENCE_TAG)
                .to_string(),
            sanitize: self.sanitize.unwrap_or(DEFAULT_SANITIZE),
        }
    }
}
