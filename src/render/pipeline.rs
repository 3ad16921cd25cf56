use super::ast::parse_document;
use super::cache::RenderCache;
use super::html::{render_html, RenderRules};
use super::metadata::RenderedMessage;
use super::preprocess::preprocess;
use super::sanitize::{AllowList, AmmoniaSanitizer, HtmlSanitizer};
use super::splice::splice_widgets;
use super::widgets::{extract_widgets, DEFAULT_WIDGET_FENCE_TAG};
use crate::core::config::RendererSettings;
use tracing::{debug, warn};

/// Counters for one renderer's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub renders: u64,
    pub cache_hits: u64,
}

/// Owns every stage of the message pipeline:
/// preprocess, extract widgets, parse, render, sanitize, splice.
///
/// One renderer is meant to live as long as the conversation view so
/// repeated renders of a streaming message hit the cache.
pub struct MessageRenderer {
    cache: RenderCache,
    rules: RenderRules,
    sanitizer: Option<Box<dyn HtmlSanitizer>>,
    syntax_highlighting: bool,
    fence_tag: String,
    stats: RenderStats,
    warned_unsanitized: bool,
}

impl MessageRenderer {
    pub fn new() -> Self {
        Self {
            cache: RenderCache::default(),
            rules: RenderRules::default(),
            sanitizer: Some(Box::new(AmmoniaSanitizer::new())),
            syntax_highlighting: true,
            fence_tag: DEFAULT_WIDGET_FENCE_TAG.to_string(),
            stats: RenderStats::default(),
            warned_unsanitized: false,
        }
    }

    pub fn from_settings(settings: &RendererSettings) -> Self {
        let renderer = Self::new()
            .with_cache(RenderCache::new(settings.cache_capacity))
            .with_syntax_highlighting(settings.syntax_highlighting)
            .with_fence_tag(&settings.widget_fence_tag);
        if settings.sanitize {
            renderer
        } else {
            renderer.without_sanitizer()
        }
    }

    pub fn with_cache(mut self, cache: RenderCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_rules(mut self, rules: RenderRules) -> Self {
        self.rules = rules;
        self.cache.clear();
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: Box<dyn HtmlSanitizer>) -> Self {
        self.sanitizer = Some(sanitizer);
        self.cache.clear();
        self
    }

    /// Emit the parser's HTML as-is. Logged at `warn` on first render.
    pub fn without_sanitizer(mut self) -> Self {
        self.sanitizer = None;
        self.cache.clear();
        self
    }

    pub fn with_syntax_highlighting(mut self, enabled: bool) -> Self {
        self.syntax_highlighting = enabled;
        self.cache.clear();
        self
    }

    pub fn with_fence_tag(mut self, fence_tag: &str) -> Self {
        let tag = fence_tag.trim();
        self.fence_tag = if tag.is_empty() {
            DEFAULT_WIDGET_FENCE_TAG.to_string()
        } else {
            tag.to_string()
        };
        self
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn fence_tag(&self) -> &str {
        &self.fence_tag
    }

    /// Render one (possibly partial) message.
    pub fn render(&mut self, text: &str) -> RenderedMessage {
        self.stats.renders += 1;
        let prepared = preprocess(text);
        let extraction = extract_widgets(&prepared, &self.fence_tag);
        let widgets = extraction.has_widgets();

        let html = match self.cache.get(&extraction.text, widgets) {
            Some(hit) => {
                self.stats.cache_hits += 1;
                debug!(widgets, "render cache hit");
                hit.to_string()
            }
            None => {
                let html = self.render_uncached(&extraction.text, widgets);
                self.cache.insert(&extraction.text, widgets, html.clone());
                html
            }
        };

        if widgets {
            RenderedMessage::Fragments(splice_widgets(&html, extraction.blocks))
        } else {
            RenderedMessage::Html(html)
        }
    }

    fn render_uncached(&mut self, text: &str, widgets: bool) -> String {
        let document = parse_document(text);
        let raw = render_html(&document, &self.rules, self.syntax_highlighting);
        match &self.sanitizer {
            Some(sanitizer) => sanitizer.sanitize(&raw, &AllowList::with_widgets(widgets)),
            None => {
                if !self.warned_unsanitized {
                    warn!("no HTML sanitizer configured; emitting unsanitized markup");
                    self.warned_unsanitized = true;
                }
                raw
            }
        }
    }
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new()
    }
}
