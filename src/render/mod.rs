//! Chat message rendering pipeline.
//!
//! [`MessageRenderer`] is the entry point; the stages are exposed so hosts
//! and tests can drive them individually.

pub mod ast;
pub mod cache;
mod code;
pub mod gallery;
pub mod html;
mod lists;
mod metadata;
mod pipeline;
pub mod preprocess;
mod rules;
pub mod sanitize;
pub mod splice;
mod table;
pub mod widgets;

#[cfg(test)]
pub mod test_fixtures;

#[cfg(test)]
mod tests;

pub use cache::{RenderCache, DEFAULT_CACHE_CAPACITY};
pub use gallery::{collect_gallery, open_preview, ImagePreview};
pub use html::{escape_html, render_html, RenderContext, RenderRule, RenderRules};
pub use metadata::{RenderedFragment, RenderedMessage};
pub use pipeline::{MessageRenderer, RenderStats};
pub use preprocess::preprocess;
pub use sanitize::{AllowList, AmmoniaSanitizer, HtmlSanitizer};
pub use widgets::{extract_widgets, Extraction, WidgetBlock, WidgetKind};
