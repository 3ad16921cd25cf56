//! `render`, `preprocess`, `widgets` and `stream` commands.

use std::error::Error;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cli::input::{read_message, stream_prefix_ends};
use crate::core::config::RendererSettings;
use crate::render::{extract_widgets, preprocess, MessageRenderer};
use crate::utils::syntax::stylesheet_for_theme;

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub standalone: bool,
    pub no_highlight: bool,
    pub no_sanitize: bool,
}

/// One entry of `chatmark widgets` output.
#[derive(Debug, Serialize)]
pub struct WidgetSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub known: bool,
    pub payload: Value,
}

pub fn run_render(
    file: Option<&Path>,
    settings: &RendererSettings,
    options: RenderOptions,
) -> Result<(), Box<dyn Error>> {
    let text = read_message(file)?;
    let mut renderer = renderer_for(settings, options);
    let html = renderer.render(&text).to_html();

    if options.standalone {
        let css = stylesheet_for_theme(&settings.syntax_theme).unwrap_or_default();
        print!("{}", standalone_document(&html, &css));
    } else {
        print!("{html}");
    }
    Ok(())
}

pub fn run_preprocess(file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = read_message(file)?;
    print!("{}", preprocess(&text));
    Ok(())
}

pub fn run_widgets(file: Option<&Path>, settings: &RendererSettings) -> Result<(), Box<dyn Error>> {
    let text = read_message(file)?;
    let summaries = widget_summaries(&text, &settings.widget_fence_tag);
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

/// Render every prefix a streaming reply passes through with one renderer,
/// then redraw the finished message, and report how the cache fared.
pub fn run_stream(
    file: Option<&Path>,
    settings: &RendererSettings,
    chunk: usize,
    redraws: usize,
) -> Result<(), Box<dyn Error>> {
    let text = read_message(file)?;
    let mut renderer = MessageRenderer::from_settings(settings);

    let ends = stream_prefix_ends(&text, chunk);
    for end in &ends {
        renderer.render(&text[..*end]);
    }
    let mut last = renderer.render(&text);
    for _ in 0..redraws {
        last = renderer.render(&text);
    }

    let stats = renderer.stats();
    info!(
        deltas = ends.len(),
        renders = stats.renders,
        cache_hits = stats.cache_hits,
        "stream replay finished"
    );

    print!("{}", last.to_html());
    eprintln!(
        "📊 {} deltas, {} renders, {} cache hits, {} cached entries (capacity {})",
        ends.len(),
        stats.renders,
        stats.cache_hits,
        renderer.cache().len(),
        renderer.cache().capacity()
    );
    Ok(())
}

fn renderer_for(settings: &RendererSettings, options: RenderOptions) -> MessageRenderer {
    let mut renderer = MessageRenderer::from_settings(settings);
    if options.no_highlight {
        renderer = renderer.with_syntax_highlighting(false);
    }
    if options.no_sanitize {
        renderer = renderer.without_sanitizer();
    }
    renderer
}

pub fn widget_summaries(text: &str, fence_tag: &str) -> Vec<WidgetSummary> {
    let prepared = preprocess(text);
    extract_widgets(&prepared, fence_tag)
        .blocks
        .into_iter()
        .map(|block| WidgetSummary {
            known: block.kind.is_known(),
            kind: block.kind.tag().to_string(),
            id: block.id,
            payload: block.payload,
        })
        .collect()
}

pub fn standalone_document(body: &str, css: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>chatmark</title>
<style>
{css}</style>
</head>
<body>
<div class="chat-message">
{body}</div>
</body>
</html>
"#
    )
}
