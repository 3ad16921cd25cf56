//! Reassembly of sanitized HTML and widget components.

use super::metadata::RenderedFragment;
use super::widgets::{WidgetBlock, PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::widgets::Widget;
use memchr::memmem;
use std::collections::HashMap;
use tracing::warn;

fn push_html(fragments: &mut Vec<RenderedFragment>, html: &str) {
    if !html.trim().is_empty() {
        fragments.push(RenderedFragment::Html(html.to_string()));
    }
}

/// Split `html` on placeholder markers and put the matching widget in each
/// slot.
///
/// Whitespace-only HTML between markers is dropped. A marker whose id has no
/// block (or whose block was already used) renders nothing.
pub fn splice_widgets(html: &str, blocks: Vec<WidgetBlock>) -> Vec<RenderedFragment> {
    let mut by_id: HashMap<String, WidgetBlock> = blocks
        .into_iter()
        .map(|block| (block.id.clone(), block))
        .collect();
    let open_finder = memmem::Finder::new(PLACEHOLDER_OPEN);
    let close_finder = memmem::Finder::new(PLACEHOLDER_CLOSE);

    let mut fragments = Vec::new();
    let mut cursor = 0usize;
    while let Some(offset) = open_finder.find(&html.as_bytes()[cursor..]) {
        let marker_start = cursor + offset;
        let id_start = marker_start + PLACEHOLDER_OPEN.len();
        let Some(id_len) = close_finder.find(&html.as_bytes()[id_start..]) else {
            break;
        };
        let id = &html[id_start..id_start + id_len];

        push_html(&mut fragments, &html[cursor..marker_start]);
        match by_id.remove(id) {
            Some(block) => fragments.push(RenderedFragment::Widget {
                widget: Widget::from_block(&block),
                id: block.id,
            }),
            None => warn!(widget_id = %id, "placeholder without a widget block"),
        }
        cursor = id_start + id_len + PLACEHOLDER_CLOSE.len();
    }
    push_html(&mut fragments, &html[cursor..]);
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::widgets::placeholder_marker;
    use serde_json::json;

    fn block(id: &str) -> WidgetBlock {
        WidgetBlock::new(id.into(), json!({"type": "teleport", "to": id}))
    }

    fn shape(fragments: &[RenderedFragment]) -> Vec<String> {
        fragments
            .iter()
            .map(|fragment| match fragment {
                RenderedFragment::Html(html) => format!("html:{html}"),
                RenderedFragment::Widget { id, .. } => format!("widget:{id}"),
            })
            .collect()
    }

    #[test]
    fn html_and_widgets_interleave_in_document_order() {
        let html = format!(
            "<p>a</p>\n{}\n<p>b</p>\n{}\n<p>c</p>\n",
            placeholder_marker("widget-0"),
            placeholder_marker("widget-1")
        );
        let fragments = splice_widgets(&html, vec![block("widget-0"), block("widget-1")]);
        assert_eq!(
            shape(&fragments),
            [
                "html:<p>a</p>\n",
                "widget:widget-0",
                "html:\n<p>b</p>\n",
                "widget:widget-1",
                "html:\n<p>c</p>\n",
            ]
        );
    }

    #[test]
    fn whitespace_only_fragments_are_dropped() {
        let html = format!(
            "{}\n\n{}\n",
            placeholder_marker("widget-0"),
            placeholder_marker("widget-1")
        );
        let fragments = splice_widgets(&html, vec![block("widget-0"), block("widget-1")]);
        assert_eq!(shape(&fragments), ["widget:widget-0", "widget:widget-1"]);
    }

    #[test]
    fn missing_ids_render_nothing() {
        let html = format!("<p>a</p>{}<p>b</p>", placeholder_marker("widget-9"));
        let fragments = splice_widgets(&html, vec![block("widget-0")]);
        assert_eq!(shape(&fragments), ["html:<p>a</p>", "html:<p>b</p>"]);
    }

    #[test]
    fn duplicate_markers_use_the_block_once() {
        let marker = placeholder_marker("widget-0");
        let html = format!("{marker}<p>x</p>{marker}");
        let fragments = splice_widgets(&html, vec![block("widget-0")]);
        assert_eq!(shape(&fragments), ["widget:widget-0", "html:<p>x</p>"]);
    }

    #[test]
    fn html_without_markers_is_one_fragment() {
        let fragments = splice_widgets("<p>plain</p>\n", Vec::new());
        assert_eq!(shape(&fragments), ["html:<p>plain</p>\n"]);
    }
}
