use crate::render::{MessageRenderer, RenderedFragment, RenderedMessage};
use crate::widgets::Widget;

pub fn render_for_test(text: &str) -> RenderedMessage {
    MessageRenderer::new().render(text)
}

pub fn render_html_for_test(text: &str) -> String {
    render_for_test(text).to_html()
}

pub fn plain_renderer() -> MessageRenderer {
    MessageRenderer::new().with_syntax_highlighting(false)
}

pub fn widgets_of(message: &RenderedMessage) -> Vec<&Widget> {
    message.widgets().collect()
}

pub fn html_fragments(message: &RenderedMessage) -> Vec<&str> {
    match message {
        RenderedMessage::Html(html) => vec![html.as_str()],
        RenderedMessage::Fragments(fragments) => fragments
            .iter()
            .filter_map(|fragment| match fragment {
                RenderedFragment::Html(html) => Some(html.as_str()),
                RenderedFragment::Widget { .. } => None,
            })
            .collect(),
    }
}

pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "expected {needle:?} in rendered output:\n{haystack}"
    );
}

pub fn assert_not_contains(haystack: &str, needle: &str) {
    assert!(
        !haystack.contains(needle),
        "did not expect {needle:?} in rendered output:\n{haystack}"
    );
}
