//! HTML sanitizer seam.
//!
//! The pipeline only talks to [`HtmlSanitizer`]; [`AmmoniaSanitizer`] is the
//! default implementation. The placeholder attribute is allow-listed only for
//! renders that actually carry widgets.

use super::gallery::PREVIEW_ATTRIBUTE;
use super::widgets::{is_widget_id, PLACEHOLDER_ATTRIBUTE};
use crate::utils::url::sanitize_href;
use ammonia::Builder;
use std::borrow::Cow;

const LINK_REL: &str = "noopener noreferrer";

/// Which optional constructs survive sanitization for one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    pub widget_placeholders: bool,
}

impl AllowList {
    pub fn with_widgets(widget_placeholders: bool) -> Self {
        Self {
            widget_placeholders,
        }
    }
}

pub trait HtmlSanitizer {
    /// Strip `raw` down to the safe subset described by `allow`.
    fn sanitize(&self, raw: &str, allow: &AllowList) -> String;
}

/// ammonia-backed sanitizer holding one configured builder per allow-list.
pub struct AmmoniaSanitizer {
    base: Builder<'static>,
    with_widgets: Builder<'static>,
}

fn base_builder() -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .add_tags(&["input"])
        .add_generic_attributes(&["class"])
        .add_tag_attributes("a", &["target", "title"])
        .add_tag_attributes("img", &[PREVIEW_ATTRIBUTE, "title"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .add_tag_attributes("ol", &["start"])
        .link_rel(Some(LINK_REL))
        .attribute_filter(attribute_filter);
    builder
}

/// Preview sources get the same URL check as links; placeholder ids must
/// look generated.
fn attribute_filter<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    match (element, attribute) {
        ("img", PREVIEW_ATTRIBUTE) => Some(Cow::Owned(sanitize_href(value))),
        ("div", PLACEHOLDER_ATTRIBUTE) if !is_widget_id(value) => None,
        _ => Some(Cow::Borrowed(value)),
    }
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let mut with_widgets = base_builder();
        with_widgets.add_tag_attributes("div", &[PLACEHOLDER_ATTRIBUTE]);
        Self {
            base: base_builder(),
            with_widgets,
        }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, raw: &str, allow: &AllowList) -> String {
        let builder = if allow.widget_placeholders {
            &self.with_widgets
        } else {
            &self.base
        };
        builder.clean(raw).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str, widgets: bool) -> String {
        AmmoniaSanitizer::new().sanitize(raw, &AllowList::with_widgets(widgets))
    }

    #[test]
    fn scripts_and_event_handlers_are_removed() {
        assert_eq!(clean("<p>hi</p><script>alert(1)</script>", false), "<p>hi</p>");
        let html = clean("<img src=\"/a.png\" onerror=\"alert(1)\">", false);
        assert!(html.contains("src=\"/a.png\""));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn placeholders_survive_only_in_widget_mode() {
        let marker = "<div data-widget-id=\"widget-0\"></div>";
        assert_eq!(clean(marker, true), marker);
        assert_eq!(clean(marker, false), "<div></div>");
    }

    #[test]
    fn placeholder_attribute_requires_a_widget_id_value() {
        assert_eq!(
            clean("<div data-widget-id=\"x onclick\"></div>", true),
            "<div></div>"
        );
        assert_eq!(
            clean("<span data-widget-id=\"widget-1\">s</span>", true),
            "<span>s</span>"
        );
    }

    #[test]
    fn rendered_markup_keeps_its_classes_and_link_attributes() {
        let html = clean(
            "<a href=\"https://example.com/x\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"x\">x</a>",
            false,
        );
        assert!(html.contains("href=\"https://example.com/x\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("class=\"x\""));

        let html = clean(
            "<img src=\"/c.png\" alt=\"c\" data-preview-src=\"/c.png\" class=\"md-image\">",
            false,
        );
        assert!(html.contains("data-preview-src=\"/c.png\""));
        assert!(html.contains("class=\"md-image\""));
    }

    #[test]
    fn task_checkboxes_survive() {
        let html = clean(
            "<ul><li class=\"md-task-item\"><input type=\"checkbox\" disabled checked /> done</li></ul>",
            false,
        );
        assert!(html.contains("<input"));
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("disabled"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn dangerous_raw_links_lose_their_href() {
        let html = clean("<a href=\"javascript:alert(1)\">x</a>", false);
        assert!(!html.contains("javascript"));
        assert!(html.contains(">x</a>"));
    }

    #[test]
    fn raw_preview_sources_pass_the_url_check() {
        let html = clean(
            "<img src=\"/a.png\" data-preview-src=\"javascript:alert(2)\">",
            false,
        );
        assert!(!html.contains("javascript"));
        assert!(html.contains("data-preview-src=\"#\""));

        let html = clean("<img data-preview-src=\" /b.png \">", true);
        assert!(html.contains("data-preview-src=\"/b.png\""));
    }
}
