//! Extraction of fenced widget blocks.
//!
//! The AI backend embeds structured cards in replies as fenced code blocks
//! whose info string is the widget fence tag, with a JSON body:
//!
//! ````text
//! ```ui-widget
//! {"type": "order", "order_no": "SO-1001", "items": []}
//! ```
//! ````
//!
//! [`extract_widgets`] swaps every such block that parses as JSON for an
//! inert placeholder marker and returns the parsed blocks in source order.
//! Blocks that fail to parse stay in the text untouched and render as
//! ordinary code.

use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Default info-string token marking a fenced block as a widget.
pub const DEFAULT_WIDGET_FENCE_TAG: &str = "ui-widget";
/// Prefix of every generated widget identifier.
pub const WIDGET_ID_PREFIX: &str = "widget-";
/// Attribute carrying the widget identifier on the placeholder marker.
pub const PLACEHOLDER_ATTRIBUTE: &str = "data-widget-id";

pub(crate) const PLACEHOLDER_OPEN: &str = "<div data-widget-id=\"";
pub(crate) const PLACEHOLDER_CLOSE: &str = "\"></div>";

/// Widget type tag carried in the payload's `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Order,
    Logistics,
    Product,
    ProductList,
    PriceComparison,
    /// Unrecognized or missing tag; holds the raw tag (empty when absent).
    Unknown(String),
}

impl WidgetKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "order" => WidgetKind::Order,
            "logistics" => WidgetKind::Logistics,
            "product" => WidgetKind::Product,
            "product-list" | "product_list" => WidgetKind::ProductList,
            "price-comparison" | "price_comparison" => WidgetKind::PriceComparison,
            _ => WidgetKind::Unknown(tag.to_string()),
        }
    }

    pub fn from_payload(payload: &Value) -> Self {
        payload
            .get("type")
            .and_then(Value::as_str)
            .map(WidgetKind::from_tag)
            .unwrap_or_else(|| WidgetKind::Unknown(String::new()))
    }

    pub fn tag(&self) -> &str {
        match self {
            WidgetKind::Order => "order",
            WidgetKind::Logistics => "logistics",
            WidgetKind::Product => "product",
            WidgetKind::ProductList => "product-list",
            WidgetKind::PriceComparison => "price-comparison",
            WidgetKind::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WidgetKind::Unknown(_))
    }
}

/// A parsed widget block found in one message.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetBlock {
    /// Identifier unique within one render; carried by the placeholder marker.
    pub id: String,
    pub kind: WidgetKind,
    pub payload: Value,
}

impl WidgetBlock {
    pub fn new(id: String, payload: Value) -> Self {
        let kind = WidgetKind::from_payload(&payload);
        Self { id, kind, payload }
    }
}

/// Text with widget blocks replaced by placeholders, plus the blocks found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub blocks: Vec<WidgetBlock>,
}

impl Extraction {
    pub fn has_widgets(&self) -> bool {
        !self.blocks.is_empty()
    }
}

pub fn widget_id(index: usize) -> String {
    format!("{WIDGET_ID_PREFIX}{index}")
}

/// Whether `value` has the shape of a generated widget identifier.
pub fn is_widget_id(value: &str) -> bool {
    value
        .strip_prefix(WIDGET_ID_PREFIX)
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

pub fn placeholder_marker(id: &str) -> String {
    format!("{PLACEHOLDER_OPEN}{id}{PLACEHOLDER_CLOSE}")
}

#[derive(Clone, Copy, Debug)]
struct Fence<'a> {
    ch: u8,
    len: usize,
    info: &'a str,
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn parse_fence_open(line: &str) -> Option<Fence<'_>> {
    let line = strip_line_ending(line);
    let indent = line.bytes().take_while(|b| *b == b' ').count();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let ch = *rest.as_bytes().first()?;
    if ch != b'`' && ch != b'~' {
        return None;
    }
    let len = rest.bytes().take_while(|b| *b == ch).count();
    if len < 3 {
        return None;
    }
    let info = rest[len..].trim();
    if ch == b'`' && info.contains('`') {
        return None;
    }
    Some(Fence { ch, len, info })
}

fn is_fence_close(line: &str, open: &Fence<'_>) -> bool {
    let line = strip_line_ending(line);
    let indent = line.bytes().take_while(|b| *b == b' ').count();
    if indent > 3 {
        return false;
    }
    let rest = &line[indent..];
    let len = rest.bytes().take_while(|b| *b == open.ch).count();
    len >= open.len && rest[len..].trim().is_empty()
}

fn info_matches(info: &str, fence_tag: &str) -> bool {
    info.split_ascii_whitespace().next() == Some(fence_tag)
}

/// Break up any placeholder attribute name written in the message itself, so
/// only markers emitted here carry it. `data&#45;widget-id` still reads as
/// the original text but is not an attribute the sanitizer keeps.
fn neutralize_forged_placeholders(line: &str) -> Cow<'_, str> {
    let needle = PLACEHOLDER_ATTRIBUTE.as_bytes();
    let bytes = line.as_bytes();
    let starts: Vec<usize> = (0..bytes.len().saturating_sub(needle.len() - 1))
        .filter(|&start| bytes[start..start + needle.len()].eq_ignore_ascii_case(needle))
        .collect();
    if starts.is_empty() {
        return Cow::Borrowed(line);
    }

    // Everything matched is ASCII, so these offsets are char boundaries.
    let hyphen = "data".len();
    let mut out = String::with_capacity(line.len() + starts.len() * 4);
    let mut cursor = 0usize;
    for start in starts {
        out.push_str(&line[cursor..start + hyphen]);
        out.push_str("&#45;");
        cursor = start + hyphen + 1;
    }
    out.push_str(&line[cursor..]);
    Cow::Owned(out)
}

fn push_placeholder(out: &mut String, id: &str) {
    // Blank lines on both sides make the parser treat the marker as an HTML
    // block instead of inline HTML inside a paragraph.
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&placeholder_marker(id));
    out.push_str("\n\n");
}

/// Replace valid fenced widget blocks with placeholder markers.
///
/// Identifiers are `widget-0`, `widget-1`, ... in source order, so the same
/// text always yields the same intermediate markup. Placeholder attributes
/// already present outside fenced blocks are neutralized first.
pub fn extract_widgets(text: &str, fence_tag: &str) -> Extraction {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut out = String::with_capacity(text.len());
    let mut blocks: Vec<WidgetBlock> = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        let Some(open) = parse_fence_open(lines[i]) else {
            out.push_str(&neutralize_forged_placeholders(lines[i]));
            i += 1;
            continue;
        };

        let close = (i + 1..lines.len()).find(|&j| is_fence_close(lines[j], &open));
        let block_end = close.map(|j| j + 1).unwrap_or(lines.len());

        if info_matches(open.info, fence_tag) {
            if let Some(close) = close {
                let body: String = lines[i + 1..close].concat();
                match serde_json::from_str::<Value>(&body) {
                    Ok(payload) => {
                        let id = widget_id(blocks.len());
                        push_placeholder(&mut out, &id);
                        blocks.push(WidgetBlock::new(id, payload));
                        i = block_end;
                        continue;
                    }
                    Err(err) => {
                        debug!(line = i + 1, error = %err, "widget block is not valid JSON; leaving it as code");
                    }
                }
            } else {
                debug!(line = i + 1, "widget block has no closing fence; leaving it as code");
            }
        }

        // Copy the whole fenced block verbatim so fences nested in its body are
        // never mistaken for widget blocks.
        for line in &lines[i..block_end] {
            out.push_str(line);
        }
        i = block_end;
    }

    Extraction { text: out, blocks }
}
