//! Typed widget components.
//!
//! A [`WidgetBlock`] extracted from a message carries an untyped JSON
//! payload. [`Widget::from_block`] turns it into one of the known widget
//! types, or into a [`FallbackWidget`] when the type is unknown or the
//! payload does not match its schema, so malformed widgets stay visible.

mod actions;
mod comparison;
mod logistics;
mod markup;
mod order;
mod product;

pub use actions::{
    ActionDispatcher, ActionKind, ActionOutcome, CopySuccessHook, FallbackActionHook, LinkOpener,
    RenderHooks, SendMessageHook, WidgetAction,
};
pub use comparison::{ComparisonRow, PriceComparisonWidget};
pub use logistics::{LogisticsWidget, TimelineEvent};
pub use order::{OrderItem, OrderWidget};
pub use product::{ProductListWidget, ProductWidget};

use crate::render::escape_html;
use crate::render::widgets::{WidgetBlock, WidgetKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// A price or total. Backends send both numbers and preformatted strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{value:.2}"),
            Amount::Text(text) => write!(f, "{}", text.trim()),
        }
    }
}

/// Visible stand-in for widgets that cannot be rendered as their type.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackWidget {
    /// The payload's `type` tag as sent (empty when absent).
    pub type_tag: String,
    pub raw: Value,
    /// Deserialization error for known types with a mismatched payload.
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Order(OrderWidget),
    Logistics(LogisticsWidget),
    Product(ProductWidget),
    ProductList(ProductListWidget),
    PriceComparison(PriceComparisonWidget),
    Fallback(FallbackWidget),
}

fn typed<T: DeserializeOwned>(block: &WidgetBlock, wrap: impl FnOnce(T) -> Widget) -> Widget {
    match serde_json::from_value::<T>(block.payload.clone()) {
        Ok(payload) => wrap(payload),
        Err(err) => {
            debug!(
                widget_id = %block.id,
                kind = block.kind.tag(),
                error = %err,
                "widget payload does not match its type"
            );
            Widget::Fallback(FallbackWidget {
                type_tag: block.kind.tag().to_string(),
                raw: block.payload.clone(),
                reason: Some(err.to_string()),
            })
        }
    }
}

impl Widget {
    pub fn from_block(block: &WidgetBlock) -> Self {
        match &block.kind {
            WidgetKind::Order => typed(block, Widget::Order),
            WidgetKind::Logistics => typed(block, Widget::Logistics),
            WidgetKind::Product => typed(block, Widget::Product),
            WidgetKind::ProductList => typed(block, Widget::ProductList),
            WidgetKind::PriceComparison => typed(block, Widget::PriceComparison),
            WidgetKind::Unknown(tag) => Widget::Fallback(FallbackWidget {
                type_tag: tag.clone(),
                raw: block.payload.clone(),
                reason: None,
            }),
        }
    }

    /// Type tag used for CSS classes and the `data-widget-type` attribute.
    pub fn kind_tag(&self) -> &str {
        match self {
            Widget::Order(_) => "order",
            Widget::Logistics(_) => "logistics",
            Widget::Product(_) => "product",
            Widget::ProductList(_) => "product-list",
            Widget::PriceComparison(_) => "price-comparison",
            Widget::Fallback(_) => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Widget::Fallback(_))
    }

    pub fn actions(&self) -> &[WidgetAction] {
        match self {
            Widget::Order(order) => &order.actions,
            Widget::Logistics(logistics) => &logistics.actions,
            Widget::Product(product) => &product.actions,
            Widget::ProductList(list) => &list.actions,
            Widget::PriceComparison(comparison) => &comparison.actions,
            Widget::Fallback(_) => &[],
        }
    }

    /// Self-contained HTML for the widget. All payload text is escaped and
    /// every link or image URL goes through the href sanitizer.
    pub fn to_html(&self, id: &str) -> String {
        let tag = self.kind_tag();
        let mut out = format!(
            r#"<div class="chat-widget chat-widget-{tag}" data-widget-type="{tag}" data-widget="{}">"#,
            escape_html(id)
        );
        match self {
            Widget::Order(order) => order.render_body(&mut out),
            Widget::Logistics(logistics) => logistics.render_body(&mut out),
            Widget::Product(product) => product.render_body(&mut out),
            Widget::ProductList(list) => list.render_body(&mut out),
            Widget::PriceComparison(comparison) => comparison.render_body(&mut out),
            Widget::Fallback(fallback) => render_fallback(fallback, &mut out),
        }
        markup::push_actions(&mut out, self.actions());
        out.push_str("</div>");
        out
    }
}

fn render_fallback(fallback: &FallbackWidget, out: &mut String) {
    let tag = if fallback.type_tag.is_empty() {
        "unknown"
    } else {
        fallback.type_tag.as_str()
    };
    out.push_str(&format!(
        r#"<div class="widget-header">Unsupported widget <code class="widget-type">{}</code></div>"#,
        escape_html(tag)
    ));
    if let Some(reason) = &fallback.reason {
        out.push_str(&format!(
            r#"<div class="widget-error">{}</div>"#,
            escape_html(reason)
        ));
    }
    let raw = serde_json::to_string_pretty(&fallback.raw)
        .unwrap_or_else(|_| fallback.raw.to_string());
    out.push_str(&format!(
        r#"<pre class="widget-raw"><code>{}</code></pre>"#,
        escape_html(&raw)
    ));
}
