use super::markup::{push_amount, push_image, push_optional_text, push_text};
use super::{Amount, WidgetAction};
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub sku: Option<String>,
    pub image: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub price: Option<Amount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderWidget {
    #[serde(alias = "orderNo")]
    pub order_no: String,
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(alias = "totalAmount")]
    pub total_amount: Option<Amount>,
    pub currency: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub actions: Vec<WidgetAction>,
}

impl OrderWidget {
    pub(super) fn render_body(&self, out: &mut String) {
        let currency = self.currency.as_deref();

        out.push_str(r#"<div class="widget-header">"#);
        push_text(out, "span", "widget-title", &format!("Order {}", self.order_no));
        push_optional_text(out, "span", "widget-status", self.status.as_deref());
        out.push_str("</div>");
        push_optional_text(out, "div", "widget-meta", self.created_at.as_deref());

        if !self.items.is_empty() {
            out.push_str(r#"<ul class="widget-items">"#);
            for item in &self.items {
                out.push_str(r#"<li class="widget-item">"#);
                push_image(out, "widget-thumb", item.image.as_deref(), &item.name);
                push_text(out, "span", "widget-item-name", &item.name);
                push_optional_text(out, "span", "widget-item-sku", item.sku.as_deref());
                push_text(out, "span", "widget-item-qty", &format!("x{}", item.quantity));
                push_amount(out, "widget-item-price", item.price.as_ref(), currency);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }

        if self.total_amount.is_some() {
            out.push_str(r#"<div class="widget-total">Total "#);
            push_amount(out, "widget-amount", self.total_amount.as_ref(), currency);
            out.push_str("</div>");
        }
    }
}
