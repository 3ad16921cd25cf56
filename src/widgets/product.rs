use super::markup::{push_amount, push_image, push_optional_text, push_text};
use super::{Amount, WidgetAction};
use crate::render::escape_html;
use crate::utils::url::sanitize_href;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductWidget {
    pub title: String,
    pub price: Option<Amount>,
    #[serde(alias = "originalPrice")]
    pub original_price: Option<Amount>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub actions: Vec<WidgetAction>,
}

impl ProductWidget {
    pub(super) fn render_body(&self, out: &mut String) {
        let currency = self.currency.as_deref();
        push_image(out, "widget-image", self.image.as_deref(), &self.title);

        out.push_str(r#"<div class="widget-product-info">"#);
        match self.url.as_deref() {
            Some(url) => out.push_str(&format!(
                r#"<a class="widget-title" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(&sanitize_href(url)),
                escape_html(&self.title)
            )),
            None => push_text(out, "span", "widget-title", &self.title),
        }
        push_optional_text(out, "p", "widget-description", self.description.as_deref());

        out.push_str(r#"<div class="widget-prices">"#);
        push_amount(out, "widget-price", self.price.as_ref(), currency);
        if let Some(original) = &self.original_price {
            if self.price.as_ref() != Some(original) {
                push_amount(out, "widget-original-price", Some(original), currency);
            }
        }
        out.push_str("</div>");

        if !self.tags.is_empty() {
            out.push_str(r#"<div class="widget-tags">"#);
            for tag in &self.tags {
                push_text(out, "span", "widget-tag", tag);
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductListWidget {
    pub title: Option<String>,
    pub products: Vec<ProductWidget>,
    #[serde(default)]
    pub actions: Vec<WidgetAction>,
}

impl ProductListWidget {
    pub(super) fn render_body(&self, out: &mut String) {
        push_optional_text(out, "div", "widget-header", self.title.as_deref());
        out.push_str(r#"<div class="widget-product-grid">"#);
        for product in &self.products {
            out.push_str(r#"<div class="widget-product-card">"#);
            product.render_body(out);
            super::markup::push_actions(out, &product.actions);
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
}
