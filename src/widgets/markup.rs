//! HTML snippets shared by the widget renderers.

use super::{Amount, WidgetAction};
use crate::render::escape_html;
use crate::utils::url::sanitize_href;

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.trim().to_ascii_uppercase().as_str() {
        "CNY" | "RMB" | "JPY" => Some("¥"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Numbers get the currency symbol (or code) prefixed; text amounts are
/// shown as sent.
pub(super) fn format_amount(amount: &Amount, currency: Option<&str>) -> String {
    match (amount, currency) {
        (Amount::Number(_), Some(code)) => match currency_symbol(code) {
            Some(symbol) => format!("{symbol}{amount}"),
            None => format!("{} {amount}", code.trim()),
        },
        _ => amount.to_string(),
    }
}

pub(super) fn push_text(out: &mut String, tag: &str, class: &str, text: &str) {
    out.push_str(&format!(
        r#"<{tag} class="{class}">{}</{tag}>"#,
        escape_html(text)
    ));
}

pub(super) fn push_optional_text(out: &mut String, tag: &str, class: &str, text: Option<&str>) {
    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
        push_text(out, tag, class, text);
    }
}

pub(super) fn push_amount(
    out: &mut String,
    class: &str,
    amount: Option<&Amount>,
    currency: Option<&str>,
) {
    if let Some(amount) = amount {
        push_text(out, "span", class, &format_amount(amount, currency));
    }
}

/// Image thumbnail that joins the message's preview gallery.
pub(super) fn push_image(out: &mut String, class: &str, src: Option<&str>, alt: &str) {
    let Some(src) = src.filter(|s| !s.trim().is_empty()) else {
        return;
    };
    let src = escape_html(&sanitize_href(src));
    out.push_str(&format!(
        r#"<img class="{class}" src="{src}" alt="{}" data-preview-src="{src}" />"#,
        escape_html(alt)
    ));
}

fn action_style(style: Option<&str>) -> &str {
    match style {
        Some(style)
            if !style.is_empty()
                && style
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') =>
        {
            style
        }
        _ => "default",
    }
}

pub(super) fn push_actions(out: &mut String, actions: &[WidgetAction]) {
    if actions.is_empty() {
        return;
    }
    out.push_str(r#"<div class="widget-actions">"#);
    for action in actions {
        let payload = action
            .payload
            .as_ref()
            .and_then(|payload| serde_json::to_string(payload).ok())
            .map(|json| format!(r#" data-payload="{}""#, escape_html(&json)))
            .unwrap_or_default();
        out.push_str(&format!(
            r#"<button type="button" class="widget-action widget-action-{}" data-action="{}"{payload}>{}</button>"#,
            action_style(action.style.as_deref()),
            escape_html(&action.action),
            escape_html(&action.label),
        ));
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_take_a_currency_prefix() {
        assert_eq!(format_amount(&Amount::Number(9.9), Some("cny")), "¥9.90");
        assert_eq!(format_amount(&Amount::Number(5.0), Some("CHF")), "CHF 5.00");
        assert_eq!(format_amount(&Amount::Number(5.0), None), "5.00");
        assert_eq!(format_amount(&Amount::Text("$12".into()), Some("USD")), "$12");
    }

    #[test]
    fn images_are_sanitized_and_join_the_gallery() {
        let mut out = String::new();
        push_image(&mut out, "widget-thumb", Some("javascript:alert(1)"), "x");
        assert_eq!(
            out,
            r##"<img class="widget-thumb" src="#" alt="x" data-preview-src="#" />"##
        );

        out.clear();
        push_image(&mut out, "widget-thumb", None, "x");
        assert!(out.is_empty());
    }

    #[test]
    fn action_buttons_carry_action_and_payload() {
        let actions = vec![WidgetAction {
            label: "Track <now>".into(),
            action: "msg:track SO-1".into(),
            payload: json!({"order_no": "SO-1"}).as_object().cloned(),
            style: Some("primary onclick=x".into()),
        }];
        let mut out = String::new();
        push_actions(&mut out, &actions);
        assert_eq!(
            out,
            concat!(
                r#"<div class="widget-actions">"#,
                r#"<button type="button" class="widget-action widget-action-default" "#,
                r#"data-action="msg:track SO-1" data-payload="{&quot;order_no&quot;:&quot;SO-1&quot;}">"#,
                "Track &lt;now&gt;</button></div>"
            )
        );
    }
}
