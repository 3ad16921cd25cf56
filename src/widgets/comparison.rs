use super::markup::{push_optional_text, push_text};
use super::WidgetAction;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    /// One value per column; strings, numbers and booleans are shown as-is.
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceComparisonWidget {
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
    pub recommendation: Option<String>,
    #[serde(default)]
    pub actions: Vec<WidgetAction>,
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

impl PriceComparisonWidget {
    pub(super) fn render_body(&self, out: &mut String) {
        push_optional_text(out, "div", "widget-header", self.title.as_deref());

        out.push_str(r#"<table class="widget-comparison"><thead><tr><th></th>"#);
        for column in &self.columns {
            push_text(out, "th", "widget-column", column);
        }
        out.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            out.push_str("<tr>");
            push_text(out, "th", "widget-row-label", &row.label);
            if row.values.len() > self.columns.len() {
                debug!(
                    row = %row.label,
                    values = row.values.len(),
                    columns = self.columns.len(),
                    "comparison row has more values than columns; extra values not shown"
                );
            }
            for index in 0..self.columns.len() {
                push_text(out, "td", "widget-cell", &cell_text(row.values.get(index)));
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");

        push_optional_text(
            out,
            "div",
            "widget-recommendation",
            self.recommendation.as_deref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_are_padded_to_the_column_count() {
        let comparison: PriceComparisonWidget = serde_json::from_value(json!({
            "title": "Where to buy",
            "columns": ["Shop A", "Shop B"],
            "rows": [
                {"label": "Price", "values": ["¥99", 89]},
                {"label": "Shipping", "values": [true]}
            ],
            "recommendation": "Shop B"
        }))
        .unwrap();
        let mut html = String::new();
        comparison.render_body(&mut html);
        assert_eq!(html.matches(r#"<td class="widget-cell">"#).count(), 4);
        assert!(html.contains(r#"<td class="widget-cell">89</td>"#));
        assert!(html.contains(r#"<td class="widget-cell">true</td>"#));
        assert!(html.contains(r#"<td class="widget-cell">-</td>"#));
        assert!(html.contains(r#"<div class="widget-recommendation">Shop B</div>"#));
    }

    #[test]
    fn values_beyond_the_last_column_are_not_rendered() {
        let comparison: PriceComparisonWidget = serde_json::from_value(json!({
            "columns": ["Shop A"],
            "rows": [{"label": "Price", "values": [10, 20, 30]}]
        }))
        .unwrap();
        let mut html = String::new();
        comparison.render_body(&mut html);
        assert_eq!(html.matches(r#"<td class="widget-cell">"#).count(), 1);
        assert!(html.contains(r#"<td class="widget-cell">10</td>"#));
        assert!(!html.contains(">20<"));
        assert!(!html.contains(">30<"));
    }
}
