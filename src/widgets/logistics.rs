use super::markup::{push_optional_text, push_text};
use super::WidgetAction;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub time: Option<String>,
    pub description: String,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticsWidget {
    pub carrier: Option<String>,
    #[serde(alias = "trackingNo")]
    pub tracking_no: String,
    pub status: Option<String>,
    /// Newest event first, as sent by the carrier.
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub actions: Vec<WidgetAction>,
}

impl LogisticsWidget {
    pub(super) fn render_body(&self, out: &mut String) {
        out.push_str(r#"<div class="widget-header">"#);
        push_optional_text(out, "span", "widget-carrier", self.carrier.as_deref());
        push_text(out, "span", "widget-tracking-no", &self.tracking_no);
        push_optional_text(out, "span", "widget-status", self.status.as_deref());
        out.push_str("</div>");

        if self.timeline.is_empty() {
            return;
        }
        out.push_str(r#"<ol class="widget-timeline">"#);
        for (index, event) in self.timeline.iter().enumerate() {
            if index == 0 {
                out.push_str(r#"<li class="widget-timeline-event widget-timeline-latest">"#);
            } else {
                out.push_str(r#"<li class="widget-timeline-event">"#);
            }
            push_optional_text(out, "span", "widget-time", event.time.as_deref());
            push_text(out, "span", "widget-description", &event.description);
            push_optional_text(out, "span", "widget-location", event.location.as_deref());
            out.push_str("</li>");
        }
        out.push_str("</ol>");
    }
}
