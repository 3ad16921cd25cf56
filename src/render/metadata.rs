use crate::widgets::Widget;

/// One piece of a message that carried widgets.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderedFragment {
    /// Sanitized HTML between widget slots.
    Html(String),
    Widget { id: String, widget: Widget },
}

/// Output of one render: a single HTML blob, or HTML interleaved with
/// widget components when the message carried widget blocks.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderedMessage {
    Html(String),
    Fragments(Vec<RenderedFragment>),
}

impl RenderedMessage {
    pub fn has_widgets(&self) -> bool {
        self.widget_count() > 0
    }

    pub fn widget_count(&self) -> usize {
        match self {
            RenderedMessage::Html(_) => 0,
            RenderedMessage::Fragments(fragments) => fragments
                .iter()
                .filter(|fragment| matches!(fragment, RenderedFragment::Widget { .. }))
                .count(),
        }
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        let fragments: &[RenderedFragment] = match self {
            RenderedMessage::Html(_) => &[],
            RenderedMessage::Fragments(fragments) => fragments,
        };
        fragments.iter().filter_map(|fragment| match fragment {
            RenderedFragment::Widget { widget, .. } => Some(widget),
            RenderedFragment::Html(_) => None,
        })
    }

    /// Flatten to one HTML document fragment, widgets rendered in place.
    pub fn to_html(&self) -> String {
        match self {
            RenderedMessage::Html(html) => html.clone(),
            RenderedMessage::Fragments(fragments) => {
                let mut out = String::new();
                for fragment in fragments {
                    match fragment {
                        RenderedFragment::Html(html) => out.push_str(html),
                        RenderedFragment::Widget { id, widget } => {
                            out.push_str(&widget.to_html(id));
                            out.push('\n');
                        }
                    }
                }
                out
            }
        }
    }
}
