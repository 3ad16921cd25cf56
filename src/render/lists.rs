use super::ast::{Node, NodeKind};
use super::html::RenderContext;

pub(super) fn list(node: &Node, ctx: &mut RenderContext<'_>) {
    match node.kind {
        NodeKind::List { start: Some(start) } => {
            if start == 1 {
                ctx.push_str("<ol class=\"md-list md-ol\">\n");
            } else {
                ctx.push_str(&format!("<ol class=\"md-list md-ol\" start=\"{start}\">\n"));
            }
            ctx.render_children(node);
            ctx.push_str("</ol>\n");
        }
        _ => {
            ctx.push_str("<ul class=\"md-list md-ul\">\n");
            ctx.render_children(node);
            ctx.push_str("</ul>\n");
        }
    }
}

/// An item holding exactly one paragraph renders that paragraph's inline
/// content directly, without the `<p>` wrapper.
fn single_paragraph(node: &Node) -> Option<&Node> {
    match node.children.as_slice() {
        [only] if only.kind == NodeKind::Paragraph => Some(only),
        _ => None,
    }
}

pub(super) fn item(node: &Node, ctx: &mut RenderContext<'_>) {
    let checked = match node.kind {
        NodeKind::Item { checked } => checked,
        _ => None,
    };
    match checked {
        Some(true) => ctx.push_str(
            "<li class=\"md-task-item\"><input type=\"checkbox\" disabled checked /> ",
        ),
        Some(false) => {
            ctx.push_str("<li class=\"md-task-item\"><input type=\"checkbox\" disabled /> ")
        }
        None => ctx.push_str("<li>"),
    }
    match single_paragraph(node) {
        Some(paragraph) => ctx.render_children(paragraph),
        None => ctx.render_children(node),
    }
    ctx.push_str("</li>\n");
}
