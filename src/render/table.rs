use super::ast::{Align, Node, NodeKind};
use super::html::RenderContext;

fn align_class(align: Align) -> &'static str {
    match align {
        Align::None => "",
        Align::Left => " md-align-left",
        Align::Center => " md-align-center",
        Align::Right => " md-align-right",
    }
}

fn render_cells(
    cells: &[Node],
    tag: &str,
    class: &str,
    alignments: &[Align],
    ctx: &mut RenderContext<'_>,
) {
    ctx.push_str("<tr>\n");
    for (column, cell) in cells.iter().enumerate() {
        let align = alignments.get(column).copied().unwrap_or(Align::None);
        ctx.push_str(&format!("<{tag} class=\"{class}{}\">", align_class(align)));
        ctx.render_children(cell);
        ctx.push_str(&format!("</{tag}>\n"));
    }
    ctx.push_str("</tr>\n");
}

/// Header cells sit directly under the head node; body cells sit in rows.
pub(super) fn table(node: &Node, ctx: &mut RenderContext<'_>) {
    let NodeKind::Table { alignments } = &node.kind else {
        return ctx.render_children(node);
    };
    ctx.push_str("<table class=\"md-table\">\n");

    let mut body_open = false;
    for section in &node.children {
        match section.kind {
            NodeKind::TableHead => {
                ctx.push_str("<thead>\n");
                render_cells(&section.children, "th", "md-th", alignments, ctx);
                ctx.push_str("</thead>\n");
            }
            NodeKind::TableRow => {
                if !body_open {
                    ctx.push_str("<tbody>\n");
                    body_open = true;
                }
                render_cells(&section.children, "td", "md-td", alignments, ctx);
            }
            _ => ctx.render(section),
        }
    }

    if body_open {
        ctx.push_str("</tbody>\n");
    }
    ctx.push_str("</table>\n");
}
