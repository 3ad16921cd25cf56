//! Default render rules: one function per node kind.

use super::ast::{Node, NodeKind, RuleKey};
use super::html::{escape_html, RenderContext, RenderRules};
use super::{code, lists, table};
use crate::utils::url::sanitize_href;

pub(crate) fn default_rules() -> RenderRules {
    RenderRules::empty()
        .with(RuleKey::Paragraph, paragraph)
        .with(RuleKey::Heading, heading)
        .with(RuleKey::BlockQuote, block_quote)
        .with(RuleKey::List, lists::list)
        .with(RuleKey::Item, lists::item)
        .with(RuleKey::CodeBlock, code::code_block)
        .with(RuleKey::Table, table::table)
        .with(RuleKey::Emphasis, emphasis)
        .with(RuleKey::Strong, strong)
        .with(RuleKey::Strikethrough, strikethrough)
        .with(RuleKey::Link, link)
        .with(RuleKey::Image, image)
        .with(RuleKey::Text, text)
        .with(RuleKey::Code, inline_code)
        .with(RuleKey::Html, raw_html)
        .with(RuleKey::SoftBreak, soft_break)
        .with(RuleKey::HardBreak, hard_break)
        .with(RuleKey::Rule, rule)
}

/// Wrap the node's children in `open`/`close`.
fn wrap(node: &Node, ctx: &mut RenderContext<'_>, open: &str, close: &str) {
    ctx.push_str(open);
    ctx.render_children(node);
    ctx.push_str(close);
}

fn paragraph(node: &Node, ctx: &mut RenderContext<'_>) {
    wrap(node, ctx, "<p>", "</p>\n");
}

fn heading(node: &Node, ctx: &mut RenderContext<'_>) {
    let NodeKind::Heading(level) = node.kind else {
        return ctx.render_children(node);
    };
    let level = level.clamp(1, 6);
    ctx.push_str(&format!(r#"<h{level} class="md-heading md-h{level}">"#));
    ctx.render_children(node);
    ctx.push_str(&format!("</h{level}>\n"));
}

fn block_quote(node: &Node, ctx: &mut RenderContext<'_>) {
    wrap(node, ctx, "<blockquote>\n", "</blockquote>\n");
}

fn emphasis(node: &Node, ctx: &mut RenderContext<'_>) {
    wrap(node, ctx, "<em>", "</em>");
}

fn strong(node: &Node, ctx: &mut RenderContext<'_>) {
    wrap(node, ctx, "<strong>", "</strong>");
}

fn strikethrough(node: &Node, ctx: &mut RenderContext<'_>) {
    wrap(node, ctx, "<del>", "</del>");
}

fn title_attribute(title: &str) -> String {
    if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    }
}

fn link(node: &Node, ctx: &mut RenderContext<'_>) {
    let NodeKind::Link { href, title } = &node.kind else {
        return ctx.render_children(node);
    };
    ctx.push_str(&format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer"{}>"#,
        escape_html(&sanitize_href(href)),
        title_attribute(title),
    ));
    ctx.render_children(node);
    ctx.push_str("</a>");
}

fn image(node: &Node, ctx: &mut RenderContext<'_>) {
    let NodeKind::Image { src, title } = &node.kind else {
        return;
    };
    let src = escape_html(&sanitize_href(src));
    ctx.push_str(&format!(
        r#"<img src="{src}" alt="{alt}" data-preview-src="{src}" class="md-image"{title} />"#,
        alt = escape_html(&node.plain_text()),
        title = title_attribute(title),
    ));
}

fn text(node: &Node, ctx: &mut RenderContext<'_>) {
    if let NodeKind::Text(text) = &node.kind {
        ctx.push_escaped(text);
    }
}

fn inline_code(node: &Node, ctx: &mut RenderContext<'_>) {
    if let NodeKind::Code(code) = &node.kind {
        ctx.push_str(r#"<code class="md-inline-code">"#);
        ctx.push_escaped(code);
        ctx.push_str("</code>");
    }
}

fn raw_html(node: &Node, ctx: &mut RenderContext<'_>) {
    if let NodeKind::Html(html) = &node.kind {
        ctx.push_str(html);
    }
}

fn soft_break(_node: &Node, ctx: &mut RenderContext<'_>) {
    ctx.push_str("\n");
}

fn hard_break(_node: &Node, ctx: &mut RenderContext<'_>) {
    ctx.push_str("<br />\n");
}

fn rule(_node: &Node, ctx: &mut RenderContext<'_>) {
    ctx.push_str("<hr />\n");
}

#[cfg(test)]
mod tests {
    use crate::render::ast::parse_document;
    use crate::render::html::{render_html, RenderRules};

    fn render(markdown: &str) -> String {
        render_html(&parse_document(markdown), &RenderRules::default(), false)
    }

    #[test]
    fn headings_carry_depth_classes() {
        for level in 1..=6 {
            let markdown = format!("{} Title", "#".repeat(level));
            assert_eq!(
                render(&markdown),
                format!("<h{level} class=\"md-heading md-h{level}\">Title</h{level}>\n")
            );
        }
    }

    #[test]
    fn links_are_sanitized_and_open_externally() {
        assert_eq!(
            render("[site](https://example.com/x \"Example\")"),
            "<p><a href=\"https://example.com/x\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"Example\">site</a></p>\n"
        );
        assert!(render("[x](javascript:alert(1))").contains("href=\"#\""));
    }

    #[test]
    fn link_text_keeps_nested_formatting() {
        assert_eq!(
            render("[**bold** `code`](/docs)"),
            "<p><a href=\"/docs\" target=\"_blank\" rel=\"noopener noreferrer\"><strong>bold</strong> <code class=\"md-inline-code\">code</code></a></p>\n"
        );
    }

    #[test]
    fn images_carry_preview_source() {
        assert_eq!(
            render("![a chart](https://cdn.example.com/c.png)"),
            "<p><img src=\"https://cdn.example.com/c.png\" alt=\"a chart\" data-preview-src=\"https://cdn.example.com/c.png\" class=\"md-image\" /></p>\n"
        );
        assert!(render("![x](data:image/png;base64,AAAA)").contains("src=\"#\""));
    }

    #[test]
    fn inline_markup_and_breaks() {
        assert_eq!(
            render("*em* **strong** ~~gone~~  \nnext\n\n---"),
            "<p><em>em</em> <strong>strong</strong> <del>gone</del><br />\nnext</p>\n<hr />\n"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render("1 < 2 & 3"), "<p>1 &lt; 2 &amp; 3</p>\n");
    }

    #[test]
    fn blockquotes_wrap_their_blocks() {
        assert_eq!(
            render("> quoted"),
            "<blockquote>\n<p>quoted</p>\n</blockquote>\n"
        );
    }
}
