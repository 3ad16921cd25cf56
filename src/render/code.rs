use super::ast::{Node, NodeKind};
use super::html::{escape_html, RenderContext};
use crate::utils::syntax::{highlight_code_html, normalize_lang_hint};

pub(super) fn code_block(node: &Node, ctx: &mut RenderContext<'_>) {
    let NodeKind::CodeBlock { lang, code } = &node.kind else {
        return;
    };
    let lang_norm = normalize_lang_hint(lang);
    if lang_norm.is_empty() {
        ctx.push_str("<pre class=\"md-code-block\"><code>");
    } else {
        ctx.push_str(&format!(
            "<pre class=\"md-code-block\"><code class=\"language-{}\">",
            escape_html(&lang_norm)
        ));
    }
    if ctx.syntax_highlighting() {
        ctx.push_str(&highlight_code_html(&lang_norm, code));
    } else {
        ctx.push_escaped(code);
    }
    ctx.push_str("</code></pre>\n");
}

#[cfg(test)]
mod tests {
    use crate::render::ast::parse_document;
    use crate::render::html::{render_html, RenderRules};

    #[test]
    fn plain_code_blocks_are_escaped() {
        let html = render_html(
            &parse_document("```\n<b>&</b>\n```"),
            &RenderRules::default(),
            false,
        );
        assert_eq!(
            html,
            "<pre class=\"md-code-block\"><code>&lt;b&gt;&amp;&lt;/b&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn language_class_uses_the_normalized_hint() {
        let html = render_html(
            &parse_document("```JS\nlet a = 1;\n```"),
            &RenderRules::default(),
            false,
        );
        assert!(html.starts_with("<pre class=\"md-code-block\"><code class=\"language-javascript\">"));
    }

    #[test]
    fn highlighted_blocks_emit_classed_spans() {
        let html = render_html(
            &parse_document("```js\nconsole.log(1)\n```"),
            &RenderRules::default(),
            true,
        );
        assert!(html.contains("hl-source hl-js"));
        assert!(html.ends_with("</code></pre>\n"));
    }

    #[test]
    fn unknown_languages_fall_back_to_plain_text() {
        let html = render_html(
            &parse_document("```brainfuck\n+++.\n```"),
            &RenderRules::default(),
            true,
        );
        assert!(html.contains("language-brainfuck"));
        assert!(html.contains("hl-text hl-plain"));
        assert!(html.contains("+++."));
    }
}
