use super::ast::{Node, RuleKey};
use std::collections::HashMap;

/// A render function for one node kind. Rules write into the context and
/// recurse through [`RenderContext::render_children`].
pub type RenderRule = fn(&Node, &mut RenderContext<'_>);

/// Table mapping node kinds to render functions.
///
/// Kinds without an entry render their children and nothing else.
#[derive(Clone, Debug)]
pub struct RenderRules {
    rules: HashMap<RuleKey, RenderRule>,
}

impl RenderRules {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Replace (or add) the rule for `key`.
    pub fn with(mut self, key: RuleKey, rule: RenderRule) -> Self {
        self.rules.insert(key, rule);
        self
    }

    pub fn set(&mut self, key: RuleKey, rule: RenderRule) {
        self.rules.insert(key, rule);
    }

    pub fn get(&self, key: RuleKey) -> Option<RenderRule> {
        self.rules.get(&key).copied()
    }
}

impl Default for RenderRules {
    fn default() -> Self {
        super::rules::default_rules()
    }
}

/// Output buffer plus the settings rules may consult.
pub struct RenderContext<'a> {
    out: String,
    rules: &'a RenderRules,
    syntax_highlighting: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(rules: &'a RenderRules, syntax_highlighting: bool) -> Self {
        Self {
            out: String::new(),
            rules,
            syntax_highlighting,
        }
    }

    pub fn render(&mut self, node: &Node) {
        match self.rules.get(node.kind.rule_key()) {
            Some(rule) => rule(node, self),
            None => self.render_children(node),
        }
    }

    pub fn render_children(&mut self, node: &Node) {
        for child in &node.children {
            self.render(child);
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn push_escaped(&mut self, s: &str) {
        push_escaped_html(&mut self.out, s);
    }

    pub fn syntax_highlighting(&self) -> bool {
        self.syntax_highlighting
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Render a document tree to an HTML string.
pub fn render_html(document: &Node, rules: &RenderRules, syntax_highlighting: bool) -> String {
    let mut ctx = RenderContext::new(rules, syntax_highlighting);
    ctx.render(document);
    ctx.finish()
}

fn push_escaped_html(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

/// Escape text for use in HTML element content or double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped_html(&mut out, s);
    out
}

/// Reverse [`escape_html`] (plus the `&#x27;` form html5ever may emit).
pub fn unescape_html_attribute(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
