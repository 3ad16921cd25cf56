//! Parser-independent document tree.
//!
//! pulldown-cmark's event stream is folded into a [`Node`] tree here; the
//! render rules only ever see nodes, so they can be retargeted at another
//! markdown parser by replacing [`parse_document`].

use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    None,
    Left,
    Center,
    Right,
}

impl From<Alignment> for Align {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::None => Align::None,
            Alignment::Left => Align::Left,
            Alignment::Center => Align::Center,
            Alignment::Right => Align::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Document,
    /// Transparent container for constructs without a dedicated rule.
    Fragment,
    Paragraph,
    Heading(u8),
    BlockQuote,
    /// `start` is `Some` for ordered lists.
    List {
        start: Option<u64>,
    },
    /// `checked` is `Some` for task-list items.
    Item {
        checked: Option<bool>,
    },
    CodeBlock {
        lang: String,
        code: String,
    },
    Table {
        alignments: Vec<Align>,
    },
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        href: String,
        title: String,
    },
    Image {
        src: String,
        title: String,
    },
    Text(String),
    Code(String),
    Html(String),
    SoftBreak,
    HardBreak,
    Rule,
}

/// Key used to look up a render rule; one per [`NodeKind`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKey {
    Document,
    Fragment,
    Paragraph,
    Heading,
    BlockQuote,
    List,
    Item,
    CodeBlock,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    Text,
    Code,
    Html,
    SoftBreak,
    HardBreak,
    Rule,
}

impl NodeKind {
    pub fn rule_key(&self) -> RuleKey {
        match self {
            NodeKind::Document => RuleKey::Document,
            NodeKind::Fragment => RuleKey::Fragment,
            NodeKind::Paragraph => RuleKey::Paragraph,
            NodeKind::Heading(_) => RuleKey::Heading,
            NodeKind::BlockQuote => RuleKey::BlockQuote,
            NodeKind::List { .. } => RuleKey::List,
            NodeKind::Item { .. } => RuleKey::Item,
            NodeKind::CodeBlock { .. } => RuleKey::CodeBlock,
            NodeKind::Table { .. } => RuleKey::Table,
            NodeKind::TableHead => RuleKey::TableHead,
            NodeKind::TableRow => RuleKey::TableRow,
            NodeKind::TableCell => RuleKey::TableCell,
            NodeKind::Emphasis => RuleKey::Emphasis,
            NodeKind::Strong => RuleKey::Strong,
            NodeKind::Strikethrough => RuleKey::Strikethrough,
            NodeKind::Link { .. } => RuleKey::Link,
            NodeKind::Image { .. } => RuleKey::Image,
            NodeKind::Text(_) => RuleKey::Text,
            NodeKind::Code(_) => RuleKey::Code,
            NodeKind::Html(_) => RuleKey::Html,
            NodeKind::SoftBreak => RuleKey::SoftBreak,
            NodeKind::HardBreak => RuleKey::HardBreak,
            NodeKind::Rule => RuleKey::Rule,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Concatenated text content, used for image alt text.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_plain_text(self, &mut out);
        out
    }
}

fn collect_plain_text(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Text(text) | NodeKind::Code(text) => out.push_str(text),
        NodeKind::SoftBreak | NodeKind::HardBreak => out.push(' '),
        _ => {
            for child in &node.children {
                collect_plain_text(child, out);
            }
        }
    }
}

/// GFM baseline: tables, task lists, strikethrough, alert blockquotes.
pub fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_GFM);
    options
}

fn language_hint_from_codeblock_kind(kind: CodeBlockKind) -> String {
    match kind {
        CodeBlockKind::Indented => String::new(),
        CodeBlockKind::Fenced(info) => info.split_ascii_whitespace().next().unwrap_or("").into(),
    }
}

fn node_kind_for_tag(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading(level as u8),
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::List(start) => NodeKind::List { start },
        Tag::Item => NodeKind::Item { checked: None },
        Tag::Table(alignments) => NodeKind::Table {
            alignments: alignments.into_iter().map(Align::from).collect(),
        },
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link {
            dest_url, title, ..
        } => NodeKind::Link {
            href: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeKind::Image {
            src: dest_url.into_string(),
            title: title.into_string(),
        },
        _ => NodeKind::Fragment,
    }
}

fn push_leaf(stack: &mut [Node], kind: NodeKind) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::new(kind));
    }
}

fn close_node(stack: &mut Vec<Node>) {
    if stack.len() > 1 {
        if let Some(node) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}

/// Parse markdown into a [`Node`] tree rooted at [`NodeKind::Document`].
pub fn parse_document(content: &str) -> Node {
    let mut stack: Vec<Node> = vec![Node::new(NodeKind::Document)];
    // (language hint, accumulated body) while inside a code block
    let mut code_block: Option<(String, String)> = None;

    for event in Parser::new_ext(content, markdown_options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code_block = Some((language_hint_from_codeblock_kind(kind), String::new()));
            }
            Event::End(pulldown_cmark::TagEnd::CodeBlock) => {
                if let Some((lang, code)) = code_block.take() {
                    push_leaf(&mut stack, NodeKind::CodeBlock { lang, code });
                }
            }
            Event::Text(text) => match code_block.as_mut() {
                Some((_, body)) => body.push_str(&text),
                None => push_leaf(&mut stack, NodeKind::Text(text.into_string())),
            },
            Event::Start(tag) => stack.push(Node::new(node_kind_for_tag(tag))),
            Event::End(_) => close_node(&mut stack),
            Event::Code(code) => push_leaf(&mut stack, NodeKind::Code(code.into_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                push_leaf(&mut stack, NodeKind::Html(html.into_string()))
            }
            Event::SoftBreak => push_leaf(&mut stack, NodeKind::SoftBreak),
            Event::HardBreak => push_leaf(&mut stack, NodeKind::HardBreak),
            Event::Rule => push_leaf(&mut stack, NodeKind::Rule),
            Event::TaskListMarker(checked) => {
                if let Some(item) = stack
                    .iter_mut()
                    .rev()
                    .find(|node| matches!(node.kind, NodeKind::Item { .. }))
                {
                    item.kind = NodeKind::Item {
                        checked: Some(checked),
                    };
                }
            }
            Event::FootnoteReference(label) => {
                push_leaf(&mut stack, NodeKind::Text(format!("[^{label}]")))
            }
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                push_leaf(&mut stack, NodeKind::Code(math.into_string()))
            }
        }
    }

    while stack.len() > 1 {
        close_node(&mut stack);
    }
    stack.pop().unwrap_or_else(|| Node::new(NodeKind::Document))
}
