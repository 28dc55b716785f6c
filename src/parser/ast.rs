//! Block/inline token model and the comrak bridge.
//!
//! The walker and entry strategies operate on this crate-owned tagged
//! union rather than on comrak's arena nodes, so they can be exercised
//! with hand-built token runs and stay insulated from upstream AST
//! changes: any node kind without an explicit mapping degrades to its
//! flattened plain text instead of being dropped.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// A block-level token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A heading with its level (1–6) and inline children.
    Heading {
        /// Heading level, 1–6.
        level: u8,
        /// Inline content.
        children: Vec<Inline>,
    },
    /// A paragraph of inline content.
    Paragraph {
        /// Inline content.
        children: Vec<Inline>,
    },
    /// An ordered or unordered list.
    List {
        /// True for `<ol>`-style lists.
        ordered: bool,
        /// List items in order.
        items: Vec<ListItem>,
    },
    /// A fenced or indented code block.
    CodeBlock {
        /// Raw code text.
        literal: String,
    },
    /// A horizontal rule.
    ThematicBreak,
    /// A blank line between blocks.
    BlankLine,
    /// Any block kind without a dedicated variant, reduced to its
    /// flattened text.
    Other {
        /// Flattened plain text of the block.
        text: String,
    },
}

/// One item of a [`Token::List`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Block-level children of the item (paragraphs, nested lists).
    pub blocks: Vec<Token>,
}

/// An inline-level token.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// A run of plain text.
    Text(String),
    /// An inline code span.
    Code(String),
    /// Bold content.
    Strong(Vec<Inline>),
    /// Italic content.
    Emphasis(Vec<Inline>),
    /// A hyperlink.
    Link {
        /// Destination URL.
        url: String,
        /// Link text.
        children: Vec<Inline>,
    },
    /// A soft line break (flattens to a single space).
    SoftBreak,
    /// A hard line break.
    LineBreak,
    /// Any inline kind without a dedicated variant, reduced to its
    /// flattened text.
    Other(String),
}

impl Token {
    /// Flatten a block to plain text.
    pub fn flatten_text(&self) -> String {
        match self {
            Token::Heading { children, .. } | Token::Paragraph { children } => {
                extract_text(children)
            }
            Token::List { items, .. } => items
                .iter()
                .map(ListItem::flatten_text)
                .collect::<Vec<_>>()
                .join(" "),
            Token::CodeBlock { literal } => literal.clone(),
            Token::ThematicBreak | Token::BlankLine => String::new(),
            Token::Other { text } => text.clone(),
        }
    }
}

impl ListItem {
    /// Flatten an item: each child block's text, joined with spaces.
    pub fn flatten_text(&self) -> String {
        self.blocks
            .iter()
            .map(Token::flatten_text)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// Recursively flatten inline content to plain text.
///
/// Text and code spans contribute their raw content verbatim (escaping
/// happens only on the HTML fallback path); a soft break becomes a
/// single space; a hard break contributes nothing.
pub fn extract_text(children: &[Inline]) -> String {
    let mut out = String::new();
    for child in children {
        push_inline_text(child, &mut out);
    }
    out
}

fn push_inline_text(node: &Inline, out: &mut String) {
    match node {
        Inline::Text(t) | Inline::Code(t) | Inline::Other(t) => out.push_str(t),
        Inline::Strong(inner) | Inline::Emphasis(inner) | Inline::Link { children: inner, .. } => {
            for child in inner {
                push_inline_text(child, out);
            }
        }
        Inline::SoftBreak => out.push(' '),
        Inline::LineBreak => {}
    }
}

/// Flatten a single inline node to plain text.
pub(crate) fn inline_text(node: &Inline) -> String {
    let mut out = String::new();
    push_inline_text(node, &mut out);
    out
}

/// Check whether inline content contains a top-level bold span.
pub(crate) fn has_strong(children: &[Inline]) -> bool {
    children.iter().any(|c| matches!(c, Inline::Strong(_)))
}

/// Flattened text of the first top-level bold span, or empty.
pub(crate) fn first_strong_text(children: &[Inline]) -> String {
    children
        .iter()
        .find_map(|c| match c {
            Inline::Strong(inner) => Some(extract_text(inner)),
            _ => None,
        })
        .unwrap_or_default()
}

/// Parse Markdown text into a flat run of block tokens.
pub fn tokenize(markdown: &str) -> Vec<Token> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &Options::default());
    root.children().map(convert_block).collect()
}

fn convert_block<'a>(node: &'a AstNode<'a>) -> Token {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => Token::Heading {
            level: heading.level,
            children: convert_inlines(node),
        },
        NodeValue::Paragraph => Token::Paragraph {
            children: convert_inlines(node),
        },
        NodeValue::List(list) => Token::List {
            ordered: matches!(list.list_type, ListType::Ordered),
            items: node
                .children()
                .map(|item| ListItem {
                    blocks: item.children().map(convert_block).collect(),
                })
                .collect(),
        },
        NodeValue::CodeBlock(code) => Token::CodeBlock {
            literal: code.literal.clone(),
        },
        NodeValue::ThematicBreak => Token::ThematicBreak,
        _ => Token::Other {
            text: flatten_comrak(node),
        },
    }
}

fn convert_inlines<'a>(node: &'a AstNode<'a>) -> Vec<Inline> {
    node.children().map(convert_inline).collect()
}

fn convert_inline<'a>(node: &'a AstNode<'a>) -> Inline {
    match &node.data.borrow().value {
        NodeValue::Text(text) => Inline::Text(text.to_string()),
        NodeValue::Code(code) => Inline::Code(code.literal.clone()),
        NodeValue::Strong => Inline::Strong(convert_inlines(node)),
        NodeValue::Emph => Inline::Emphasis(convert_inlines(node)),
        NodeValue::Link(link) => Inline::Link {
            url: link.url.clone(),
            children: convert_inlines(node),
        },
        NodeValue::SoftBreak => Inline::SoftBreak,
        NodeValue::LineBreak => Inline::LineBreak,
        _ => Inline::Other(flatten_comrak(node)),
    }
}

/// Flatten a comrak subtree to plain text, for node kinds the token
/// model does not represent directly.
fn flatten_comrak<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_comrak_text(node, &mut out);
    out
}

fn collect_comrak_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::CodeBlock(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {}
    }
    for child in node.children() {
        collect_comrak_text(child, out);
    }
}
