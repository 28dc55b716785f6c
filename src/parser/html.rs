//! Raw-HTML fallback rendering for unstructured sections.
//!
//! A minimal, deterministic mapping from the token model to HTML.
//! Token kinds without a dedicated tag degrade to their escaped
//! flattened text, so nothing is silently dropped.

use super::ast::{Inline, ListItem, Token};

/// Render a token run to literal HTML.
pub fn tokens_to_html(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(token_to_html)
        .filter(|html| !html.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn token_to_html(token: &Token) -> String {
    match token {
        Token::Paragraph { children } => format!("<p>{}</p>", inlines_to_html(children)),
        Token::Heading { level, children } => {
            format!("<h{level}>{}</h{level}>", inlines_to_html(children))
        }
        Token::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let body: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", item_to_html(item)))
                .collect();
            format!("<{tag}>{body}</{tag}>")
        }
        Token::CodeBlock { literal } => {
            format!("<pre><code>{}</code></pre>", escape_html(literal))
        }
        Token::BlankLine | Token::ThematicBreak => String::new(),
        Token::Other { text } => escape_html(text),
    }
}

fn item_to_html(item: &ListItem) -> String {
    item.blocks
        .iter()
        .map(|block| match block {
            // No <p> wrapper inside list items.
            Token::Paragraph { children } => inlines_to_html(children),
            Token::List { .. } => token_to_html(block),
            other => escape_html(&other.flatten_text()),
        })
        .collect()
}

fn inlines_to_html(children: &[Inline]) -> String {
    children.iter().map(inline_to_html).collect()
}

fn inline_to_html(node: &Inline) -> String {
    match node {
        Inline::Text(text) => escape_html(text),
        Inline::Strong(inner) => format!("<strong>{}</strong>", inlines_to_html(inner)),
        Inline::Emphasis(inner) => format!("<em>{}</em>", inlines_to_html(inner)),
        Inline::Code(code) => format!("<code>{}</code>", escape_html(code)),
        Inline::Link { url, children } => {
            format!("<a href=\"{}\">{}</a>", escape_html(url), inlines_to_html(children))
        }
        Inline::SoftBreak => " ".to_string(),
        Inline::LineBreak => "<br>".to_string(),
        Inline::Other(text) => escape_html(text),
    }
}

/// Escape HTML special characters.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
