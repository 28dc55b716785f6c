//! Markdown CV parsing.
//!
//! The pipeline is: Markdown text → block [`Token`] run (comrak bridge)
//! → document walk → [`CVData`](crate::model::CVData). Section bodies
//! are interpreted by an ordered chain of [`SectionInterpreter`]
//! strategies, with a literal-HTML fallback for anything none of them
//! recognize. Parsing never fails.

mod ast;
mod entries;
mod html;
mod walker;

pub use ast::{extract_text, tokenize, Inline, ListItem, Token};
pub use entries::{BoldParagraphEntries, HeadingEntries, SectionInterpreter};
pub use html::tokens_to_html;
pub use walker::walk;

use crate::model::CVData;

/// Parse a Markdown CV into structured data.
pub fn parse_cv(markdown: &str) -> CVData {
    walk(&tokenize(markdown))
}
