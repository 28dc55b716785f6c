//! Document walk: token run → [`CVData`].

use super::ast::{extract_text, has_strong, Token};
use super::entries::interpreters;
use super::html::tokens_to_html;
use crate::model::{CVData, CVSection, ContactInfo};

/// Walk a block token run and extract the CV structure.
///
/// Never fails: a document with no recognizable CV shape yields a
/// `CVData` with empty fields.
pub fn walk(tokens: &[Token]) -> CVData {
    let mut cv = CVData::new();
    let mut i = 0;

    // First h1 becomes the name. Without one, scanning restarts from
    // the top with the name left empty.
    let mut found_name = false;
    while i < tokens.len() {
        if let Token::Heading { level: 1, children } = &tokens[i] {
            cv.name = extract_text(children);
            found_name = true;
            i += 1;
            break;
        }
        i += 1;
    }
    if !found_name {
        i = 0;
    }

    // Optional subtitle (bold paragraph without a pipe), then contact:
    // a pipe-delimited paragraph or a bullet list. Any heading ends the
    // phase without consuming contact.
    while i < tokens.len() {
        match &tokens[i] {
            Token::BlankLine | Token::ThematicBreak => i += 1,
            Token::Heading { .. } => break,
            Token::Paragraph { children } => {
                let text = extract_text(children);
                if cv.subtitle.is_empty() && has_strong(children) && !text.contains('|') {
                    cv.subtitle = text.trim().to_string();
                    i += 1;
                } else {
                    cv.contact = ContactInfo::from_items(
                        text.split('|').map(str::trim).filter(|s| !s.is_empty()),
                    );
                    i += 1;
                    break;
                }
            }
            Token::List { items, .. } => {
                cv.contact =
                    ContactInfo::from_items(items.iter().map(|item| item.flatten_text()));
                i += 1;
                break;
            }
            _ => i += 1,
        }
    }

    // Each h2 opens a section holding everything up to the next
    // heading of level <= 2.
    while i < tokens.len() {
        if let Token::Heading { level: 2, children } = &tokens[i] {
            let heading = extract_text(children);
            i += 1;
            let start = i;
            while i < tokens.len() {
                if matches!(&tokens[i], Token::Heading { level, .. } if *level <= 2) {
                    break;
                }
                i += 1;
            }
            cv.sections.push(parse_section(heading, &tokens[start..i]));
        } else {
            i += 1;
        }
    }

    cv
}

/// Interpret one section's token run: first interpreter to claim it
/// wins; otherwise the run becomes a raw-HTML section.
fn parse_section(heading: String, tokens: &[Token]) -> CVSection {
    for interpreter in interpreters() {
        if let Some(entries) = interpreter.try_parse(tokens) {
            return CVSection::structured(heading, entries);
        }
    }
    CVSection::raw(heading, tokens_to_html(tokens))
}
