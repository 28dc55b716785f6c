//! Entry strategies: turn a section's token run into structured entries.
//!
//! Strategies are tried in a fixed priority order; each either claims
//! the whole run or yields `None` so the next one (or the raw-HTML
//! fallback) gets a chance. They never fail — an unrecognized section
//! shape is not an error.

use super::ast::{extract_text, first_strong_text, has_strong, inline_text, Inline, Token};
use crate::model::CVEntry;

/// A strategy for interpreting a section's token run as entries.
pub trait SectionInterpreter {
    /// Attempt to parse the run. `None` means "not my shape, try the
    /// next interpreter" — including when the run yields zero entries.
    fn try_parse(&self, tokens: &[Token]) -> Option<Vec<CVEntry>>;
}

/// Interpreters in priority order.
pub(crate) fn interpreters() -> [&'static dyn SectionInterpreter; 2] {
    [&HeadingEntries, &BoldParagraphEntries]
}

/// Level-3-heading strategy: each `###` opens an entry.
///
/// The heading splits on `|` into title and date range. Paragraphs
/// under the heading are classified as tags (`**Skills:** ...`),
/// organization (`**Acme Corp** | NYC`), or description; a list becomes
/// the entry's detail bullets. Later paragraphs of the same kind
/// overwrite earlier ones.
pub struct HeadingEntries;

impl SectionInterpreter for HeadingEntries {
    fn try_parse(&self, tokens: &[Token]) -> Option<Vec<CVEntry>> {
        if !tokens
            .iter()
            .any(|t| matches!(t, Token::Heading { level: 3, .. }))
        {
            return None;
        }

        let mut entries = Vec::new();
        let mut current: Option<CVEntry> = None;

        for token in tokens {
            match token {
                Token::BlankLine | Token::ThematicBreak => {}
                Token::Heading { level: 3, children } => {
                    if let Some(done) = current.take() {
                        entries.push(done);
                    }
                    current = Some(entry_from_heading(children));
                }
                Token::Paragraph { children } => {
                    if let Some(entry) = current.as_mut() {
                        classify_paragraph(entry, children);
                    }
                }
                Token::List { items, .. } => {
                    if let Some(entry) = current.as_mut() {
                        entry.details = items.iter().map(|item| item.flatten_text()).collect();
                    }
                }
                _ => {}
            }
        }

        if let Some(done) = current {
            entries.push(done);
        }
        (!entries.is_empty()).then_some(entries)
    }
}

fn entry_from_heading(children: &[Inline]) -> CVEntry {
    let heading_text = extract_text(children);
    let mut parts = heading_text.split('|');
    let mut entry = CVEntry::titled(parts.next().unwrap_or("").trim());
    if let Some(date) = parts.next() {
        entry.date_range = date.trim().to_string();
    }
    entry
}

fn classify_paragraph(entry: &mut CVEntry, children: &[Inline]) {
    if has_strong(children) {
        let full_text = extract_text(children);
        if first_strong_text(children).ends_with(':') {
            // Tags line: **Skills:** Go, Rust, ...
            entry.tags = match full_text.find(':') {
                Some(idx) => full_text[idx + 1..].trim().to_string(),
                None => full_text,
            };
        } else {
            // Organization line: **Acme Corp** | New York
            entry.organization = full_text
                .split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
        }
    } else {
        entry.description = extract_text(children).trim().to_string();
    }
}

/// Bold-paragraph strategy, used when a section has no level-3 headings.
///
/// A paragraph containing a bold span opens an entry; a list directly
/// after it becomes the detail bullets. Any other non-blank token
/// before the first entry aborts the strategy entirely — descriptive
/// sections with incidental bold text must not be misread as entry
/// lists. Once at least one entry exists, an unmatched token just ends
/// the scan and the accumulated entries are returned.
pub struct BoldParagraphEntries;

impl SectionInterpreter for BoldParagraphEntries {
    fn try_parse(&self, tokens: &[Token]) -> Option<Vec<CVEntry>> {
        let mut entries: Vec<CVEntry> = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match &tokens[i] {
                Token::BlankLine => i += 1,
                Token::Paragraph { children } if has_strong(children) => {
                    let mut entry = parse_entry_header(children);
                    i += 1;
                    while matches!(tokens.get(i), Some(Token::BlankLine)) {
                        i += 1;
                    }
                    if let Some(Token::List { items, .. }) = tokens.get(i) {
                        entry.details = items.iter().map(|item| item.flatten_text()).collect();
                        i += 1;
                    }
                    entries.push(entry);
                }
                _ => break,
            }
        }

        (!entries.is_empty()).then_some(entries)
    }
}

/// Parse a bold header paragraph into an entry.
///
/// Supported shapes:
/// - `**Title**`
/// - `**Title** | Organization | Date Range`
/// - `**Title** | Date Range`
/// - `**Title** | Date Range` ⏎ `Organization | Extra` (soft-break
///   two-line header, as in education entries)
fn parse_entry_header(children: &[Inline]) -> CVEntry {
    let mut entry = CVEntry::default();

    // Split at the first soft break; later soft breaks are dropped.
    let mut first_line: Vec<&Inline> = Vec::new();
    let mut second_line: Vec<&Inline> = Vec::new();
    let mut in_second = false;
    for child in children {
        if matches!(child, Inline::SoftBreak) {
            in_second = true;
            continue;
        }
        if in_second {
            second_line.push(child);
        } else {
            first_line.push(child);
        }
    }

    for child in &first_line {
        if let Inline::Strong(inner) = child {
            entry.title = extract_text(inner);
            break;
        }
    }

    let full_text: String = first_line.iter().map(|c| inline_text(c)).collect();

    // Everything after the title is organization/date material.
    let title_end = full_text
        .find(&entry.title)
        .map(|pos| pos + entry.title.len())
        .unwrap_or(0);
    let mut remainder = full_text[title_end..].trim();
    remainder = remainder.strip_prefix('|').unwrap_or(remainder);

    let segments: Vec<&str> = remainder
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [organization, date_range, ..] => {
            entry.organization = (*organization).to_string();
            entry.date_range = (*date_range).to_string();
        }
        [single] => {
            // Dates are expected to contain digits.
            if single.chars().any(|c| c.is_ascii_digit()) {
                entry.date_range = (*single).to_string();
            } else {
                entry.organization = (*single).to_string();
            }
        }
        [] => {}
    }

    if !second_line.is_empty() && entry.organization.is_empty() {
        let second_text: String = second_line.iter().map(|c| inline_text(c)).collect();
        let parts: Vec<&str> = second_text
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if !parts.is_empty() {
            entry.organization = parts.join(", ");
        }
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::ListItem;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn strong(s: &str) -> Inline {
        Inline::Strong(vec![text(s)])
    }

    fn paragraph(children: Vec<Inline>) -> Token {
        Token::Paragraph { children }
    }

    fn h3(children: Vec<Inline>) -> Token {
        Token::Heading { level: 3, children }
    }

    fn bullet_list(items: &[&str]) -> Token {
        Token::List {
            ordered: false,
            items: items
                .iter()
                .map(|s| ListItem {
                    blocks: vec![paragraph(vec![text(s)])],
                })
                .collect(),
        }
    }

    #[test]
    fn test_heading_strategy_requires_h3() {
        let tokens = vec![paragraph(vec![strong("Title")])];
        assert!(HeadingEntries.try_parse(&tokens).is_none());
    }

    #[test]
    fn test_heading_strategy_title_and_date() {
        let tokens = vec![h3(vec![text("Engineer | 2020–2023")])];
        let entries = HeadingEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Engineer");
        assert_eq!(entries[0].date_range, "2020–2023");
    }

    #[test]
    fn test_heading_strategy_tags_line() {
        let tokens = vec![
            h3(vec![text("Project")]),
            paragraph(vec![strong("Skills:"), text(" Go, Rust")]),
        ];
        let entries = HeadingEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].tags, "Go, Rust");
        assert_eq!(entries[0].organization, "");
    }

    #[test]
    fn test_heading_strategy_organization_line() {
        let tokens = vec![
            h3(vec![text("Engineer")]),
            paragraph(vec![strong("Acme Corp"), text(" | NYC")]),
        ];
        let entries = HeadingEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].organization, "Acme Corp, NYC");
        assert_eq!(entries[0].tags, "");
    }

    #[test]
    fn test_heading_strategy_description_and_details() {
        let tokens = vec![
            h3(vec![text("Engineer")]),
            paragraph(vec![text("Platform team.")]),
            bullet_list(&["Built the thing", "Kept it running"]),
        ];
        let entries = HeadingEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].description, "Platform team.");
        assert_eq!(
            entries[0].details,
            vec!["Built the thing", "Kept it running"]
        );
    }

    #[test]
    fn test_heading_strategy_n_headings_n_entries() {
        let tokens = vec![
            h3(vec![text("First | 2020")]),
            h3(vec![text("Second | 2021")]),
            h3(vec![text("Third")]),
        ];
        let entries = HeadingEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].title, "Second");
        assert_eq!(entries[1].date_range, "2021");
        assert_eq!(entries[2].date_range, "");
    }

    #[test]
    fn test_bold_strategy_title_org_date() {
        let tokens = vec![paragraph(vec![
            strong("Engineer"),
            text(" | Acme | 2020–2023"),
        ])];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].title, "Engineer");
        assert_eq!(entries[0].organization, "Acme");
        assert_eq!(entries[0].date_range, "2020–2023");
    }

    #[test]
    fn test_bold_strategy_lone_segment_digit_heuristic() {
        let tokens = vec![paragraph(vec![strong("Title"), text(" | 2020–2023")])];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].date_range, "2020–2023");
        assert_eq!(entries[0].organization, "");

        let tokens = vec![paragraph(vec![strong("Title"), text(" | Acme Corp")])];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].organization, "Acme Corp");
        assert_eq!(entries[0].date_range, "");
    }

    #[test]
    fn test_bold_strategy_two_line_header() {
        let tokens = vec![paragraph(vec![
            strong("M.Sc. Computer Science"),
            text(" | 2014–2016"),
            Inline::SoftBreak,
            text("Stanford University | GPA 3.9"),
        ])];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].title, "M.Sc. Computer Science");
        assert_eq!(entries[0].date_range, "2014–2016");
        assert_eq!(entries[0].organization, "Stanford University, GPA 3.9");
    }

    #[test]
    fn test_bold_strategy_details_list() {
        let tokens = vec![
            paragraph(vec![strong("Engineer")]),
            Token::BlankLine,
            bullet_list(&["Did a thing"]),
        ];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].details, vec!["Did a thing"]);
    }

    #[test]
    fn test_bold_strategy_aborts_on_leading_prose() {
        let tokens = vec![
            paragraph(vec![text("Just some prose about me.")]),
            paragraph(vec![strong("Engineer"), text(" | Acme")]),
        ];
        assert!(BoldParagraphEntries.try_parse(&tokens).is_none());
    }

    #[test]
    fn test_bold_strategy_stops_after_entries() {
        let tokens = vec![
            paragraph(vec![strong("Engineer"), text(" | Acme")]),
            paragraph(vec![text("Trailing prose.")]),
            paragraph(vec![strong("Ignored"), text(" | Later")]),
        ];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Engineer");
    }

    #[test]
    fn test_bold_strategy_bold_only_title() {
        let tokens = vec![paragraph(vec![strong("Just a title")])];
        let entries = BoldParagraphEntries.try_parse(&tokens).unwrap();
        assert_eq!(entries[0].title, "Just a title");
        assert_eq!(entries[0].organization, "");
        assert_eq!(entries[0].date_range, "");
    }
}
