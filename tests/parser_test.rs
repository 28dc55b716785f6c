//! Integration tests for the Markdown CV parser.

use mdcv::{parse_cv, CVData};

const SAMPLE_MINIMAL: &str = include_str!("fixtures/sample_minimal.md");
const SAMPLE_SHORT: &str = include_str!("fixtures/sample_short.md");
const SAMPLE_LONG: &str = include_str!("fixtures/sample_long.md");

fn section<'a>(cv: &'a CVData, heading: &str) -> &'a mdcv::CVSection {
    cv.sections
        .iter()
        .find(|s| s.heading == heading)
        .unwrap_or_else(|| panic!("no section '{heading}'"))
}

#[test]
fn test_extracts_name() {
    let cv = parse_cv(SAMPLE_SHORT);
    assert_eq!(cv.name, "John Smith");
}

#[test]
fn test_extracts_subtitle() {
    let cv = parse_cv(SAMPLE_SHORT);
    assert_eq!(cv.subtitle, "Senior Software Engineer");
}

#[test]
fn test_extracts_contact() {
    let cv = parse_cv(SAMPLE_SHORT);
    assert_eq!(cv.contact.items.len(), 4);
    assert!(cv.contact.items[0].contains("john.smith@email.com"));
}

#[test]
fn test_extracts_sections() {
    let cv = parse_cv(SAMPLE_SHORT);
    let headings: Vec<&str> = cv.sections.iter().map(|s| s.heading.as_str()).collect();
    assert!(headings.contains(&"Experience"));
    assert!(headings.contains(&"Education"));
    assert!(headings.contains(&"Skills"));
}

#[test]
fn test_experience_entries() {
    let cv = parse_cv(SAMPLE_SHORT);
    let exp = section(&cv, "Experience");
    assert_eq!(exp.entries.len(), 2);
    assert_eq!(exp.entries[0].title, "Senior Software Engineer");
    assert_eq!(exp.entries[0].organization, "Acme Corp");
    assert_eq!(exp.entries[0].date_range, "Jan 2022–Present");
    assert_eq!(exp.entries[0].details.len(), 3);
    assert_eq!(exp.entries[1].title, "Software Engineer");
    assert_eq!(exp.entries[1].organization, "Initech");
}

#[test]
fn test_education_two_line_entries() {
    let cv = parse_cv(SAMPLE_SHORT);
    let edu = section(&cv, "Education");
    assert_eq!(edu.entries.len(), 2);
    assert_eq!(edu.entries[0].title, "M.Sc. Computer Science");
    assert_eq!(edu.entries[0].date_range, "2014–2016");
    assert_eq!(edu.entries[0].organization, "Stanford University");
}

#[test]
fn test_skills_falls_back_to_raw_html() {
    let cv = parse_cv(SAMPLE_SHORT);
    let skills = section(&cv, "Skills");
    assert!(skills.is_raw());
    assert!(skills.raw_html.contains("Python"));
    assert!(skills.entries.is_empty());
}

#[test]
fn test_minimal_cv() {
    let cv = parse_cv(SAMPLE_MINIMAL);
    assert_eq!(cv.name, "Jane Doe");
    assert_eq!(cv.contact.items.len(), 2);
    assert_eq!(cv.sections.len(), 1);
    assert_eq!(cv.sections[0].heading, "Education");
    assert!(cv.subtitle.is_empty());
}

#[test]
fn test_long_cv_heading_entries() {
    let cv = parse_cv(SAMPLE_LONG);
    assert_eq!(cv.name, "Alexandra Johnson");

    let exp = section(&cv, "Experience");
    assert_eq!(exp.entries.len(), 3);
    assert_eq!(exp.entries[0].title, "Staff Software Engineer");
    assert_eq!(exp.entries[0].date_range, "Mar 2021–Present");
    assert_eq!(exp.entries[0].organization, "Meridian Data, Seattle");
    assert_eq!(
        exp.entries[0].description,
        "Own the storage layer behind the analytics product."
    );
    assert_eq!(exp.entries[0].tags, "Rust, Raft, RocksDB, gRPC");
    assert_eq!(exp.entries[0].details.len(), 4);

    let pubs = section(&cv, "Publications");
    assert!(pubs.is_raw());
    assert!(pubs.raw_html.contains("SRECon 2022"));
}

#[test]
fn test_projects_mix_of_tagged_and_bare_entries() {
    let cv = parse_cv(SAMPLE_LONG);
    let projects = section(&cv, "Projects");
    assert_eq!(projects.entries.len(), 2);
    assert_eq!(projects.entries[0].title, "quickraft");
    assert_eq!(projects.entries[0].tags, "Rust, consensus");
    assert_eq!(projects.entries[1].title, "pageproof");
    assert_eq!(projects.entries[1].tags, "");
    assert_eq!(projects.entries[1].details.len(), 1);
}

#[test]
fn test_no_photo_by_default() {
    let cv = parse_cv(SAMPLE_SHORT);
    assert!(cv.photo_path.is_none());
}

#[test]
fn test_entry_with_only_title() {
    let cv = parse_cv("# Name\n\nemail\n\n## Section\n\n**Just a title**\n");
    let section = &cv.sections[0];
    assert_eq!(section.entries.len(), 1);
    assert_eq!(section.entries[0].title, "Just a title");
    assert_eq!(section.entries[0].organization, "");
    assert_eq!(section.entries[0].date_range, "");
}

#[test]
fn test_entry_with_date_only() {
    let cv = parse_cv("# Name\n\nemail\n\n## Section\n\n**Title** | 2020–2023\n");
    let entry = &cv.sections[0].entries[0];
    assert_eq!(entry.title, "Title");
    assert_eq!(entry.date_range, "2020–2023");
    assert_eq!(entry.organization, "");
}

#[test]
fn test_heading_entries_in_document_order() {
    let md = "# N\n\ne\n\n## S\n\n### One | 2020\n\n### Two | 2021\n\n### Three\n";
    let cv = parse_cv(md);
    let titles: Vec<&str> = cv.sections[0]
        .entries
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
    assert_eq!(cv.sections[0].entries[2].date_range, "");
}

#[test]
fn test_tags_line_inside_entry() {
    let md = "# N\n\ne\n\n## S\n\n### Title\n\n**Skills:** Go, Rust\n";
    let cv = parse_cv(md);
    let entry = &cv.sections[0].entries[0];
    assert_eq!(entry.tags, "Go, Rust");
    assert_eq!(entry.organization, "");
}

#[test]
fn test_organization_line_inside_entry() {
    let md = "# N\n\ne\n\n## S\n\n### Title\n\n**Acme Corp** | NYC\n";
    let cv = parse_cv(md);
    let entry = &cv.sections[0].entries[0];
    assert_eq!(entry.organization, "Acme Corp, NYC");
    assert_eq!(entry.tags, "");
}

#[test]
fn test_empty_document_is_not_an_error() {
    let cv = parse_cv("");
    assert!(cv.is_empty());

    let cv = parse_cv("just a stray paragraph\n\nanother one\n");
    assert_eq!(cv.name, "");
    assert!(cv.sections.is_empty());
}

#[test]
fn test_prose_then_entries_degrades_whole_section() {
    // The abort-if-no-entries-yet rule: a leading prose paragraph sends
    // the entire section to the HTML fallback.
    let md = "# N\n\ne\n\n## S\n\nSome intro prose.\n\n**Title** | Acme\n";
    let cv = parse_cv(md);
    let section = &cv.sections[0];
    assert!(section.is_raw());
    assert!(section.raw_html.contains("Some intro prose."));
    assert!(section.raw_html.contains("<strong>Title</strong>"));
}
