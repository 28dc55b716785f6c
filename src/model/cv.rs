//! CV document model types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A complete parsed CV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CVData {
    /// Candidate name, from the first level-1 heading. Empty if absent.
    pub name: String,

    /// Optional subtitle: a bold-only paragraph between the name and the
    /// contact line (e.g. "Senior Backend Engineer").
    pub subtitle: String,

    /// Contact items in document order.
    pub contact: ContactInfo,

    /// Portrait photo to embed, attached after parsing. Never derived
    /// from the Markdown itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<PathBuf>,

    /// Sections in document order.
    pub sections: Vec<CVSection>,
}

impl CVData {
    /// Create a new empty CV.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a portrait photo path.
    pub fn with_photo(mut self, path: impl Into<PathBuf>) -> Self {
        self.photo_path = Some(path.into());
        self
    }

    /// Check whether any content was recovered at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contact.items.is_empty() && self.sections.is_empty()
    }
}

/// Contact items from the CV header (email, phone, links).
///
/// Order matches the document; duplicates are kept as written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact strings in document order.
    pub items: Vec<String>,
}

impl ContactInfo {
    /// Create contact info from an iterator of items.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A section of the CV (e.g. Experience, Education).
///
/// A section is either structured (`entries` populated) or raw
/// (`raw_html` populated), never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CVSection {
    /// Section heading, from a level-2 heading.
    pub heading: String,

    /// Structured entries, in document order. Empty for raw sections.
    pub entries: Vec<CVEntry>,

    /// Literal HTML fallback for sections no entry strategy recognized.
    pub raw_html: String,
}

impl CVSection {
    /// Create a structured section.
    pub fn structured(heading: impl Into<String>, entries: Vec<CVEntry>) -> Self {
        Self {
            heading: heading.into(),
            entries,
            raw_html: String::new(),
        }
    }

    /// Create a raw-HTML fallback section.
    pub fn raw(heading: impl Into<String>, raw_html: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
            raw_html: raw_html.into(),
        }
    }

    /// Check whether this section fell back to literal HTML.
    pub fn is_raw(&self) -> bool {
        self.entries.is_empty() && !self.raw_html.is_empty()
    }
}

/// One structured item within a section: a job, a degree, a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CVEntry {
    /// Entry title (position, degree, project name).
    pub title: String,

    /// Organization, possibly joined from several segments.
    pub organization: String,

    /// Free-form date range ("Jan 2022–Present"). Never parsed into dates.
    pub date_range: String,

    /// Free-text description paragraph.
    pub description: String,

    /// Tag line derived from a labeled "Key:" paragraph ("Go, Rust").
    pub tags: String,

    /// Bullet points in document order.
    pub details: Vec<String>,
}

impl CVEntry {
    /// Create an entry with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
