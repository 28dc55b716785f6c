//! # mdcv
//!
//! Convert a Markdown résumé into a styled, single-page-preferring PDF
//! (or HTML).
//!
//! The pipeline has two halves. A heuristic parser recovers a
//! structured CV model — name, contact, sections, dated entries — from
//! loosely-formatted Markdown, supporting several header and entry
//! conventions with a literal-HTML fallback for anything it does not
//! recognize. An auto-fit engine then binary-searches a scale factor
//! over font, margin, and line-height parameters, re-rendering and
//! re-measuring through an external rasterizer until the document fits
//! on one page (or the legibility floor is reached).
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdcv::{MdCv, PageSize};
//!
//! fn main() -> mdcv::Result<()> {
//!     let doc = MdCv::new()
//!         .with_theme("professional")
//!         .with_page_size(PageSize::A4)
//!         .parse_file("resume.md")?;
//!
//!     doc.write_pdf("resume.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Forgiving parsing**: `###`-heading entries, bold-paragraph
//!   entries, and raw-HTML fallback for prose sections
//! - **One-page auto-fit**: bounded binary search over a style scale,
//!   with a reported overflow condition instead of silent failure
//! - **Themes**: named template + style bundles, embedded defaults
//!   plus an on-disk override directory
//! - **Photo embedding**: optional portrait inlined as base64 data
//! - **Inspection**: the parsed model serializes to JSON

pub mod error;
pub mod fit;
pub mod model;
pub mod parser;
pub mod render;
pub mod theme;

pub use error::{Error, Result};
pub use fit::{
    FitOptions, FitResult, PageSize, Rasterized, Rasterizer, WeasyPrint, CONVERGENCE_THRESHOLD,
    MAX_ITERATIONS, MIN_SCALE,
};
pub use model::{CVData, CVEntry, CVSection, ContactInfo, StyleParams};
pub use parser::parse_cv;
pub use render::{to_html, to_json, JsonFormat};
pub use theme::{Theme, ThemeRegistry, DEFAULT_THEME};

use std::fs;
use std::path::{Path, PathBuf};

/// Parse a Markdown CV file into structured data.
///
/// # Example
///
/// ```no_run
/// let cv = mdcv::parse_file("resume.md").unwrap();
/// println!("{} sections", cv.sections.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<CVData> {
    let markdown = fs::read_to_string(path)?;
    Ok(parser::parse_cv(&markdown))
}

/// Builder for configuring and running a CV conversion.
///
/// # Example
///
/// ```no_run
/// use mdcv::{MdCv, PageSize};
///
/// let html = MdCv::new()
///     .with_theme("compact")
///     .with_page_size(PageSize::Letter)
///     .with_photo("portrait.jpg")
///     .parse_file("resume.md")?
///     .to_html()?;
/// # Ok::<(), mdcv::Error>(())
/// ```
pub struct MdCv {
    theme: String,
    theme_dir: Option<PathBuf>,
    options: FitOptions,
    photo: Option<PathBuf>,
}

impl MdCv {
    /// Create a builder with defaults: the `professional` theme, A4
    /// pages, auto-fit enabled, no photo.
    pub fn new() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            theme_dir: None,
            options: FitOptions::default(),
            photo: None,
        }
    }

    /// Select a theme by name.
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }

    /// Overlay themes from a directory (shadows embedded themes).
    pub fn with_theme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.theme_dir = Some(dir.into());
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.options = self.options.with_page_size(page_size);
        self
    }

    /// Disable the one-page auto-fit search.
    pub fn no_auto_fit(mut self) -> Self {
        self.options = self.options.with_auto_fit(false);
        self
    }

    /// Embed a portrait photo.
    pub fn with_photo(mut self, path: impl Into<PathBuf>) -> Self {
        self.photo = Some(path.into());
        self
    }

    /// Parse Markdown text and resolve the configured theme.
    pub fn parse(self, markdown: &str) -> Result<CvDocument> {
        let registry = match &self.theme_dir {
            Some(dir) => ThemeRegistry::with_theme_dir(dir)?,
            None => ThemeRegistry::new(),
        };
        let theme = registry.get(&self.theme)?.clone();

        let mut cv = parser::parse_cv(markdown);
        if let Some(photo) = self.photo {
            cv.photo_path = Some(photo);
        }

        Ok(CvDocument {
            cv,
            theme,
            options: self.options,
        })
    }

    /// Parse a Markdown CV file and resolve the configured theme.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<CvDocument> {
        let markdown = fs::read_to_string(path)?;
        self.parse(&markdown)
    }
}

impl Default for MdCv {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed CV bound to a resolved theme, ready for output.
#[derive(Debug)]
pub struct CvDocument {
    /// The parsed CV model.
    pub cv: CVData,
    theme: Theme,
    options: FitOptions,
}

impl CvDocument {
    /// Render to a self-contained HTML document at full scale.
    pub fn to_html(&self) -> Result<String> {
        let (width, height) = self.options.page_size.dimensions();
        let style = self.theme.default_style.with_page_dimensions(width, height);
        render::to_html(&self.cv, &style, &self.theme)
    }

    /// Serialize the parsed model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.cv, format)
    }

    /// Produce auto-fitted PDF bytes through the given rasterizer.
    pub fn to_pdf(&self, rasterizer: &dyn Rasterizer) -> Result<FitResult> {
        fit::generate_pdf(&self.cv, &self.theme, &self.options, rasterizer)
    }

    /// Produce an auto-fitted PDF with the default WeasyPrint
    /// rasterizer and write it to `path`.
    pub fn write_pdf<P: AsRef<Path>>(&self, path: P) -> Result<FitResult> {
        let result = self.to_pdf(&WeasyPrint::new())?;
        fs::write(path, &result.pdf)?;
        Ok(result)
    }

    /// The resolved theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
