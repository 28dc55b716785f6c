//! Auto-fit engine: shrink layout parameters until the rendered CV
//! fits on one page.
//!
//! Rasterization is behind the [`Rasterizer`] trait so the engine is
//! testable without a PDF toolchain and stays free of subprocess
//! concerns. The search assumes page count is non-increasing as scale
//! decreases; pathological layouts that gain pages when shrunk can
//! yield a suboptimal (still valid) result.

mod weasyprint;

pub use weasyprint::{count_pages, WeasyPrint};

use log::{debug, warn};

use crate::error::Result;
use crate::model::{CVData, StyleParams};
use crate::render;
use crate::theme::Theme;

/// Smallest scale factor the search will accept. Below this the text
/// stops being comfortably legible.
pub const MIN_SCALE: f64 = 0.65;

/// Upper bound on render-and-measure cycles per conversion.
pub const MAX_ITERATIONS: u32 = 12;

/// Stop the search once the bound interval is this narrow.
pub const CONVERGENCE_THRESHOLD: f64 = 0.005;

/// Output of one rasterization pass.
#[derive(Debug, Clone)]
pub struct Rasterized {
    /// The PDF document bytes.
    pub pdf: Vec<u8>,
    /// Number of pages in the document (>= 1).
    pub page_count: u32,
}

/// External HTML-to-PDF collaborator.
///
/// Implementations must be deterministic for identical input and
/// return a page count of at least one. Failures are fatal to the
/// conversion; the engine never retries.
pub trait Rasterizer {
    /// Render an HTML document to PDF bytes and count its pages.
    fn rasterize(&self, html: &str) -> Result<Rasterized>;
}

/// Supported page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    /// ISO A4, 210mm × 297mm.
    #[default]
    A4,
    /// US Letter, 8.5in × 11in.
    Letter,
}

impl PageSize {
    /// CSS dimensions as (width, height).
    pub fn dimensions(self) -> (&'static str, &'static str) {
        match self {
            PageSize::A4 => ("210mm", "297mm"),
            PageSize::Letter => ("8.5in", "11in"),
        }
    }
}

/// Options for PDF generation.
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Page size applied onto the theme's base style.
    pub page_size: PageSize,
    /// Whether to shrink the layout to reach one page.
    pub auto_fit: bool,
}

impl FitOptions {
    /// Create options with defaults (A4, auto-fit enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable or disable auto-fit.
    pub fn with_auto_fit(mut self, auto_fit: bool) -> Self {
        self.auto_fit = auto_fit;
        self
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            auto_fit: true,
        }
    }
}

/// Final outcome of a PDF generation run.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// The chosen PDF document bytes.
    pub pdf: Vec<u8>,
    /// Page count of the chosen render.
    pub page_count: u32,
    /// Scale factor the document was rendered at.
    pub scale: f64,
    /// True when content still overflows one page at [`MIN_SCALE`].
    /// Degraded output, not a failure.
    pub overflow: bool,
}

/// Generate a PDF, binary-searching the style scale until the document
/// fits one page.
///
/// The first render happens at full scale; if it already fits (or
/// auto-fit is disabled) it is final. Otherwise the engine probes up
/// to [`MAX_ITERATIONS`] midpoints of the scale interval
/// `[MIN_SCALE, 1.0]`, keeping the largest one-page render. When no
/// probe fits, a last render at exactly [`MIN_SCALE`] becomes the
/// result — marked `overflow` and logged as a warning when it still
/// spans multiple pages. The full-scale multi-page render is never
/// returned while auto-fit is on.
pub fn generate_pdf(
    cv: &CVData,
    theme: &Theme,
    options: &FitOptions,
    rasterizer: &dyn Rasterizer,
) -> Result<FitResult> {
    let (width, height) = options.page_size.dimensions();
    let base_style = theme.default_style.with_page_dimensions(width, height);

    let html = render_once(cv, theme, &base_style)?;
    let full = rasterizer.rasterize(&html)?;
    if full.page_count <= 1 || !options.auto_fit {
        return Ok(FitResult {
            pdf: full.pdf,
            page_count: full.page_count,
            scale: 1.0,
            overflow: false,
        });
    }

    let mut lo = MIN_SCALE;
    let mut hi = 1.0;
    let mut best: Option<(Rasterized, f64)> = None;

    for _ in 0..MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let html = render_once(cv, theme, &base_style.scaled(mid))?;
        let probe = rasterizer.rasterize(&html)?;
        debug!("auto-fit probe at scale {:.3}: {} page(s)", mid, probe.page_count);

        if probe.page_count <= 1 {
            best = Some((probe, mid));
            lo = mid;
        } else {
            hi = mid;
        }

        if hi - lo < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    match best {
        Some((raster, scale)) => Ok(FitResult {
            pdf: raster.pdf,
            page_count: raster.page_count,
            scale,
            overflow: false,
        }),
        None => {
            // The midpoints never reach the floor itself; give the
            // minimum scale one final chance before accepting overflow.
            let html = render_once(cv, theme, &base_style.scaled(MIN_SCALE))?;
            let floor = rasterizer.rasterize(&html)?;
            let overflow = floor.page_count > 1;
            if overflow {
                warn!(
                    "content overflows even at minimum scale {}; producing a multi-page PDF",
                    MIN_SCALE
                );
            }
            Ok(FitResult {
                pdf: floor.pdf,
                page_count: floor.page_count,
                scale: MIN_SCALE,
                overflow,
            })
        }
    }
}

fn render_once(cv: &CVData, theme: &Theme, style: &StyleParams) -> Result<String> {
    render::to_html(cv, style, theme)
}
