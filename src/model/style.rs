//! Layout style parameters and scaling.

use serde::{Deserialize, Serialize};

/// All adjustable layout values for rendering.
///
/// Font sizes are in points, margins and gaps in millimetres, line
/// height is a unitless multiplier. Page dimensions are CSS length
/// strings so themes and page sizes can mix units.
///
/// `StyleParams` is an immutable value type: [`StyleParams::scaled`]
/// produces a new instance and never mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    /// Body text size, pt.
    pub base_font_size: f64,
    /// Section heading size, pt.
    pub heading_font_size: f64,
    /// Name (h1) size, pt.
    pub name_font_size: f64,
    /// Contact line size, pt.
    pub contact_font_size: f64,
    /// Top page margin, mm.
    pub margin_top: f64,
    /// Bottom page margin, mm.
    pub margin_bottom: f64,
    /// Left page margin, mm.
    pub margin_left: f64,
    /// Right page margin, mm.
    pub margin_right: f64,
    /// Line height multiplier.
    pub line_height: f64,
    /// Vertical gap between sections, mm.
    pub section_gap: f64,
    /// Vertical gap between entries, mm.
    pub entry_gap: f64,
    /// Vertical gap between detail bullets, mm.
    pub detail_gap: f64,
    /// Page width as a CSS length.
    pub page_width: String,
    /// Page height as a CSS length.
    pub page_height: String,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            base_font_size: 10.0,
            heading_font_size: 14.0,
            name_font_size: 22.0,
            contact_font_size: 9.0,
            margin_top: 15.0,
            margin_bottom: 15.0,
            margin_left: 18.0,
            margin_right: 18.0,
            line_height: 1.35,
            section_gap: 8.0,
            entry_gap: 5.0,
            detail_gap: 2.0,
            page_width: "210mm".to_string(),
            page_height: "297mm".to_string(),
        }
    }
}

impl StyleParams {
    /// Produce a copy scaled by `factor` (expected in `(0, 1]`).
    ///
    /// Font sizes and gaps scale linearly. Margins scale by
    /// `0.5 + 0.5 * factor` and line height by `0.85 + 0.15 * factor`,
    /// so whitespace and leading shrink more slowly than the text they
    /// surround. Page dimensions pass through unchanged.
    pub fn scaled(&self, factor: f64) -> StyleParams {
        let margin_factor = 0.5 + 0.5 * factor;
        let line_height_factor = 0.85 + 0.15 * factor;

        StyleParams {
            base_font_size: self.base_font_size * factor,
            heading_font_size: self.heading_font_size * factor,
            name_font_size: self.name_font_size * factor,
            contact_font_size: self.contact_font_size * factor,
            margin_top: self.margin_top * margin_factor,
            margin_bottom: self.margin_bottom * margin_factor,
            margin_left: self.margin_left * margin_factor,
            margin_right: self.margin_right * margin_factor,
            line_height: self.line_height * line_height_factor,
            section_gap: self.section_gap * factor,
            entry_gap: self.entry_gap * factor,
            detail_gap: self.detail_gap * factor,
            page_width: self.page_width.clone(),
            page_height: self.page_height.clone(),
        }
    }

    /// Produce a copy with the given page dimensions.
    pub fn with_page_dimensions(
        &self,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> StyleParams {
        StyleParams {
            page_width: width.into(),
            page_height: height.into(),
            ..self.clone()
        }
    }
}
