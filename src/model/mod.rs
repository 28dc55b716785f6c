//! CV model types.
//!
//! This module defines the structured result of parsing a Markdown CV
//! and the layout parameters that drive rendering. Both halves are pure
//! data: the CV model is built once per input document and read-only
//! afterwards (except for photo attachment), and style values are
//! immutable — scaling always produces a fresh instance.

mod cv;
mod style;

pub use cv::{CVData, CVEntry, CVSection, ContactInfo};
pub use style::StyleParams;
