//! Rendering the CV model to output formats.
//!
//! HTML goes through the theme's Tera template; the renderer is a pure
//! function of (model, style, theme, photo) and is deterministic for
//! identical inputs. JSON exposes the parsed model as-is.

mod photo;

pub use photo::EmbeddedPhoto;

use tera::{Context, Tera};

use crate::error::Result;
use crate::model::{CVData, StyleParams};
use crate::theme::Theme;

/// Render a CV to a self-contained HTML document.
///
/// The photo referenced by `cv.photo_path`, when present and readable,
/// is embedded as inline base64 data; otherwise no image tag is
/// emitted at all.
pub fn to_html(cv: &CVData, style: &StyleParams, theme: &Theme) -> Result<String> {
    let photo = photo::load(cv.photo_path.as_deref());

    let mut context = Context::new();
    context.insert("cv", cv);
    context.insert("style", style);
    context.insert("photo", &photo.as_ref().map(|p| p.data.as_str()));
    context.insert("photo_mime", &photo.as_ref().map(|p| p.mime.as_str()));

    Ok(Tera::one_off(&theme.template, &context, false)?)
}

/// Output format for JSON rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Indented, human-readable JSON.
    #[default]
    Pretty,
    /// Single-line JSON.
    Compact,
}

/// Serialize the parsed CV model to JSON.
pub fn to_json(cv: &CVData, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(cv)?,
        JsonFormat::Compact => serde_json::to_string(cv)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CVEntry, CVSection, ContactInfo};

    fn test_theme(template: &str) -> Theme {
        Theme {
            name: "test".to_string(),
            display_name: "Test".to_string(),
            description: String::new(),
            template: template.to_string(),
            default_style: StyleParams::default(),
        }
    }

    #[test]
    fn test_renders_model_fields() {
        let mut cv = CVData::new();
        cv.name = "Jane Doe".to_string();
        cv.contact = ContactInfo::from_items(["jane@test.com"]);
        cv.sections.push(CVSection::structured(
            "Experience",
            vec![CVEntry::titled("Engineer")],
        ));

        let theme = test_theme(
            "{{ cv.name }} / {{ cv.contact.items | join(sep=\", \") }} / \
             {% for s in cv.sections %}{{ s.heading }}:{{ s.entries | length }}{% endfor %}",
        );
        let html = to_html(&cv, &StyleParams::default(), &theme).unwrap();
        assert_eq!(html, "Jane Doe / jane@test.com / Experience:1");
    }

    #[test]
    fn test_deterministic() {
        let mut cv = CVData::new();
        cv.name = "Jane".to_string();
        let theme = test_theme("{{ cv.name }} at {{ style.base_font_size }}pt");
        let first = to_html(&cv, &StyleParams::default(), &theme).unwrap();
        let second = to_html(&cv, &StyleParams::default(), &theme).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_photo_renders_nothing() {
        let cv = CVData::new();
        let theme = test_theme("{% if photo %}<img src=\"data:{{ photo_mime }};base64,{{ photo }}\">{% endif %}");
        let html = to_html(&cv, &StyleParams::default(), &theme).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_json_round_trip() {
        let mut cv = CVData::new();
        cv.name = "Jane Doe".to_string();
        cv.sections.push(CVSection::raw("Skills", "<p>Go</p>"));

        let json = to_json(&cv, JsonFormat::Compact).unwrap();
        let parsed: CVData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.sections[0].raw_html, "<p>Go</p>");

        let pretty = to_json(&cv, JsonFormat::Pretty).unwrap();
        assert!(pretty.contains('\n'));
    }
}
