//! Theme registry: named bundles of an HTML template and default style.
//!
//! The default themes ship inside the binary via `include_dir`; a
//! user-provided theme directory of the same shape
//! (`<dir>/<name>/template.html` plus optional `theme.toml`) can be
//! overlaid at startup and shadows embedded themes with the same name.
//! Core render/fit code always takes a resolved [`Theme`] value —
//! name lookup happens here and nowhere else.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use include_dir::{include_dir, Dir};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::StyleParams;

static EMBEDDED_THEMES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/themes");

/// Name of the theme used when none is requested.
pub const DEFAULT_THEME: &str = "professional";

/// A loaded theme: presentation template plus its default style.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Registry key.
    pub name: String,
    /// Human-readable name for listings.
    pub display_name: String,
    /// One-line description for listings.
    pub description: String,
    /// Tera template source for the HTML document.
    pub template: String,
    /// Style the theme was designed around.
    pub default_style: StyleParams,
}

/// `theme.toml` contents.
#[derive(Debug, Default, Deserialize)]
struct ThemeConfig {
    #[serde(default)]
    meta: ThemeMeta,
    #[serde(default)]
    style: StyleParams,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeMeta {
    display_name: Option<String>,
    description: Option<String>,
}

/// Registry mapping theme names to loaded [`Theme`] values.
///
/// Read-only after construction.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Build a registry from the embedded default themes.
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        for dir in EMBEDDED_THEMES.dirs() {
            let Some(name) = dir.path().file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(template) = dir
                .get_file(dir.path().join("template.html"))
                .and_then(|f| f.contents_utf8())
            else {
                continue;
            };
            let config_text = dir
                .get_file(dir.path().join("theme.toml"))
                .and_then(|f| f.contents_utf8());
            // Embedded themes are validated by the test suite; a bad
            // bundle here is a packaging mistake, not a user error.
            if let Ok(theme) = build_theme(name, template.to_string(), config_text) {
                themes.insert(name.to_string(), theme);
            }
        }
        Self { themes }
    }

    /// Build the embedded registry, then overlay themes found under
    /// `dir`. Disk themes shadow embedded themes of the same name.
    pub fn with_theme_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_dir(dir.as_ref())?;
        Ok(registry)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let template_path = path.join("template.html");
            if !template_path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let template = fs::read_to_string(&template_path)?;
            let config_path = path.join("theme.toml");
            let config_text = if config_path.is_file() {
                Some(fs::read_to_string(&config_path)?)
            } else {
                None
            };
            let theme = build_theme(name, template, config_text.as_deref())?;
            self.themes.insert(name.to_string(), theme);
        }
        Ok(())
    }

    /// Resolve a theme by name.
    pub fn get(&self, name: &str) -> Result<&Theme> {
        self.themes.get(name).ok_or_else(|| Error::ThemeNotFound {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Registered theme names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Iterate over registered themes in name order.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn build_theme(name: &str, template: String, config_text: Option<&str>) -> Result<Theme> {
    let config: ThemeConfig = match config_text {
        Some(text) => toml::from_str(text).map_err(|e| Error::InvalidTheme {
            name: name.to_string(),
            reason: e.to_string(),
        })?,
        None => ThemeConfig::default(),
    };

    Ok(Theme {
        name: name.to_string(),
        display_name: config.meta.display_name.unwrap_or_else(|| title_case(name)),
        description: config.meta.description.unwrap_or_default(),
        template,
        default_style: config.style,
    })
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
