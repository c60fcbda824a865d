//! Document-wide presentation settings.

use serde::{Deserialize, Serialize};

/// Global style of a template. Exactly one per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStyle {
    /// Body background: a color or a `linear-gradient(...)`.
    pub background: String,
    /// Background of the centered content table.
    pub content_background: String,
    pub font_family: String,
    pub font_size: String,
    pub text_color: String,
    /// Content width in pixels.
    pub width: u32,
}

impl GlobalStyle {
    pub const DEFAULT_BACKGROUND: &'static str = "#f1f5f9";
    pub const DEFAULT_CONTENT_BACKGROUND: &'static str = "#ffffff";
    pub const DEFAULT_FONT_FAMILY: &'static str = "Arial, sans-serif";
    pub const DEFAULT_FONT_SIZE: &'static str = "16px";
    pub const DEFAULT_TEXT_COLOR: &'static str = "#1e293b";
    pub const DEFAULT_WIDTH: u32 = 600;

    /// First family of the font stack, unquoted.
    pub fn primary_font(&self) -> &str {
        primary_font_family(&self.font_family)
    }
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self {
            background: Self::DEFAULT_BACKGROUND.to_string(),
            content_background: Self::DEFAULT_CONTENT_BACKGROUND.to_string(),
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE.to_string(),
            text_color: Self::DEFAULT_TEXT_COLOR.to_string(),
            width: Self::DEFAULT_WIDTH,
        }
    }
}

/// First family of a CSS `font-family` list with surrounding quotes removed.
pub fn primary_font_family(stack: &str) -> &str {
    let first = stack.split(',').next().unwrap_or("").trim();
    first
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| first.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(first)
        .trim()
}
