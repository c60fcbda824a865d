//! Layout presets and starter elements offered by the editor palette.

use super::element::{Element, ElementKind, SocialLink};
use super::ids::IdGenerator;
use super::layout::{Column, Row};
use super::style::Style;

/// A named column-width arrangement for a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPreset {
    pub name: &'static str,
    pub widths: &'static [&'static str],
}

impl LayoutPreset {
    pub fn columns(&self) -> usize {
        self.widths.len()
    }
}

pub const LAYOUT_PRESETS: &[LayoutPreset] = &[
    LayoutPreset { name: "1 Column", widths: &["100%"] },
    LayoutPreset { name: "2 Columns (50/50)", widths: &["50%", "50%"] },
    LayoutPreset { name: "2 Columns (33/67)", widths: &["33.33%", "66.67%"] },
    LayoutPreset { name: "2 Columns (67/33)", widths: &["66.67%", "33.33%"] },
    LayoutPreset { name: "3 Columns (33/33/33)", widths: &["33.33%", "33.33%", "33.33%"] },
    LayoutPreset { name: "3 Columns (25/25/50)", widths: &["25%", "25%", "50%"] },
    LayoutPreset { name: "3 Columns (50/25/25)", widths: &["50%", "25%", "25%"] },
    LayoutPreset { name: "3 Columns (25/50/25)", widths: &["25%", "50%", "25%"] },
    LayoutPreset { name: "4 Columns (25/25/25/25)", widths: &["25%", "25%", "25%", "25%"] },
    LayoutPreset { name: "4 Columns (40/20/20/20)", widths: &["40%", "20%", "20%", "20%"] },
    LayoutPreset { name: "4 Columns (20/20/20/40)", widths: &["20%", "20%", "20%", "40%"] },
];

impl Row {
    /// A row of empty columns with the preset's widths.
    pub fn from_preset(preset: &LayoutPreset, ids: &mut IdGenerator) -> Row {
        let id = ids.next_id("row");
        let columns = preset
            .widths
            .iter()
            .map(|width| Column::new(ids.next_id("col"), width))
            .collect();
        Row::new(id, columns)
    }
}

impl Element {
    /// The element a freshly dropped palette item starts as.
    pub fn starter(kind: ElementKind, id: impl Into<String>) -> Element {
        match kind {
            ElementKind::Text => Element::text(id, "This is a new text block. Click to edit.")
                .with_style(
                    Style::new()
                        .with("color", "#000000")
                        .with("fontSize", "16px")
                        .with("padding", "10px")
                        .with("textAlign", "left")
                        .with("fontWeight", "normal")
                        .with("fontFamily", "Arial, sans-serif"),
                ),
            ElementKind::Image => {
                Element::image(id, "https://picsum.photos/600/400", "Placeholder Image")
                    .with_style(
                        Style::new()
                            .with("padding", "10px")
                            .with("textAlign", "center")
                            .with("verticalAlign", "middle"),
                    )
            }
            ElementKind::Button => Element::button(id, "Click Me", "#").with_style(
                Style::new()
                    .with("backgroundColor", "#4F46E5")
                    .with("color", "#FFFFFF")
                    .with("padding", "12px 24px")
                    .with("borderRadius", "4px")
                    .with("textAlign", "center"),
            ),
            ElementKind::Divider => Element::divider(id).with_style(
                Style::new()
                    .with("borderTop", "1px solid #cccccc")
                    .with("padding", "10px 0"),
            ),
            ElementKind::Spacer => {
                Element::spacer(id).with_style(Style::new().with("height", "20px"))
            }
            ElementKind::Social => Element::social(
                id,
                ["Facebook", "Twitter", "Instagram", "LinkedIn"]
                    .into_iter()
                    .map(|p| SocialLink::new(p, "#"))
                    .collect(),
            )
            .with_style(Style::new().with("padding", "10px").with("textAlign", "center")),
        }
    }
}
