//! Rows and columns.

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::style::Style;

/// Column alignment used when neither the column nor any of its elements
/// asks for one.
pub const DEFAULT_VERTICAL_ALIGN: &str = "top";

/// A vertical stack of elements inside a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub style: Style,
    /// Column-level vertical alignment. Templates written before this field
    /// existed keep the value on their elements instead.
    #[serde(
        rename = "verticalAlign",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_align: Option<String>,
}

impl Column {
    pub fn new(id: impl Into<String>, width: &str) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
            style: Style::new().with("width", width),
            vertical_align: None,
        }
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    /// Alignment emitted as the cell's `valign` attribute.
    ///
    /// The column's own value wins. Otherwise the first element carrying a
    /// non-empty `verticalAlign` decides, and `top` is the fallback.
    pub fn effective_vertical_align(&self) -> String {
        if let Some(va) = self.vertical_align.as_deref().filter(|v| !v.is_empty()) {
            return va.to_string();
        }
        self.elements
            .iter()
            .find_map(Element::vertical_align)
            .unwrap_or_else(|| DEFAULT_VERTICAL_ALIGN.to_string())
    }
}

/// A horizontal band of columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub style: Style,
}

impl Row {
    pub fn new(id: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            id: id.into(),
            columns,
            style: Style::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(id: &str, va: Option<&str>) -> Element {
        let mut style = Style::new();
        if let Some(va) = va {
            style.insert("verticalAlign", va);
        }
        Element::spacer(id).with_style(style)
    }

    #[test]
    fn test_first_non_empty_wins() {
        let column = Column::new("c", "100%").with_elements(vec![
            aligned("a", None),
            aligned("b", Some("bottom")),
            aligned("c", Some("top")),
        ]);
        assert_eq!(column.effective_vertical_align(), "bottom");
    }

    #[test]
    fn test_empty_value_is_skipped() {
        let column = Column::new("c", "100%")
            .with_elements(vec![aligned("a", Some("")), aligned("b", Some("middle"))]);
        assert_eq!(column.effective_vertical_align(), "middle");
    }

    #[test]
    fn test_default_top() {
        let column = Column::new("c", "50%");
        assert_eq!(column.effective_vertical_align(), "top");
    }

    #[test]
    fn test_column_value_overrides_elements() {
        let mut column =
            Column::new("c", "100%").with_elements(vec![aligned("a", Some("bottom"))]);
        column.vertical_align = Some("middle".into());
        assert_eq!(column.effective_vertical_align(), "middle");
    }
}
