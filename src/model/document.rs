//! The template root.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::global::GlobalStyle;
use super::layout::{Column, Row};

/// A complete email template: ordered rows plus one global style.
///
/// Documents are plain values. Editing produces a new `Document`; the
/// serializer and parser only ever borrow or return them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub rows: Vec<Row>,
    pub styles: GlobalStyle,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(styles: GlobalStyle) -> Self {
        Self {
            rows: Vec::new(),
            styles,
        }
    }

    /// True when the document has no rows. An import that produces this is
    /// worth a warning to the user.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.rows.iter().flat_map(|r| r.columns.iter())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.columns().flat_map(|c| c.elements.iter())
    }

    /// Every id in the document: rows, columns and elements.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flat_map(|row| {
            std::iter::once(row.id.as_str()).chain(row.columns.iter().flat_map(|col| {
                std::iter::once(col.id.as_str()).chain(col.elements.iter().map(|e| e.id.as_str()))
            }))
        })
    }

    /// Ids that occur more than once, in order of their second occurrence.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for id in self.ids() {
            if !seen.insert(id) && !dupes.iter().any(|d| d == id) {
                dupes.push(id.to_string());
            }
        }
        dupes
    }

    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.elements().find(|e| e.id == id)
    }

    /// Move per-element vertical alignment onto columns.
    ///
    /// Each column takes its effective alignment (first element wins) as its
    /// own value, and `verticalAlign` is removed from its elements. Columns
    /// whose elements carry no value stay unset. Rendering is unchanged by
    /// the migration.
    pub fn migrate_vertical_align(&mut self) {
        for column in self.rows.iter_mut().flat_map(|r| r.columns.iter_mut()) {
            let has_element_value = column.elements.iter().any(|e| e.vertical_align().is_some());
            if column.vertical_align.is_none() && has_element_value {
                column.vertical_align = Some(column.effective_vertical_align());
            }
            for element in &mut column.elements {
                element.style.remove("verticalAlign");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Style;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.rows.push(Row::new(
            "row-1",
            vec![
                Column::new("col-1", "50%").with_elements(vec![
                    Element::text("text-1", "hi"),
                    Element::spacer("spacer-1")
                        .with_style(Style::new().with("verticalAlign", "middle")),
                ]),
                Column::new("col-2", "50%").with_elements(vec![Element::divider("divider-1")]),
            ],
        ));
        doc
    }

    #[test]
    fn test_ids_cover_all_levels() {
        let ids: Vec<_> = sample().ids().map(str::to_string).collect();
        assert_eq!(
            ids,
            vec!["row-1", "col-1", "text-1", "spacer-1", "col-2", "divider-1"]
        );
    }

    #[test]
    fn test_duplicate_ids() {
        let mut doc = sample();
        assert!(doc.duplicate_ids().is_empty());

        doc.rows[0].columns[1].elements.push(Element::text("text-1", "again"));
        assert_eq!(doc.duplicate_ids(), vec!["text-1".to_string()]);
    }

    #[test]
    fn test_migrate_vertical_align() {
        let mut doc = sample();
        doc.migrate_vertical_align();

        let columns: Vec<_> = doc.columns().collect();
        assert_eq!(columns[0].vertical_align.as_deref(), Some("middle"));
        assert_eq!(columns[1].vertical_align, None);
        assert!(doc.elements().all(|e| e.vertical_align().is_none()));
        assert_eq!(columns[0].effective_vertical_align(), "middle");
        assert_eq!(columns[1].effective_vertical_align(), "top");
    }
}
