//! Markup reader.
//!
//! Walks markup written by [`crate::export::HtmlExporter`] and rebuilds the
//! document. Only that exporter's shapes are understood: the container
//! table, one row table per row, one cell per column, and one block per
//! element. Anything else is dropped.

use crate::background::Background;
use crate::catalog::{SOCIAL_ICON_MARKER, SocialPlatform};
use crate::dom::{Dom, LineBreaks, NodeId, Query};
use crate::export::image_base_style;
use crate::model::{
    Column, Content, DEFAULT_VERTICAL_ALIGN, Document, Element, GlobalStyle, IdGenerator, Row,
    SocialLink, Style,
};

use super::declarations::Declarations;

/// Text block properties that survive import.
const TEXT_PROPERTIES: &[&str] = &[
    "color",
    "font-size",
    "padding",
    "text-align",
    "font-weight",
    "font-family",
];

const DEFAULT_ALIGN: &str = "center";
const DEFAULT_HREF: &str = "#";
const DEFAULT_COLUMN_WIDTH: &str = "100%";

/// Structural queries, compiled once per import.
struct Queries {
    container: Query,
    table: Query,
    image: Query,
    social_icon: Query,
    anchor: Query,
    aligned_cell: Query,
    cell: Query,
    button_table: Query,
    span: Query,
}

impl Queries {
    fn new() -> Self {
        let compile = |source: &str| Query::parse(source).unwrap_or_default();
        Self {
            container: compile("table.container"),
            table: compile("table"),
            image: compile("img"),
            social_icon: compile(&format!(r#"img[src*="{SOCIAL_ICON_MARKER}"]"#)),
            anchor: compile("a"),
            aligned_cell: compile("td[align]"),
            cell: compile("td"),
            button_table: compile("a > table"),
            span: compile("span"),
        }
    }
}

pub(crate) struct Reader<'a> {
    dom: &'a Dom,
    queries: Queries,
    ids: IdGenerator,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(dom: &'a Dom) -> Self {
        Self {
            dom,
            queries: Queries::new(),
            ids: IdGenerator::new(),
        }
    }

    pub(crate) fn read(mut self, defaults: &GlobalStyle) -> Document {
        let dom = self.dom;
        let Some(container) = self.queries.container.first(dom, dom.document()) else {
            log::debug!("no content container table, returning an empty document");
            return Document::with_styles(defaults.clone());
        };

        let styles = self.read_global_style(container, defaults);
        let rows = dom
            .child_elements_named(container, "tbody")
            .flat_map(|tbody| dom.child_elements_named(tbody, "tr"))
            .collect::<Vec<_>>()
            .into_iter()
            .filter_map(|tr| self.read_row(tr))
            .collect();

        Document { rows, styles }
    }

    fn style_attr(&self, id: NodeId) -> Declarations {
        Declarations::parse(self.dom.get_attr(id, "style").unwrap_or(""))
    }

    fn read_global_style(&self, container: NodeId, defaults: &GlobalStyle) -> GlobalStyle {
        let dom = self.dom;
        let mut styles = defaults.clone();

        if let Some(body) = dom.find_by_tag(dom.document(), "body")
            && let Some(background) = background_of(&self.style_attr(body))
        {
            styles.background = background;
        }

        if let Some(width) = self
            .style_attr(container)
            .get("max-width")
            .and_then(leading_integer)
        {
            styles.width = width;
        }

        if let Some(tbody) = dom.child_elements_named(container, "tbody").next() {
            let decls = self.style_attr(tbody);
            if let Some(background) = background_of(&decls) {
                styles.content_background = background;
            }
            if let Some(color) = decls.get("color") {
                styles.text_color = color.to_string();
            }
            if let Some(family) = decls.get("font-family") {
                styles.font_family = family.to_string();
            }
            if let Some(size) = decls.get("font-size") {
                styles.font_size = size.to_string();
            }
        }

        styles
    }

    fn read_row(&mut self, tr: NodeId) -> Option<Row> {
        let dom = self.dom;
        let id = self.ids.next_id("row");
        let cells: Vec<NodeId> = dom
            .child_elements_named(tr, "td")
            .flat_map(|td| dom.child_elements_named(td, "table"))
            .flat_map(|table| dom.child_elements_named(table, "tbody"))
            .flat_map(|tbody| dom.child_elements_named(tbody, "tr"))
            .flat_map(|inner| dom.child_elements_named(inner, "td"))
            .collect();

        if cells.is_empty() {
            log::debug!("dropping row without columns");
            return None;
        }

        let columns = cells.into_iter().map(|td| self.read_column(td)).collect();
        Some(Row {
            id,
            columns,
            style: self.style_attr(tr).to_style(),
        })
    }

    fn read_column(&mut self, td: NodeId) -> Column {
        let dom = self.dom;
        let id = self.ids.next_id("col");
        let mut style = self.style_attr(td).to_style();
        if !style.contains_key("width") {
            style.insert("width", DEFAULT_COLUMN_WIDTH);
        }
        let valign = dom
            .get_attr(td, "valign")
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VERTICAL_ALIGN)
            .to_string();

        let children: Vec<NodeId> = dom.child_elements(td).collect();
        let elements: Vec<Element> = children
            .into_iter()
            .filter_map(|child| self.read_element(child))
            .map(|mut element| {
                element.style.insert("verticalAlign", valign.as_str());
                element
            })
            .collect();

        // With no element left to carry it, the alignment moves to the column.
        let vertical_align =
            (elements.is_empty() && valign != DEFAULT_VERTICAL_ALIGN).then_some(valign);

        Column {
            id,
            elements,
            style,
            vertical_align,
        }
    }

    /// Classify one block. The order of the checks matters: a social block
    /// is also a table with images.
    fn read_element(&mut self, node: NodeId) -> Option<Element> {
        let dom = self.dom;
        let tag: &str = dom.element_name(node)?;

        let (content, style) = match tag {
            "table" => self
                .read_social(node)
                .or_else(|| self.read_image(node))
                .or_else(|| self.read_button(node))?,
            "p" => self.read_text(node),
            "div" => self.read_rule(node)?,
            _ => {
                log::debug!("dropping unrecognized <{tag}> block");
                return None;
            }
        };

        let id = self.ids.next_id(content.kind().as_str());
        Some(Element::new(id, content).with_style(style))
    }

    fn alignment(&self, node: NodeId) -> String {
        self.queries
            .aligned_cell
            .first(self.dom, node)
            .and_then(|td| self.dom.get_attr(td, "align"))
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_ALIGN)
            .to_string()
    }

    fn read_social(&self, node: NodeId) -> Option<(Content, Style)> {
        let dom = self.dom;
        let q = &self.queries;
        let inner = q.table.first(dom, node)?;
        q.social_icon.first(dom, inner)?;

        let links: Vec<SocialLink> = q
            .anchor
            .all(dom, inner)
            .into_iter()
            .filter_map(|a| {
                let alt = q.image.first(dom, a).and_then(|img| dom.get_attr(img, "alt"))?;
                let platform = SocialPlatform::from_name(alt)?;
                let href = dom.get_attr(a, "href").unwrap_or(DEFAULT_HREF);
                Some(SocialLink::new(platform.name(), href))
            })
            .collect();
        if links.is_empty() {
            return None;
        }

        let mut style = q
            .cell
            .first(dom, node)
            .map(|td| self.style_attr(td).to_style())
            .unwrap_or_default();
        style.insert("textAlign", self.alignment(node));
        Some((Content::Social { links }, style))
    }

    fn read_image(&self, node: NodeId) -> Option<(Content, Style)> {
        let dom = self.dom;
        let img = self.queries.image.first(dom, node)?;
        let src = dom.get_attr(img, "src").unwrap_or("").to_string();
        let alt = dom.get_attr(img, "alt").unwrap_or("").to_string();

        let mut style = Style::new();
        if let Some(td) = self.queries.aligned_cell.first(dom, node)
            && let Some(padding) = self.style_attr(td).get("padding")
        {
            style.insert("padding", padding);
        }
        let base = image_base_style();
        for (key, value) in self.style_attr(img).to_style().iter() {
            let is_base = base.get(key).is_some_and(|b| b == value);
            if !is_base {
                style.insert(key, value.clone());
            }
        }
        style.insert("textAlign", self.alignment(node));
        Some((Content::Image { src, alt }, style))
    }

    fn read_button(&self, node: NodeId) -> Option<(Content, Style)> {
        let dom = self.dom;
        let q = &self.queries;
        let button = q.button_table.first(dom, node)?;
        let anchor = dom.parent(button)?;

        let href = dom.get_attr(anchor, "href").unwrap_or(DEFAULT_HREF).to_string();
        let text = dom.text_content(anchor);

        let mut style = q
            .cell
            .first(dom, button)
            .map(|td| self.style_attr(td).to_style())
            .unwrap_or_default();
        if !style.contains_key("color")
            && let Some(span) = q.span.first(dom, button)
            && let Some(color) = self.style_attr(span).get("color")
            && !color.eq_ignore_ascii_case(crate::export::DEFAULT_BUTTON_COLOR)
        {
            style.insert("color", color);
        }
        style.insert("textAlign", self.alignment(node));
        Some((Content::Button { text, href }, style))
    }

    fn read_text(&self, node: NodeId) -> (Content, Style) {
        let text = self.dom.inner_html(node, LineBreaks::Newline);
        let style = self.style_attr(node).to_style_filtered(TEXT_PROPERTIES);
        (Content::Text { text }, style)
    }

    fn read_rule(&self, node: NodeId) -> Option<(Content, Style)> {
        let decls = self.style_attr(node);
        let content = if decls.contains("border-top") {
            Content::Divider
        } else if decls.contains("height") {
            Content::Spacer
        } else {
            log::debug!("dropping <div> without border-top or height");
            return None;
        };
        Some((content, decls.to_style()))
    }
}

/// A background declaration that passes the background codec.
fn background_of(decls: &Declarations) -> Option<String> {
    let value = decls.get("background").or_else(|| decls.get("background-color"))?;
    match Background::decode(value) {
        Some(_) => Some(value.to_string()),
        None => {
            log::debug!("ignoring invalid background {value:?}");
            None
        }
    }
}

/// `600px` -> 600.
fn leading_integer(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
