//! Fragment serialization back to markup.

use super::arena::{Dom, NodeData, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// How `<br>` elements are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreaks {
    /// As `<br>` tags.
    Markup,
    /// As `\n`.
    Newline,
}

impl Dom {
    /// Markup of the children of `id`, as `Element.innerHTML` would give.
    pub fn inner_html(&self, id: NodeId, breaks: LineBreaks) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_node(child, breaks, false, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, breaks: LineBreaks, raw_text: bool, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(text) if raw_text => out.push_str(text),
            NodeData::Text(text) => escape_text(text, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.as_ref();
                if tag == "br" && breaks == LineBreaks::Newline {
                    out.push('\n');
                    return;
                }

                out.push('<');
                out.push_str(tag);
                for attr in attrs {
                    out.push(' ');
                    out.push_str(attr.name.local.as_ref());
                    out.push_str("=\"");
                    escape_attr(&attr.value, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&tag);
                for child in self.children(id) {
                    self.write_node(child, breaks, raw, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            NodeData::Document | NodeData::Doctype(_) => {}
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
