//! HTML exporter.
//!
//! Writes a [`Document`] as a table-based email: every layout box is a
//! presentation table and every style is inline, so the output survives
//! clients that strip `<style>` blocks.

use std::io::{self, Write};

use crate::background::Background;
use crate::catalog::{DEFAULT_ICON_BASE, font_stylesheet_href, needs_font_link};
use crate::model::{Column, Document, GlobalStyle, Row, primary_font_family};
use crate::util::escape_html;

use super::Exporter;
use super::elements::{PRESENTATION, inline_style, render_element};

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Contents of `<title>`.
    pub title: String,
    /// Base URL of the social icon set. The importer recognizes social
    /// blocks by the `signature-social-icons` marker, so custom bases
    /// should keep it in their path.
    pub icon_base: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "Your Email".to_string(),
            icon_base: DEFAULT_ICON_BASE.to_string(),
        }
    }
}

impl HtmlConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon_base(mut self, base: impl Into<String>) -> Self {
        self.icon_base = base.into();
        self
    }
}

/// Exporter for email HTML.
///
/// # Example
///
/// ```
/// use blockmail::Document;
/// use blockmail::export::{Exporter, HtmlConfig, HtmlExporter};
///
/// let exporter = HtmlExporter::with_config(HtmlConfig::default().with_title("Welcome"));
/// let mut out = Vec::new();
/// exporter.export(&Document::new(), &mut out)?;
/// assert!(String::from_utf8_lossy(&out).contains("<title>Welcome</title>"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HtmlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HtmlConfig {
        &self.config
    }

    /// Render the whole document to a string.
    pub fn render(&self, doc: &Document) -> String {
        let styles = &doc.styles;
        let width = styles.width;
        let background = normalized_background(&styles.background, "background");
        let content_background =
            normalized_background(&styles.content_background, "content background");
        let font_links = font_links(doc);
        let body = doc
            .rows
            .iter()
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n");

        let mut head_links = String::new();
        for link in &font_links {
            head_links.push_str("  ");
            head_links.push_str(link);
            head_links.push('\n');
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
{head_links}  <style>
    body {{ margin: 0; padding: 0; }}
    table {{ border-collapse: collapse; }}
    img {{ display: block; }}
    @media screen and (max-width: {width}px) {{
      .container {{ width: 100% !important; }}
      .col {{ display: block !important; width: 100% !important; }}
    }}
  </style>
</head>
<body style="background: {background}; margin: 0; padding: 0;">
  <table border="0" cellpadding="0" cellspacing="0" width="100%" role="presentation" style="background: {background};">
    <tr>
      <td align="center">
        <!--[if (gte mso 9)|(IE)]>
        <table align="center" border="0" cellspacing="0" cellpadding="0" width="{width}">
        <tr>
        <td align="center" valign="top" width="{width}">
        <![endif]-->
        <table border="0" cellpadding="0" cellspacing="0" width="100%" style="max-width: {width}px;" class="container">
          <tbody style="{content_style}">
            {body}
          </tbody>
        </table>
        <!--[if (gte mso 9)|(IE)]>
        </td>
        </tr>
        </table>
        <![endif]-->
      </td>
    </tr>
  </table>
</body>
</html>
"#,
            title = escape_html(&self.config.title),
            background = escape_html(&background),
            content_style = content_style(styles, &content_background),
        )
    }

    fn render_row(&self, row: &Row) -> String {
        let columns = row
            .columns
            .iter()
            .map(|column| self.render_column(column))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            r#"<tr style="{}"><td align="center" style="padding: 0;"><table {PRESENTATION} style="width: 100%;"><tbody><tr>{columns}</tr></tbody></table></td></tr>"#,
            inline_style(&row.style),
        )
    }

    fn render_column(&self, column: &Column) -> String {
        let elements = column
            .elements
            .iter()
            .map(|element| render_element(element, &self.config.icon_base))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            r#"<td style="{}" valign="{}">{elements}</td>"#,
            inline_style(&column.style),
            escape_html(&column.effective_vertical_align()),
        )
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render(doc).as_bytes())
    }
}

/// Render a document with the default configuration.
pub fn serialize(doc: &Document) -> String {
    HtmlExporter::new().render(doc)
}

fn normalized_background(value: &str, what: &str) -> String {
    match Background::decode(value) {
        Some(background) => background.encode(),
        None => {
            log::warn!(
                "invalid {what} {value:?}, using {}",
                Background::DEFAULT_COLOR
            );
            Background::DEFAULT_COLOR.to_string()
        }
    }
}

fn content_style(styles: &GlobalStyle, content_background: &str) -> String {
    escape_html(&format!(
        "background: {content_background}; color: {}; font-family: {}; font-size: {};",
        styles.text_color, styles.font_family, styles.font_size
    ))
}

/// Stylesheet links for catalog fonts, in order of first use.
fn font_links(doc: &Document) -> Vec<String> {
    let mut families: Vec<&str> = vec![doc.styles.primary_font()];
    for element in doc.elements() {
        if let Some(stack) = element.style.get_set("fontFamily").and_then(|v| v.as_str()) {
            let family = primary_font_family(stack);
            if !families.contains(&family) {
                families.push(family);
            }
        }
    }

    families
        .into_iter()
        .filter(|family| needs_font_link(family))
        .map(|family| {
            format!(
                r#"<link href="{}" rel="stylesheet" type="text/css">"#,
                font_stylesheet_href(family)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Style};

    fn one_column(elements: Vec<Element>) -> Document {
        let mut doc = Document::new();
        doc.rows.push(Row::new(
            "row-1",
            vec![Column::new("col-1", "100%").with_elements(elements)],
        ));
        doc
    }

    #[test]
    fn test_empty_document_skeleton() {
        let html = serialize(&Document::new());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Your Email</title>"));
        assert!(html.contains("@media screen and (max-width: 600px)"));
        assert!(html.contains(r#"<body style="background: #f1f5f9; margin: 0; padding: 0;">"#));
        assert!(html.contains(r#"<table align="center" border="0" cellspacing="0" cellpadding="0" width="600">"#));
        assert!(html.contains(r#"style="max-width: 600px;" class="container""#));
        assert!(html.contains(
            r#"<tbody style="background: #ffffff; color: #1e293b; font-family: Arial, sans-serif; font-size: 16px;">"#
        ));
        assert_eq!(html.matches("<!--[if (gte mso 9)|(IE)]>").count(), 2);
        assert!(!html.contains("<tr style="));
        assert!(!html.contains("fonts.googleapis.com"));
    }

    #[test]
    fn test_row_and_column_markup() {
        let mut doc = one_column(vec![Element::spacer("s")]);
        doc.rows[0].style = Style::new().with("backgroundColor", "#eee");
        let html = serialize(&doc);
        assert!(html.contains(concat!(
            r#"<tr style="background-color: #eee"><td align="center" style="padding: 0;">"#,
            r#"<table border="0" cellpadding="0" cellspacing="0" role="presentation" style="width: 100%;">"#,
            r#"<tbody><tr><td style="width: 100%" valign="top"><div style=""></div></td></tr></tbody></table></td></tr>"#,
        )));
    }

    #[test]
    fn test_first_vertical_align_wins() {
        let doc = one_column(vec![
            Element::text("a", "A"),
            Element::text("b", "B").with_style(Style::new().with("verticalAlign", "bottom")),
            Element::text("c", "C").with_style(Style::new().with("verticalAlign", "top")),
        ]);
        let html = serialize(&doc);
        assert!(html.contains(r#"valign="bottom""#));
        assert!(!html.contains("vertical-align"));
    }

    #[test]
    fn test_column_vertical_align_overrides_elements() {
        let mut doc = one_column(vec![
            Element::text("a", "A").with_style(Style::new().with("verticalAlign", "bottom")),
        ]);
        doc.rows[0].columns[0].vertical_align = Some("middle".to_string());
        assert!(serialize(&doc).contains(r#"valign="middle""#));
    }

    #[test]
    fn test_font_links_first_appearance() {
        let mut doc = one_column(vec![
            Element::text("a", "A").with_style(Style::new().with("fontFamily", "'Open Sans', sans-serif")),
            Element::text("b", "B").with_style(Style::new().with("fontFamily", "Georgia, serif")),
            Element::text("c", "C").with_style(Style::new().with("fontFamily", "Lato")),
            Element::text("d", "D").with_style(Style::new().with("fontFamily", "Open Sans")),
        ]);
        doc.styles.font_family = "Roboto, sans-serif".to_string();
        let html = serialize(&doc);

        let roboto = html.find("family=Roboto:wght@400;700&amp;display=swap").unwrap();
        let open_sans = html.find("family=Open+Sans:wght@400;700&amp;display=swap").unwrap();
        let lato = html.find("family=Lato:").unwrap();
        assert!(roboto < open_sans && open_sans < lato);
        assert_eq!(html.matches("<link href=").count(), 3);
        assert!(!html.contains("family=Georgia"));
    }

    #[test]
    fn test_invalid_backgrounds_normalized() {
        let mut doc = Document::new();
        doc.styles.background = "not a color".to_string();
        doc.styles.content_background = "linear-gradient(90deg, red, blue)".to_string();
        let html = serialize(&doc);
        assert!(html.contains(r#"<body style="background: #ffffff;"#));
        assert!(html.contains(
            "<tbody style=\"background: linear-gradient(90deg, red 0.00%, blue 100.00%);"
        ));
    }

    #[test]
    fn test_config_title_and_icon_base() {
        let doc = one_column(vec![Element::social(
            "s",
            vec![crate::model::SocialLink::new("YouTube", "https://yt.test")],
        )]);
        let exporter = HtmlExporter::with_config(
            HtmlConfig::default()
                .with_title("Spring <Sale>")
                .with_icon_base("https://cdn.test/signature-social-icons/v2/"),
        );
        let mut out = Vec::new();
        exporter.export(&doc, &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<title>Spring &lt;Sale&gt;</title>"));
        assert!(html.contains(r#"src="https://cdn.test/signature-social-icons/v2/youtube.png""#));
    }
}
