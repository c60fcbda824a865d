//! Per-element markup.

use crate::catalog::SocialPlatform;
use crate::model::{Content, Element, Style};
use crate::util::{camel_to_kebab, escape_html};

/// Attributes shared by every presentation table.
pub(crate) const PRESENTATION: &str =
    r#"border="0" cellpadding="0" cellspacing="0" role="presentation""#;

/// Style keys consumed by the column cell instead of the element.
const COLUMN_KEYS: &[&str] = &["verticalAlign"];

/// Fallback color of button labels.
pub const DEFAULT_BUTTON_COLOR: &str = "#FFFFFF";

/// Base declarations every image carries before its own styles.
pub(crate) fn image_base_style() -> Style {
    Style::new()
        .with("maxWidth", "100%")
        .with("height", "auto")
        .with("display", "block")
}

/// `key: value` pairs in map order, kebab-cased and joined by `; `.
///
/// The result is escaped for a double-quoted attribute.
pub fn inline_style(style: &Style) -> String {
    let css = style
        .iter()
        .map(|(key, value)| format!("{}: {}", camel_to_kebab(key), value))
        .collect::<Vec<_>>()
        .join("; ");
    escape_html(&css)
}

fn align_of(style: &Style) -> String {
    style
        .get_string("textAlign")
        .unwrap_or_else(|| "center".to_string())
}

fn or_hash(href: &str) -> &str {
    if href.is_empty() { "#" } else { href }
}

/// Markup for one element. `icon_base` locates the social icon set.
pub fn render_element(element: &Element, icon_base: &str) -> String {
    let style = element.style.without(COLUMN_KEYS);

    match &element.content {
        Content::Text { text } => {
            let text = text
                .replace("\r\n", "<br>")
                .replace(['\r', '\n'], "<br>");
            format!(r#"<p style="{}">{text}</p>"#, inline_style(&style))
        }
        Content::Image { src, alt } => {
            let padding = style
                .get_string("padding")
                .map(|p| format!(r#" style="{}""#, inline_style(&Style::new().with("padding", p))))
                .unwrap_or_default();
            let image_style = image_base_style().merged(&style.without(&["textAlign", "padding"]));
            format!(
                r#"<table {PRESENTATION} width="100%"><tr><td align="{}"{padding}><img src="{}" alt="{}" style="{}" /></td></tr></table>"#,
                escape_html(&align_of(&style)),
                escape_html(src),
                escape_html(alt),
                inline_style(&image_style),
            )
        }
        Content::Button { text, href } => {
            let cell_style = style.without(&["textAlign"]);
            let color = cell_style
                .get_string("color")
                .unwrap_or_else(|| DEFAULT_BUTTON_COLOR.to_string());
            format!(
                concat!(
                    r#"<table {p} width="100%"><tr><td align="{align}">"#,
                    r#"<a href="{href}" target="_blank" style="text-decoration: none;">"#,
                    r#"<table {p}><tr><td align="center" style="{cell}">"#,
                    r#"<span style="color: {color}; text-decoration: none;">{text}</span>"#,
                    r#"</td></tr></table></a></td></tr></table>"#,
                ),
                p = PRESENTATION,
                align = escape_html(&align_of(&style)),
                href = escape_html(or_hash(href)),
                cell = inline_style(&cell_style),
                color = escape_html(&color),
                text = escape_html(text),
            )
        }
        Content::Divider | Content::Spacer => {
            format!(r#"<div style="{}"></div>"#, inline_style(&style))
        }
        Content::Social { links } => {
            let cells: String = links
                .iter()
                .filter_map(|link| {
                    let Some(platform) = SocialPlatform::from_name(&link.platform) else {
                        log::debug!("skipping social link for unknown platform {:?}", link.platform);
                        return None;
                    };
                    Some(format!(
                        concat!(
                            r#"<td style="padding: 0 5px;">"#,
                            r#"<a href="{href}" target="_blank" style="text-decoration: none;">"#,
                            r#"<img src="{src}" width="32" height="32" alt="{alt}" style="display: block; border: 0;" />"#,
                            r#"</a></td>"#,
                        ),
                        href = escape_html(or_hash(&link.href)),
                        src = escape_html(&platform.icon_url(icon_base)),
                        alt = platform.name(),
                    ))
                })
                .collect();
            format!(
                r#"<table {p} width="100%"><tr><td align="{align}" style="{container}"><table {p}><tbody><tr>{cells}</tr></tbody></table></td></tr></table>"#,
                p = PRESENTATION,
                align = escape_html(&align_of(&style)),
                container = inline_style(&style.without(&["textAlign"])),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_ICON_BASE;
    use crate::model::SocialLink;

    fn render(element: &Element) -> String {
        render_element(element, DEFAULT_ICON_BASE)
    }

    #[test]
    fn test_inline_style() {
        let style = Style::new()
            .with("fontSize", "16px")
            .with("fontFamily", "'Open Sans', sans-serif")
            .with("zIndex", 2);
        assert_eq!(
            inline_style(&style),
            "font-size: 16px; font-family: &#39;Open Sans&#39;, sans-serif; z-index: 2"
        );
    }

    #[test]
    fn test_text_line_breaks_and_no_valign() {
        let element = Element::text("t", "Hi <b>there</b>\nsecond\r\nthird\rfourth").with_style(
            Style::new()
                .with("color", "#333")
                .with("verticalAlign", "middle"),
        );
        assert_eq!(
            render(&element),
            r#"<p style="color: #333">Hi <b>there</b><br>second<br>third<br>fourth</p>"#
        );
    }

    #[test]
    fn test_image() {
        let element = Element::image("i", "https://img.test/a.png", "A \"quoted\" alt").with_style(
            Style::new()
                .with("padding", "10px")
                .with("textAlign", "left")
                .with("height", "120px")
                .with("borderRadius", "4px"),
        );
        assert_eq!(
            render(&element),
            concat!(
                r#"<table border="0" cellpadding="0" cellspacing="0" role="presentation" width="100%"><tr>"#,
                r#"<td align="left" style="padding: 10px">"#,
                r#"<img src="https://img.test/a.png" alt="A &quot;quoted&quot; alt" "#,
                r#"style="max-width: 100%; height: 120px; display: block; border-radius: 4px" />"#,
                r#"</td></tr></table>"#
            )
        );
    }

    #[test]
    fn test_image_without_padding() {
        let html = render(&Element::image("i", "a.png", ""));
        assert!(html.contains(r#"<td align="center"><img"#), "{html}");
    }

    #[test]
    fn test_button() {
        let element = Element::button("b", "Save & go", "").with_style(
            Style::new()
                .with("backgroundColor", "#4F46E5")
                .with("padding", "12px 24px")
                .with("textAlign", "right"),
        );
        let html = render(&element);
        assert!(html.contains(r##"<td align="right"><a href="#" target="_blank""##), "{html}");
        assert!(html.contains(r#"<td align="center" style="background-color: #4F46E5; padding: 12px 24px">"#));
        assert!(html.contains(r#"<span style="color: #FFFFFF; text-decoration: none;">Save &amp; go</span>"#));
    }

    #[test]
    fn test_divider_and_spacer() {
        let divider = Element::divider("d").with_style(Style::new().with("borderTop", "1px solid #ccc"));
        assert_eq!(render(&divider), r#"<div style="border-top: 1px solid #ccc"></div>"#);
        assert_eq!(render(&Element::spacer("s")), r#"<div style=""></div>"#);
    }

    #[test]
    fn test_social_skips_unknown_platforms() {
        let element = Element::social(
            "s",
            vec![
                SocialLink::new("Facebook", "https://fb.test/me"),
                SocialLink::new("Mastodon", "https://masto.test/@me"),
                SocialLink::new("Email", ""),
            ],
        )
        .with_style(Style::new().with("padding", "10px").with("textAlign", "left"));
        let html = render(&element);

        assert_eq!(html.matches(r#"<td style="padding: 0 5px;">"#).count(), 2);
        assert!(html.contains(r#"<td align="left" style="padding: 10px">"#));
        assert!(html.contains(r#"alt="Facebook""#));
        assert!(!html.contains("Mastodon"));
        assert!(html.contains(r##"<a href="#" target="_blank" style="text-decoration: none;"><img src="https://static.example.com/signature-social-icons/email.png""##));
    }
}
