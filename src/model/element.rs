//! Leaf content blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::style::Style;

/// The closed set of element kinds the editor can place in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Button,
    Divider,
    Spacer,
    Social,
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Divider,
        ElementKind::Spacer,
        ElementKind::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Divider => "divider",
            ElementKind::Spacer => "spacer",
            ElementKind::Social => "social",
        }
    }

    /// Display name used by the editor palette.
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
            ElementKind::Divider => "Divider",
            ElementKind::Spacer => "Spacer",
            ElementKind::Social => "Social",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(platform, href)` pair of a social block.
///
/// The platform is kept as free text: templates may name platforms the icon
/// catalog does not know, and those are skipped at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    #[serde(default)]
    pub href: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            href: href.into(),
        }
    }
}

/// Kind-specific content. Each variant carries exactly the fields that are
/// meaningful for its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text { text: String },
    Image { src: String, alt: String },
    Button { text: String, href: String },
    Divider,
    Spacer,
    Social { links: Vec<SocialLink> },
}

impl Content {
    pub fn kind(&self) -> ElementKind {
        match self {
            Content::Text { .. } => ElementKind::Text,
            Content::Image { .. } => ElementKind::Image,
            Content::Button { .. } => ElementKind::Button,
            Content::Divider => ElementKind::Divider,
            Content::Spacer => ElementKind::Spacer,
            Content::Social { .. } => ElementKind::Social,
        }
    }
}

/// A leaf content unit inside a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub struct Element {
    pub id: String,
    pub content: Content,
    pub style: Style,
}

impl Element {
    pub fn new(id: impl Into<String>, content: Content) -> Self {
        Self {
            id: id.into(),
            content,
            style: Style::new(),
        }
    }

    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, Content::Text { text: text.into() })
    }

    pub fn image(id: impl Into<String>, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(
            id,
            Content::Image {
                src: src.into(),
                alt: alt.into(),
            },
        )
    }

    pub fn button(id: impl Into<String>, text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(
            id,
            Content::Button {
                text: text.into(),
                href: href.into(),
            },
        )
    }

    pub fn divider(id: impl Into<String>) -> Self {
        Self::new(id, Content::Divider)
    }

    pub fn spacer(id: impl Into<String>) -> Self {
        Self::new(id, Content::Spacer)
    }

    pub fn social(id: impl Into<String>, links: Vec<SocialLink>) -> Self {
        Self::new(id, Content::Social { links })
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Element-level vertical alignment, if set.
    pub fn vertical_align(&self) -> Option<String> {
        self.style.get_string("verticalAlign")
    }
}

/// Wire form of an element: `{id, type, content: {...}, style}`.
#[derive(Serialize, Deserialize)]
struct RawElement {
    id: String,
    #[serde(rename = "type")]
    kind: ElementKind,
    #[serde(default)]
    content: RawContent,
    #[serde(default)]
    style: Style,
}

#[derive(Default, Serialize, Deserialize)]
struct RawContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    links: Option<Vec<SocialLink>>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let c = raw.content;
        let content = match raw.kind {
            ElementKind::Text => Content::Text {
                text: c.text.unwrap_or_default(),
            },
            ElementKind::Image => Content::Image {
                src: c.src.unwrap_or_default(),
                alt: c.alt.unwrap_or_default(),
            },
            ElementKind::Button => Content::Button {
                text: c.text.unwrap_or_default(),
                href: c.href.unwrap_or_default(),
            },
            ElementKind::Divider => Content::Divider,
            ElementKind::Spacer => Content::Spacer,
            ElementKind::Social => Content::Social {
                links: c.links.unwrap_or_default(),
            },
        };
        Element {
            id: raw.id,
            content,
            style: raw.style,
        }
    }
}

impl From<Element> for RawElement {
    fn from(element: Element) -> Self {
        let kind = element.kind();
        let content = match element.content {
            Content::Text { text } => RawContent {
                text: Some(text),
                ..Default::default()
            },
            Content::Image { src, alt } => RawContent {
                src: Some(src),
                alt: Some(alt),
                ..Default::default()
            },
            Content::Button { text, href } => RawContent {
                text: Some(text),
                href: Some(href),
                ..Default::default()
            },
            Content::Divider | Content::Spacer => RawContent::default(),
            Content::Social { links } => RawContent {
                links: Some(links),
                ..Default::default()
            },
        };
        RawElement {
            id: element.id,
            kind,
            content,
            style: element.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let element = Element::button("btn-1", "Go", "https://example.com")
            .with_style(Style::new().with("padding", "12px 24px"));
        let json = serde_json::to_value(&element).unwrap();

        assert_eq!(json["type"], "button");
        assert_eq!(json["content"]["text"], "Go");
        assert_eq!(json["content"]["href"], "https://example.com");
        assert!(json["content"].get("src").is_none());
        assert_eq!(json["style"]["padding"], "12px 24px");
    }

    #[test]
    fn test_missing_content_fields_are_empty() {
        let json = r#"{"id":"img-1","type":"image","content":{"src":"a.png"},"style":{}}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(
            element.content,
            Content::Image {
                src: "a.png".into(),
                alt: String::new()
            }
        );
    }

    #[test]
    fn test_divider_without_content() {
        let json = r#"{"id":"d","type":"divider","style":{"borderTop":"1px solid #ccc"}}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.kind(), ElementKind::Divider);
        assert_eq!(serde_json::to_value(&element).unwrap()["content"], serde_json::json!({}));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"id":"m","type":"menu","content":{},"style":{}}"#;
        assert!(serde_json::from_str::<Element>(json).is_err());
    }
}
