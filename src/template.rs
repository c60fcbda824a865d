//! JSON template files.
//!
//! A template is `{ "rows": [...], "styles": {...} }` with camelCase keys,
//! the same shape the editor saves and loads.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Document, GlobalStyle, Row};

/// A saved template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub rows: Vec<Row>,
    pub styles: GlobalStyle,
}

impl Template {
    /// Parse template JSON.
    ///
    /// The payload must be an object whose `rows` is an array and whose
    /// `styles` is an object; anything else is rejected before element
    /// decoding starts. One bad element rejects the whole template.
    pub fn from_json(json: &str) -> Result<Template> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Template> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    fn from_value(value: Value) -> Result<Template> {
        check_shape(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Template> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_slice(&bytes)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn into_document(self) -> Document {
        Document {
            rows: self.rows,
            styles: self.styles,
        }
    }
}

impl From<Document> for Template {
    fn from(doc: Document) -> Self {
        Template {
            rows: doc.rows,
            styles: doc.styles,
        }
    }
}

impl From<Template> for Document {
    fn from(template: Template) -> Self {
        template.into_document()
    }
}

fn check_shape(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Err(Error::InvalidTemplate("expected a JSON object".into()));
    };
    if !object.get("rows").is_some_and(Value::is_array) {
        return Err(Error::InvalidTemplate("`rows` must be an array".into()));
    }
    if !object.get("styles").is_some_and(Value::is_object) {
        return Err(Error::InvalidTemplate("`styles` must be an object".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Content, ElementKind};

    #[test]
    fn test_shape_rejections() {
        for json in [
            "[]",
            r#"{"styles": {}}"#,
            r#"{"rows": {}, "styles": {}}"#,
            r#"{"rows": []}"#,
            r#"{"rows": [], "styles": null}"#,
            r#"{"rows": [], "styles": "dark"}"#,
        ] {
            let err = Template::from_json(json).unwrap_err();
            assert!(matches!(err, Error::InvalidTemplate(_)), "{json}: {err}");
        }
        assert!(matches!(Template::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_unknown_element_type_rejects_everything() {
        let json = r#"{
            "rows": [{"id": "row-1", "style": {}, "columns": [{"id": "col-1", "style": {}, "elements": [
                {"id": "text-1", "type": "text", "content": {"text": "ok"}, "style": {}},
                {"id": "video-1", "type": "video", "content": {}, "style": {}}
            ]}]}],
            "styles": {}
        }"#;
        assert!(matches!(Template::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_styles_fields_take_defaults() {
        let template = Template::from_json(r#"{"rows": [], "styles": {"width": 720}}"#).unwrap();
        assert_eq!(template.styles.width, 720);
        assert_eq!(template.styles.font_family, GlobalStyle::DEFAULT_FONT_FAMILY);
        assert_eq!(template.styles.background, GlobalStyle::DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_missing_content_fields_are_empty() {
        let json = r#"{
            "rows": [{"id": "row-1", "style": {}, "columns": [{"id": "col-1", "style": {"width": "100%"}, "elements": [
                {"id": "image-1", "type": "image", "content": {"src": "a.png"}, "style": {"padding": "10px"}}
            ]}]}],
            "styles": {}
        }"#;
        let doc = Template::from_json(json).unwrap().into_document();
        let image = doc.find_element("image-1").unwrap();
        assert_eq!(image.kind(), ElementKind::Image);
        assert_eq!(
            image.content,
            Content::Image {
                src: "a.png".into(),
                alt: String::new()
            }
        );
    }
}
