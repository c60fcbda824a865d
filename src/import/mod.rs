//! Importers for reading documents back from markup or JSON.
//!
//! The HTML importer is best effort and never fails: markup it does not
//! recognize is dropped and a document without a content container reads
//! as an empty document. The JSON importer is all-or-nothing.
//!
//! # Example
//!
//! ```
//! use blockmail::{parse, serialize, Document};
//!
//! let html = serialize(&Document::new());
//! assert_eq!(parse(&html), Document::new());
//! ```

mod declarations;
mod html;

pub use declarations::Declarations;

use crate::dom::parse_html;
use crate::error::Result;
use crate::model::{Document, GlobalStyle};
use crate::template::Template;
use crate::util::{decode_text, sniff_charset};

/// Interface for format-specific readers.
pub trait Importer {
    /// Read a document from raw bytes.
    fn import(&self, bytes: &[u8]) -> Result<Document>;
}

/// Configuration for HTML import.
#[derive(Debug, Clone, Default)]
pub struct ImportConfig {
    /// Global style used for every value the markup does not supply.
    pub defaults: GlobalStyle,
}

impl ImportConfig {
    /// The stock fallback global style.
    pub fn defaults() -> GlobalStyle {
        GlobalStyle::default()
    }

    pub fn with_defaults(mut self, defaults: GlobalStyle) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Importer for markup written by [`crate::export::HtmlExporter`].
#[derive(Debug, Clone, Default)]
pub struct HtmlImporter {
    config: ImportConfig,
}

impl HtmlImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Rebuild a document from markup text.
    pub fn read_str(&self, html: &str) -> Document {
        let dom = parse_html(html);
        html::Reader::new(&dom).read(&self.config.defaults)
    }

    /// Rebuild a document from markup bytes of unknown encoding.
    pub fn read_bytes(&self, bytes: &[u8]) -> Document {
        let hint = sniff_charset(bytes);
        let text = decode_text(bytes, hint.as_deref());
        self.read_str(&text)
    }
}

impl Importer for HtmlImporter {
    fn import(&self, bytes: &[u8]) -> Result<Document> {
        Ok(self.read_bytes(bytes))
    }
}

/// Importer for `{ "rows": [...], "styles": {...} }` templates.
#[derive(Debug, Clone, Default)]
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }
}

impl Importer for JsonImporter {
    fn import(&self, bytes: &[u8]) -> Result<Document> {
        Ok(Template::from_slice(bytes)?.into_document())
    }
}

/// Parse markup with the default configuration.
pub fn parse(html: &str) -> Document {
    HtmlImporter::new().read_str(html)
}

/// Parse markup bytes: UTF-8 first, then the declared `<meta charset>`,
/// then Windows-1252.
pub fn parse_bytes(bytes: &[u8]) -> Document {
    HtmlImporter::new().read_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_container_gives_defaults() {
        let defaults = GlobalStyle {
            width: 480,
            ..GlobalStyle::default()
        };
        let importer =
            HtmlImporter::with_config(ImportConfig::default().with_defaults(defaults.clone()));
        let doc = importer.read_str("<html><body><p>Hello</p></body></html>");
        assert!(doc.rows.is_empty());
        assert_eq!(doc.styles, defaults);
    }

    #[test]
    fn test_importers_share_trait() {
        fn read(importer: &impl Importer, bytes: &[u8]) -> Document {
            importer.import(bytes).unwrap()
        }
        let from_json = read(&JsonImporter::new(), br#"{"rows": [], "styles": {}}"#);
        let from_html = read(&HtmlImporter::new(), b"<p>nothing here</p>");
        assert_eq!(from_json, from_html);
    }

    #[test]
    fn test_json_importer_rejects_bad_shape() {
        assert!(JsonImporter::new().import(br#"{"rows": {}}"#).is_err());
    }
}
