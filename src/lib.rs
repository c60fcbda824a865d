//! # blockmail
//!
//! Structured email templates and a round-trip codec between them and
//! email-client-safe HTML.
//!
//! ## Features
//!
//! - Block document model: rows of columns of text, image, button, divider,
//!   spacer and social elements, plus one global style
//! - Table-based HTML output with inline styles and legacy Outlook wrappers
//! - Re-import of that HTML back into an equivalent document
//! - Background value codec for solid colors and `linear-gradient(...)`
//! - JSON template files
//!
//! ## Quick Start
//!
//! ```
//! use blockmail::{Column, Document, Element, Row, parse, serialize};
//!
//! let mut doc = Document::new();
//! doc.rows.push(Row::new(
//!     "row-1",
//!     vec![Column::new("col-1", "100%").with_elements(vec![Element::text("text-1", "Hello!")])],
//! ));
//!
//! let html = serialize(&doc);
//! let back = parse(&html);
//! assert_eq!(back.elements().count(), 1);
//! assert_eq!(serialize(&back), html);
//! ```
//!
//! ## Backgrounds
//!
//! ```
//! use blockmail::Background;
//!
//! let bg = Background::decode("linear-gradient(90deg, #fff, #000 80%)").unwrap();
//! assert_eq!(bg.encode(), "linear-gradient(90deg, #fff 0.00%, #000 80.00%)");
//! assert!(Background::decode("not-a-color").is_none());
//! ```

pub mod background;
pub mod catalog;
pub mod dom;
pub mod error;
pub mod export;
pub mod format;
pub mod import;
pub mod model;
pub mod template;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use background::{Background, ColorStop, LinearGradient};
pub use error::{Error, Result};
pub use export::{Exporter, HtmlConfig, HtmlExporter, serialize};
pub use format::Format;
pub use import::{HtmlImporter, ImportConfig, Importer, parse, parse_bytes};
pub use model::{
    Column, Content, Document, Element, ElementKind, GlobalStyle, IdGenerator, Row, SocialLink,
    Style, StyleValue,
};
pub use template::Template;
