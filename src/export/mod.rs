//! Export module for writing documents.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Architecture
//!
//! Exporters follow a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use blockmail::Template;
//! use blockmail::export::{Exporter, HtmlExporter};
//! use std::fs::File;
//!
//! let doc = Template::load("newsletter.json")?.into_document();
//! let mut file = File::create("newsletter.html")?;
//! HtmlExporter::new().export(&doc, &mut file)?;
//! # Ok::<(), blockmail::Error>(())
//! ```

use std::io::{self, Write};

use crate::model::Document;

mod elements;
mod html;
mod json;

pub use elements::{DEFAULT_BUTTON_COLOR, inline_style, render_element};
pub(crate) use elements::image_base_style;
pub use html::{HtmlConfig, HtmlExporter, serialize};
pub use json::{JsonConfig, JsonExporter};

/// Trait for exporting documents to specific formats.
///
/// Configuration lives in the exporter; `export` borrows the document and
/// writes to any destination:
/// - `std::fs::File` for disk output
/// - `Vec<u8>` for in-memory output
/// - `io::stdout().lock()` for piping
pub trait Exporter {
    /// Export the document to the provided writer.
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()>;
}
