//! JSON template exporter.

use std::io::{self, Write};

use crate::model::Document;

use super::Exporter;

/// Configuration for JSON export.
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Indent the output.
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Exporter for the `{ "rows": [...], "styles": {...} }` template format.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    config: JsonConfig,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsonConfig) -> Self {
        Self { config }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        if self.config.pretty {
            serde_json::to_writer_pretty(&mut *writer, doc)?;
            writer.write_all(b"\n")
        } else {
            serde_json::to_writer(writer, doc).map_err(io::Error::from)
        }
    }
}
