//! Structured document model for email templates.
//!
//! This module contains:
//! - Style maps (insertion-ordered, camelCase keys)
//! - Elements and their kind-specific content
//! - Rows, columns and the vertical-alignment rule
//! - Global style defaults
//! - Id generation and editor presets

mod document;
mod element;
mod global;
mod ids;
mod layout;
mod presets;
mod style;

pub use document::Document;
pub use element::{Content, Element, ElementKind, SocialLink};
pub use global::{GlobalStyle, primary_font_family};
pub use ids::IdGenerator;
pub use layout::{Column, DEFAULT_VERTICAL_ALIGN, Row};
pub use presets::{LAYOUT_PRESETS, LayoutPreset};
pub use style::{Style, StyleValue};
