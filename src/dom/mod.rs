//! Markup tree used by the importer.
//!
//! html5ever tokenizes and tree-builds into an arena ([`Dom`]); the
//! `selectors` crate matches structural queries against it ([`Query`]);
//! [`Dom::inner_html`] writes fragments back out.

mod arena;
mod element_ref;
mod select;
mod serialize;
mod tree_sink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

pub use arena::{Attribute, Dom, Node, NodeData, NodeId};
pub use element_ref::{ElementRef, MarkupSelectors};
pub use select::Query;
pub use serialize::LineBreaks;
pub use tree_sink::DomSink;

/// Parse a complete markup document.
pub fn parse_html(html: &str) -> Dom {
    parse_document(DomSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}
