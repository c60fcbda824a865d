//! Compiled selector queries over a [`Dom`].
//!
//! Queries follow `Element.querySelector` semantics: candidates are the
//! descendants of the scope node, but the selector is matched against the
//! whole document, so ancestors above the scope still count for
//! descendant combinators.

use cssparser::{Parser, ParserInput};
use selectors::context::{MatchingContext, QuirksMode, SelectorCaches};
use selectors::matching::{
    MatchingForInvalidation, MatchingMode, NeedsSelectorFlags, matches_selector,
};
use selectors::parser::{ParseRelative, Selector, SelectorList};

use super::arena::{Dom, NodeId};
use super::element_ref::{ElementRef, MarkupSelectors};

/// A parsed selector list. The default query matches nothing.
#[derive(Debug, Clone, Default)]
pub struct Query {
    selectors: Vec<Selector<MarkupSelectors>>,
}

impl Query {
    pub fn parse(source: &str) -> Option<Query> {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        match SelectorList::parse(&MarkupSelectors, &mut parser, ParseRelative::No) {
            Ok(list) => Some(Query {
                selectors: list.slice().to_vec(),
            }),
            Err(err) => {
                log::warn!("invalid selector {source:?}: {:?}", err.kind);
                None
            }
        }
    }

    /// Whether the element at `id` matches.
    pub fn matches(&self, dom: &Dom, id: NodeId) -> bool {
        if !dom.is_element(id) {
            return false;
        }
        let element = ElementRef::new(dom, id);
        let mut caches = SelectorCaches::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut caches,
            QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            MatchingForInvalidation::No,
        );
        self.selectors
            .iter()
            .any(|selector| matches_selector(selector, 0, None, &element, &mut context))
    }

    /// First matching descendant of `scope` in document order.
    pub fn first(&self, dom: &Dom, scope: NodeId) -> Option<NodeId> {
        dom.descendants(scope).find(|&id| self.matches(dom, id))
    }

    /// Every matching descendant of `scope` in document order.
    pub fn all(&self, dom: &Dom, scope: NodeId) -> Vec<NodeId> {
        dom.descendants(scope)
            .filter(|&id| self.matches(dom, id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn query(source: &str) -> Query {
        Query::parse(source).unwrap()
    }

    #[test]
    fn test_scope_excludes_self() {
        let dom = parse_html("<table id=outer><tr><td>x</td></tr></table>");
        let outer = query("#outer").first(&dom, dom.document()).unwrap();
        assert!(query("table").first(&dom, outer).is_none());
    }

    #[test]
    fn test_ancestors_outside_scope_count() {
        let dom = parse_html(
            "<table><tr><td><table id=inner><tr><td><table><tr><td>deep</td></tr></table></td></tr></table></td></tr></table>",
        );
        let inner = query("#inner").first(&dom, dom.document()).unwrap();
        // `table table` matches the deepest table although only one table
        // lies inside the scope.
        assert_eq!(query("table table").all(&dom, inner).len(), 1);
    }

    #[test]
    fn test_attribute_selectors() {
        let dom = parse_html(
            r#"<table><tr><td align="left"><img src="https://cdn.test/signature-social-icons/x.png"></td></tr></table>"#,
        );
        let doc = dom.document();
        assert!(query("td[align]").first(&dom, doc).is_some());
        assert!(query(r#"img[src*="signature-social-icons"]"#).first(&dom, doc).is_some());
        assert!(query(r#"img[src*="other"]"#).first(&dom, doc).is_none());
    }

    #[test]
    fn test_child_combinator() {
        let dom = parse_html("<a href=#><table><tr><td>Go</td></tr></table></a><div><table></table></div>");
        let hits = query("a > table").all(&dom, dom.document());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_class_selector() {
        let dom = parse_html(r#"<table class="container"></table>"#);
        assert!(query("table.container").first(&dom, dom.document()).is_some());
    }

    #[test]
    fn test_invalid_selector() {
        assert!(Query::parse("td[").is_none());
        assert!(Query::default().first(&parse_html("<p>"), NodeId(0)).is_none());
    }
}
