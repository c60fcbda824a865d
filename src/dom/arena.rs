//! Arena-allocated markup tree.
//!
//! html5ever builds into this through [`super::tree_sink::DomSink`]. Nodes
//! live in one vector and link to each other by index, so the importer can
//! hand out cheap `Copy` node ids while walking the tree.

use html5ever::{LocalName, Namespace, QualName};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for a missing link.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Split `class` attribute, kept for selector matching.
        classes: Vec<String>,
    },
    Text(String),
    Comment(String),
    Doctype(String),
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// A parsed markup document.
pub struct Dom {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Dom {
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let classes = attrs
            .iter()
            .find(|a| a.name.local.as_ref() == "class")
            .map(|a| a.value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        self.alloc(Node::new(NodeData::Element {
            name,
            attrs,
            classes,
        }))
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    pub fn create_doctype(&mut self, name: String) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype(name)))
    }

    /// Link `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);
        self.link(child, parent, last, NodeId::NONE);
    }

    /// Link `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        if let Some((parent, prev)) = self.get(sibling).map(|n| (n.parent, n.prev_sibling)) {
            self.link(new_node, parent, prev, sibling);
        }
    }

    /// Unlink a node from its parent and siblings.
    pub fn detach(&mut self, target: NodeId) {
        let Some((parent, prev, next)) = self
            .get(target)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };
        self.stitch(parent, prev, next);
        if let Some(node) = self.get_mut(target) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Place `node` under `parent` between `prev` and `next`, either of
    /// which may be `NONE` at the ends of the child list.
    fn link(&mut self, node: NodeId, parent: NodeId, prev: NodeId, next: NodeId) {
        if let Some(n) = self.get_mut(node) {
            n.parent = parent;
            n.prev_sibling = prev;
            n.next_sibling = next;
        }
        self.stitch(parent, prev, node);
        self.stitch(parent, node, next);
    }

    /// Make `left` and `right` adjacent children of `parent`, updating the
    /// parent's first and last child when either side is `NONE`.
    fn stitch(&mut self, parent: NodeId, left: NodeId, right: NodeId) {
        match self.get_mut(left) {
            Some(l) => l.next_sibling = right,
            None => {
                if let Some(p) = self.get_mut(parent) {
                    p.first_child = right;
                }
            }
        }
        match self.get_mut(right) {
            Some(r) => r.prev_sibling = left,
            None => {
                if let Some(p) = self.get_mut(parent) {
                    p.last_child = left;
                }
            }
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(NodeId::is_some)
    }

    /// The next (`forward`) or previous sibling of any node type.
    pub fn sibling(&self, id: NodeId, forward: bool) -> Option<NodeId> {
        self.get(id)
            .map(|n| if forward { n.next_sibling } else { n.prev_sibling })
            .filter(NodeId::is_some)
    }

    /// Append text, merging into a trailing text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(existing) = &mut last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            dom: self,
            current: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Element children only.
    pub fn child_elements(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent).filter(|&c| self.is_element(c))
    }

    /// Element children with the given tag name.
    pub fn child_elements_named<'a>(
        &'a self,
        parent: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.child_elements(parent)
            .filter(move |&c| self.has_tag(c, tag))
    }

    /// All nodes below `root` in document order, `root` excluded.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(root).collect();
        stack.reverse();
        Descendants { dom: self, stack }
    }

    /// First element (depth-first, `root` excluded) with the given tag.
    pub fn find_by_tag(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(root).find(|&id| self.has_tag(id, tag))
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Children<'a> {
    dom: &'a Dom,
    current: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.dom.get(id).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(id)
    }
}

pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let before = self.stack.len();
        self.stack.extend(self.dom.children(id));
        self.stack[before..].reverse();
        Some(id)
    }
}

/// Element accessors.
impl Dom {
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    pub fn element_namespace(&self, id: NodeId) -> Option<&Namespace> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.ns),
            _ => None,
        })
    }

    pub fn has_tag(&self, id: NodeId, tag: &str) -> bool {
        self.element_name(id).is_some_and(|n| n.as_ref() == tag)
    }

    pub fn attrs(&self, id: NodeId) -> &[Attribute] {
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { attrs, .. } => Some(attrs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.as_str())
    }

    pub fn element_classes(&self, id: NodeId) -> &[String] {
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Contents of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of every text node below `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|d| self.text(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use html5ever::ns;

    use super::*;

    fn qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    #[test]
    fn test_append_and_siblings() {
        let mut dom = Dom::new();
        let table = dom.create_element(qname("table"), vec![]);
        let a = dom.create_element(qname("tr"), vec![]);
        let b = dom.create_element(qname("tr"), vec![]);
        dom.append(dom.document(), table);
        dom.append(table, a);
        dom.append(table, b);

        assert_eq!(dom.children(table).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(dom.sibling(b, false), Some(a));
        assert_eq!(dom.sibling(b, true), None);
        assert_eq!(dom.parent(a), Some(table));
    }

    #[test]
    fn test_detach_middle_child() {
        let mut dom = Dom::new();
        let td = dom.create_element(qname("td"), vec![]);
        let kids: Vec<_> = (0..3)
            .map(|_| dom.create_element(qname("p"), vec![]))
            .collect();
        for &k in &kids {
            dom.append(td, k);
        }

        dom.detach(kids[1]);
        assert_eq!(dom.children(td).collect::<Vec<_>>(), vec![kids[0], kids[2]]);
        assert_eq!(dom.parent(kids[1]), None);
        assert_eq!(dom.sibling(kids[0], true), Some(kids[2]));
        assert_eq!(dom.sibling(kids[2], false), Some(kids[0]));
    }

    #[test]
    fn test_insert_before_first_child() {
        let mut dom = Dom::new();
        let tr = dom.create_element(qname("tr"), vec![]);
        let second = dom.create_element(qname("td"), vec![]);
        let first = dom.create_element(qname("td"), vec![]);
        dom.append(tr, second);
        dom.insert_before(second, first);

        assert_eq!(dom.children(tr).collect::<Vec<_>>(), vec![first, second]);
        assert_eq!(dom.get(tr).unwrap().first_child, first);
        assert_eq!(dom.get(tr).unwrap().last_child, second);
    }

    #[test]
    fn test_descendants_document_order() {
        let mut dom = Dom::new();
        let outer = dom.create_element(qname("div"), vec![]);
        let first = dom.create_element(qname("p"), vec![]);
        let nested = dom.create_element(qname("span"), vec![]);
        let second = dom.create_element(qname("p"), vec![]);
        dom.append(dom.document(), outer);
        dom.append(outer, first);
        dom.append(first, nested);
        dom.append(outer, second);

        let order: Vec<_> = dom.descendants(outer).collect();
        assert_eq!(order, vec![first, nested, second]);
        assert_eq!(dom.find_by_tag(dom.document(), "span"), Some(nested));
    }

    #[test]
    fn test_text_merging_and_content() {
        let mut dom = Dom::new();
        let a = dom.create_element(qname("a"), vec![]);
        let span = dom.create_element(qname("span"), vec![]);
        dom.append(dom.document(), a);
        dom.append(a, span);
        dom.append_text(span, "Click ");
        dom.append_text(span, "me");

        assert_eq!(dom.children(span).count(), 1);
        assert_eq!(dom.text_content(a), "Click me");
    }

    #[test]
    fn test_classes() {
        let mut dom = Dom::new();
        let table = dom.create_element(
            qname("table"),
            vec![Attribute {
                name: qname("class"),
                value: "container wide".into(),
            }],
        );
        assert_eq!(dom.element_classes(table), ["container", "wide"]);
        assert_eq!(dom.get_attr(table, "class"), Some("container wide"));
    }
}
