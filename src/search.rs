use crate::access::NodeEdge;
use crate::htmldata::{Html, Node};
use crate::value::{Value, COMMENT_NAME, TEXT_NAME};

/// ## Search
///
/// Searches look at the descendants of a node, never at the node itself.
/// For every node, the subtrees of its children are searched first, in child
/// order, and only then the children themselves.
impl Html {
    /// Find the first descendant element whose attribute `name` equals
    /// `value`.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let root = html
    ///     .parse(r#"<div><p><span data-x="1">deep</span></p><b data-x="1">shallow</b></div>"#)
    ///     .unwrap()
    ///     .nodes()[0];
    /// let found = html.find_by_attribute(root, "data-x", "1").unwrap();
    /// // the subtree of the first child is searched before the children themselves
    /// assert_eq!(html.node_name(found), "span");
    /// ```
    pub fn find_by_attribute(&self, node: Node, name: &str, value: &str) -> Option<Node> {
        self.closed_nodes(node).find_map(|parent| {
            self.children(parent)
                .find(|child| self.attribute(*child, name) == Some(value))
        })
    }

    /// Find the first descendant element with the given `id`.
    pub fn find_by_id(&self, node: Node, id: &str) -> Option<Node> {
        self.find_by_attribute(node, "id", id)
    }

    /// Collect all descendants with the given node name.
    ///
    /// Names compare case-insensitively; `#text` and `#comment` match text
    /// and comment nodes.
    pub fn find_all_by_tag_name(&self, node: Node, name: &str) -> Vec<Node> {
        let name = name.trim();
        self.closed_nodes(node)
            .flat_map(|parent| {
                self.children(parent)
                    .filter(move |child| self.has_tag_name(*child, name))
            })
            .collect()
    }

    // Nodes in the order their end edge is reached. A node closes after the
    // subtrees of all its children, so checking each closed node's children
    // gives the search order.
    fn closed_nodes(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.traverse(node).filter_map(|edge| match edge {
            NodeEdge::End(node) => Some(node),
            NodeEdge::Start(_) => None,
        })
    }

    fn has_tag_name(&self, node: Node, name: &str) -> bool {
        match self.value(node) {
            Value::Element(element) => element.name().eq_ignore_ascii_case(name),
            Value::Text(_) => name.eq_ignore_ascii_case(TEXT_NAME),
            Value::Comment(_) => name.eq_ignore_ascii_case(COMMENT_NAME),
        }
    }
}
