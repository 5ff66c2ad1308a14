use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::attributes::Attributes;
use crate::htmldata::{Html, Node};
use crate::value::{Comment, Element, Text, Value, ValueType};

/// Node edges.
///
/// Used by [`Html::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag.
    Start(Node),
    /// The end edge of a node. In case of an element
    /// this is the end tag. For text and comments the end
    /// edge occurs immediately after the start edge.
    End(Node),
}

/// ## Read-only access
impl Html {
    /// Access the value of a node.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    /// Access the value of a node, mutably.
    ///
    /// Changing an element into a leaf value this way is not prevented; use
    /// the manipulation methods to keep the tree consistent.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// The type of the node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// The element value, if this node is an element.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The element value, mutably, if this node is an element.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The text value, if this node is a text node.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text value, mutably, if this node is a text node.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The comment value, if this node is a comment.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        match self.value(node) {
            Value::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// Whether the node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Whether the node is a text node.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// Whether the node is a comment.
    pub fn is_comment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Comment
    }

    /// Whether the node is a void element.
    pub fn is_void(&self, node: Node) -> bool {
        self.element(node).map(|e| e.is_void()).unwrap_or(false)
    }

    /// The node name: the element name, `#text` or `#comment`.
    pub fn node_name(&self, node: Node) -> &str {
        self.value(node).node_name()
    }

    /// The attributes of an element, or `None` for text and comments.
    pub fn attributes(&self, node: Node) -> Option<&Attributes> {
        self.element(node).map(|element| element.attributes())
    }

    /// Check whether a node has been removed with [`Html::remove`].
    pub fn is_removed(&self, node: Node) -> bool {
        self.arena()[node.get()].is_removed()
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if the node is detached.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let p = html.new_element("p")?;
    /// let text = html.append_text(p, "Example");
    /// assert_eq!(html.parent(text), Some(p));
    /// assert_eq!(html.parent(p), None);
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the children of a node.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// The number of children.
    pub fn child_count(&self, node: Node) -> usize {
        self.children(node).count()
    }

    /// The child at `index`, or [`None`] if out of range.
    pub fn child_at(&self, node: Node, index: usize) -> Option<Node> {
        self.children(node).nth(index)
    }

    /// The position of `child` among the children of `parent`.
    pub fn index_of(&self, parent: Node, child: Node) -> Option<usize> {
        self.children(parent).position(|c| c == child)
    }

    /// Get first child.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over the ancestors of a node, starting with the node itself.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over a node and its descendants in document order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse a node and its descendants, yielding a start and an end edge
    /// for every node.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// The concatenated (unescaped) text of all descendant text nodes.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let root = html.parse("<p>Hello <b>world</b>!</p>").unwrap().nodes()[0];
    /// assert_eq!(html.text_content(root), "Hello world!");
    /// ```
    pub fn text_content(&self, node: Node) -> String {
        let mut content = String::new();
        for descendant in self.descendants(node) {
            if let Some(text) = self.text(descendant) {
                content.push_str(text.get());
            }
        }
        content
    }
}
