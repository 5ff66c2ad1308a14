//! Descriptors: a plain representation of parsed HTML.
//!
//! [`html_as_array`](crate::html_as_array) turns markup into a sequence of
//! descriptors. They have no dependency on the [`Html`] object, so you can
//! inspect, store or construct them separately. Turn a descriptor into a
//! node by calling `.materialize` on it and passing a mutable [`Html`].
//!
//! Example:
//!
//! ```rust
//! use htmlnode::descriptor::{Descriptor, ElementDescriptor};
//!
//! let descriptor = Descriptor::Element(ElementDescriptor {
//!     name: "p".to_string(),
//!     attributes: Default::default(),
//!     children: vec![Descriptor::Text("Example".to_string())],
//!     is_void: false,
//! });
//!
//! let mut html = htmlnode::Html::new();
//! let node = descriptor.materialize(&mut html);
//! assert_eq!(html.to_html(node, false, 0), "<p>Example</p>");
//! ```

use indexmap::IndexMap;

use crate::htmldata::{Html, Node};
use crate::value::DOCTYPE_NAME;

/// Tag name reported for text descriptors.
pub const TEXT_TAG_NAME: &str = "#TEXT";
/// Tag name reported for comment descriptors.
pub const COMMENT_TAG_NAME: &str = "#COMMENT";

/// A parsed node, prior to materialization into the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// A `<!DOCTYPE ...>` declaration. It has no attributes or children.
    Doctype,
    /// An element.
    Element(ElementDescriptor),
    /// A run of text, whitespace included, as written.
    Text(String),
    /// The content of a comment, as written.
    Comment(String),
}

/// A parsed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    /// Lowercase element name.
    pub name: String,
    /// Attributes in source order; names are lowercase. A boolean attribute
    /// has an empty value.
    pub attributes: IndexMap<String, String>,
    /// Child descriptors. Always empty for void elements.
    pub children: Vec<Descriptor>,
    /// Whether the element is void.
    pub is_void: bool,
}

impl Descriptor {
    /// The tag name: `!DOCTYPE`, the element name, `#TEXT` or `#COMMENT`.
    pub fn tag_name(&self) -> &str {
        match self {
            Descriptor::Doctype => DOCTYPE_NAME,
            Descriptor::Element(element) => &element.name,
            Descriptor::Text(_) => TEXT_TAG_NAME,
            Descriptor::Comment(_) => COMMENT_TAG_NAME,
        }
    }

    /// The children, or [`None`] if this descriptor cannot have any.
    pub fn children(&self) -> Option<&[Descriptor]> {
        match self {
            Descriptor::Element(element) if !element.is_void => Some(&element.children),
            _ => None,
        }
    }

    /// The text of a text or comment descriptor.
    pub fn body_text(&self) -> Option<&str> {
        match self {
            Descriptor::Text(text) | Descriptor::Comment(text) => Some(text),
            _ => None,
        }
    }

    /// Turn a descriptor into a (detached) node.
    ///
    /// Text becomes a raw text node, so it renders exactly as it was written.
    pub fn materialize(&self, html: &mut Html) -> Node {
        match self {
            Descriptor::Element(element) => element.materialize(html),
            _ => self.new_node(html),
        }
    }

    // The node for this descriptor alone, without its children.
    fn new_node(&self, html: &mut Html) -> Node {
        match self {
            Descriptor::Doctype => html.new_doctype(),
            Descriptor::Element(element) => element.new_node(html),
            Descriptor::Text(text) => html.new_raw_text(text),
            Descriptor::Comment(comment) => html.new_comment(comment),
        }
    }
}

impl ElementDescriptor {
    /// Turn an element descriptor into a (detached) node.
    ///
    /// Nesting depth is only limited by memory.
    pub fn materialize(&self, html: &mut Html) -> Node {
        let root = self.new_node(html);
        let mut pending = vec![(self.children.iter(), root)];
        while let Some((children, parent)) = pending.last_mut() {
            let parent = *parent;
            let child = match children.next() {
                Some(child) => child,
                None => {
                    pending.pop();
                    continue;
                }
            };
            let node = child.new_node(html);
            html.append(parent, node);
            if let Descriptor::Element(element) = child {
                if !element.children.is_empty() {
                    pending.push((element.children.iter(), node));
                }
            }
        }
        root
    }

    fn new_node(&self, html: &mut Html) -> Node {
        let node = html.new_element_unchecked(self.name.clone(), self.is_void);
        for (name, value) in &self.attributes {
            html.set_attribute(node, name, value.as_str());
        }
        node
    }
}

// Deeply nested descriptors are released level by level instead of through
// the recursive drop glue.
impl Drop for ElementDescriptor {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(descriptor) = pending.pop() {
            if let Descriptor::Element(mut element) = descriptor {
                pending.append(&mut element.children);
            }
        }
    }
}

/// The result of parsing: a single node or a sequence of top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// The input held exactly one top-level node.
    Node(Node),
    /// The input held several top-level nodes, in source order.
    Nodes(Vec<Node>),
}

impl Fragment {
    /// The top-level nodes.
    pub fn nodes(&self) -> &[Node] {
        match self {
            Fragment::Node(node) => std::slice::from_ref(node),
            Fragment::Nodes(nodes) => nodes,
        }
    }

    /// The single top-level node, if there is exactly one.
    pub fn single(&self) -> Option<Node> {
        match self {
            Fragment::Node(node) => Some(*node),
            Fragment::Nodes(_) => None,
        }
    }

    /// Consume the fragment into its top-level nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Fragment::Node(node) => vec![node],
            Fragment::Nodes(nodes) => nodes,
        }
    }
}
