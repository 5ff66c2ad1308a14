use indextree::{Arena, NodeId};

use crate::value::Value;
use crate::void::VoidElements;

pub(crate) type HtmlArena = Arena<Value>;

/// A node in an HTML tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Html` struct owns all HTML tree data in your program. It lets you
/// build, query, change, parse and serialize one or more HTML trees.
///
/// Nodes are created detached. They become part of a tree when you add them
/// to an element, and are detached again when removed. The parent link is
/// only used for navigation; a tree is reachable through the [`Node`] you
/// hold for its top.
///
/// `Html` is implemented in several sections focusing on different aspects
/// of working with the tree.
pub struct Html {
    pub(crate) arena: HtmlArena,
    pub(crate) void_elements: VoidElements,
}

impl Html {
    /// Create a new `Html` instance using the standard void element
    /// registry.
    pub fn new() -> Self {
        Self::with_void_elements(VoidElements::default())
    }

    /// Create a new `Html` instance with a custom void element registry.
    ///
    /// ```rust
    /// use htmlnode::{Html, VoidElements};
    ///
    /// let mut html = Html::with_void_elements(VoidElements::with_extra(&["my-icon"]));
    /// let icon = html.new_element("my-icon")?;
    /// assert!(html.is_void(icon));
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn with_void_elements(void_elements: VoidElements) -> Self {
        Html {
            arena: HtmlArena::new(),
            void_elements,
        }
    }

    /// The void element registry used by this instance.
    pub fn void_elements(&self) -> &VoidElements {
        &self.void_elements
    }

    #[inline]
    pub(crate) fn arena(&self) -> &HtmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut HtmlArena {
        &mut self.arena
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}
