use crate::error::{validate_name, Error};
use crate::htmldata::{Html, Node};
use crate::value::Value;

/// Manipulation of the tree structure.
///
/// These operations never fail. A change the tree cannot take is ignored,
/// and the method returns `false` or [`None`]:
///
/// - Only non-void elements can have children.
/// - A node cannot be added to itself or to one of its descendants.
///
/// Adding a node that already has a parent moves it: it is detached from its
/// old parent first. Nodes are never copied implicitly.
impl Html {
    /// Append a child to the end of the children of the given parent.
    ///
    /// It is now the new last node of the parent.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let ul = html.new_element("ul")?;
    /// let li = html.new_element("li")?;
    /// assert!(html.append(ul, li));
    ///
    /// let br = html.new_element("br")?;
    /// let text = html.new_text("ignored");
    /// assert!(!html.append(br, text));
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> bool {
        if !self.add_structure_check(parent, child) {
            return false;
        }
        child.get().detach(self.arena_mut());
        parent
            .get()
            .checked_append(child.get(), self.arena_mut())
            .is_ok()
    }

    /// Prepend a child to the beginning of the children of the given parent.
    ///
    /// It is now the new first node of the parent.
    pub fn prepend(&mut self, parent: Node, child: Node) -> bool {
        if !self.add_structure_check(parent, child) {
            return false;
        }
        child.get().detach(self.arena_mut());
        parent
            .get()
            .checked_prepend(child.get(), self.arena_mut())
            .is_ok()
    }

    /// Insert a child at a position among the children of the parent.
    ///
    /// The children from `index` on shift one position to the right. An
    /// index past the end appends. If the child already is a child of
    /// `parent`, the index counts the children without it.
    pub fn insert_at(&mut self, parent: Node, child: Node, index: usize) -> bool {
        if !self.add_structure_check(parent, child) {
            return false;
        }
        child.get().detach(self.arena_mut());
        match self.child_at(parent, index) {
            Some(reference) => reference
                .get()
                .checked_insert_before(child.get(), self.arena_mut())
                .is_ok(),
            None => parent
                .get()
                .checked_append(child.get(), self.arena_mut())
                .is_ok(),
        }
    }

    /// Append a text node with the given text. The text is escaped when
    /// rendered.
    ///
    /// Returns the new text node; it stays detached if `parent` cannot have
    /// children.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Node {
        let text_node = self.new_text(text);
        self.append(parent, text_node);
        text_node
    }

    /// Append a text node that is rendered verbatim.
    pub fn append_raw_text(&mut self, parent: Node, text: &str) -> Node {
        let text_node = self.new_raw_text(text);
        self.append(parent, text_node);
        text_node
    }

    /// Append a comment node with the given text.
    pub fn append_comment(&mut self, parent: Node, comment: &str) -> Node {
        let comment_node = self.new_comment(comment);
        self.append(parent, comment_node);
        comment_node
    }

    /// Append a new element with the given name.
    ///
    /// Returns [`Error::InvalidName`] if the name is invalid.
    pub fn append_element(&mut self, parent: Node, name: &str) -> Result<Node, Error> {
        let element_node = self.new_element(name)?;
        self.append(parent, element_node);
        Ok(element_node)
    }

    /// Remove `child` from `parent`.
    ///
    /// Returns the detached child, or [`None`] if it is not a child of
    /// `parent`.
    pub fn remove_child(&mut self, parent: Node, child: Node) -> Option<Node> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        child.get().detach(self.arena_mut());
        Some(child)
    }

    /// Remove the child at `index`, returning it.
    pub fn remove_child_at(&mut self, parent: Node, index: usize) -> Option<Node> {
        let child = self.child_at(parent, index)?;
        self.remove_child(parent, child)
    }

    /// Remove the first child for which `predicate` holds, returning it.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let root = html.parse("<ul><li>a</li><li id='b'>b</li></ul>").unwrap().nodes()[0];
    /// let removed = html
    ///     .remove_child_where(root, |html, node| html.id(node) == Some("b"))
    ///     .unwrap();
    /// assert_eq!(html.parent(removed), None);
    /// assert_eq!(html.to_html(root, false, 0), "<ul><li>a</li></ul>");
    /// ```
    pub fn remove_child_where<F>(&mut self, parent: Node, predicate: F) -> Option<Node>
    where
        F: Fn(&Html, Node) -> bool,
    {
        let child = self.children(parent).find(|child| predicate(self, *child))?;
        self.remove_child(parent, child)
    }

    /// Remove all children, returning them in their former order.
    pub fn remove_all(&mut self, parent: Node) -> Vec<Node> {
        let children = self.children(parent).collect::<Vec<_>>();
        for child in &children {
            child.get().detach(self.arena_mut());
        }
        children
    }

    /// Replace `old` by `new` at the same position.
    ///
    /// Nothing changes and `false` is returned if `old` is not a child of
    /// `parent` or `new` cannot be placed there.
    pub fn replace_child(&mut self, parent: Node, old: Node, new: Node) -> bool {
        if self.parent(old) != Some(parent) || old == new {
            return false;
        }
        if !self.add_structure_check(parent, new) {
            return false;
        }
        new.get().detach(self.arena_mut());
        if old
            .get()
            .checked_insert_before(new.get(), self.arena_mut())
            .is_err()
        {
            return false;
        }
        old.get().detach(self.arena_mut());
        true
    }

    /// Detach a node (and its descendants) from its parent.
    ///
    /// It now becomes the top of its own tree.
    pub fn detach(&mut self, node: Node) {
        node.get().detach(self.arena_mut());
    }

    /// Remove a node (and its descendants) from the tree and free them.
    ///
    /// Handles to removed nodes must not be used anymore; see
    /// [`Html::is_removed`].
    pub fn remove(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }

    /// Change the text of a text or comment node.
    ///
    /// Returns `false` for elements.
    pub fn set_text(&mut self, node: Node, text: &str) -> bool {
        match self.value_mut(node) {
            Value::Text(t) => {
                t.set(text);
                true
            }
            Value::Comment(c) => {
                c.set(text);
                true
            }
            Value::Element(_) => false,
        }
    }

    /// Rename an element.
    ///
    /// Whether it is void follows the registry for the new name. Returns
    /// `Ok(false)` for text and comments, or if the new name is void but
    /// the element has children.
    pub fn rename(&mut self, node: Node, name: &str) -> Result<bool, Error> {
        let name = validate_name(name)?;
        let void = self.void_elements.contains(&name);
        let has_children = self.first_child(node).is_some();
        match self.element_mut(node) {
            Some(element) => {
                if void && has_children {
                    tracing::debug!(name = %name, "cannot rename element with children to void");
                    return Ok(false);
                }
                element.name = name;
                element.void = void;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Mark an element as void or not.
    ///
    /// An element with children cannot become void.
    pub fn set_void(&mut self, node: Node, void: bool) -> bool {
        let has_children = self.first_child(node).is_some();
        match self.element_mut(node) {
            Some(element) => {
                if void && has_children {
                    return false;
                }
                element.void = void;
                true
            }
            None => false,
        }
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> bool {
        match self.value(parent) {
            Value::Element(element) if !element.is_void() => {}
            _ => {
                tracing::debug!(
                    parent = self.node_name(parent),
                    "ignoring child for node that cannot have children"
                );
                return false;
            }
        }
        // a childless node can only be an ancestor of itself
        let cyclic = if self.first_child(child).is_some() {
            self.ancestors(parent).any(|ancestor| ancestor == child)
        } else {
            parent == child
        };
        if cyclic {
            tracing::debug!("ignoring child that would create a cycle");
            return false;
        }
        true
    }
}
