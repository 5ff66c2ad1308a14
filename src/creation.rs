use crate::error::{validate_name, Error};
use crate::htmldata::{Html, Node};
use crate::value::{Comment, Element, Text, Value, DOCTYPE_NAME};

/// ## Creation
///
/// New nodes are detached; add them to an element to place them in a tree.
impl Html {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new element.
    ///
    /// The name is lowercased. It is a void element if its name is in the
    /// void element registry.
    ///
    /// Returns [`Error::InvalidName`] if the name does not start with a
    /// letter followed by letters, digits or hyphens.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let div = html.new_element("DIV")?;
    /// assert_eq!(html.node_name(div), "div");
    /// assert!(html.new_element("1div").is_err());
    /// # Ok::<(), htmlnode::Error>(())
    /// ```
    pub fn new_element(&mut self, name: &str) -> Result<Node, Error> {
        let name = validate_name(name)?;
        let void = self.void_elements.contains(&name);
        Ok(self.new_element_unchecked(name, void))
    }

    /// Create a new void element, whatever the registry says.
    ///
    /// Use this for custom self-closing tags.
    pub fn new_void_element(&mut self, name: &str) -> Result<Node, Error> {
        let name = validate_name(name)?;
        Ok(self.new_element_unchecked(name, true))
    }

    pub(crate) fn new_element_unchecked(&mut self, name: String, void: bool) -> Node {
        self.new_node(Value::Element(Element::new(name, void)))
    }

    /// Create a new text node. Its content is entity-escaped when rendered.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string(), true)))
    }

    /// Create a new text node that is rendered verbatim.
    ///
    /// Use this for content that already is markup.
    pub fn new_raw_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string(), false)))
    }

    /// Create a new comment node.
    pub fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(comment.to_string())))
    }

    /// Create a `<!DOCTYPE html>` declaration.
    ///
    /// This is a void element named `!DOCTYPE` with the boolean attribute
    /// `html`.
    pub fn new_doctype(&mut self) -> Node {
        let mut element = Element::new(DOCTYPE_NAME.to_string(), true);
        element.attributes.set("html", "");
        self.new_node(Value::Element(element))
    }

    /// Create a deep copy of a node and its descendants.
    ///
    /// The copy is detached.
    pub fn clone_node(&mut self, node: Node) -> Node {
        let value = self.value(node).clone();
        let copy = self.new_node(value);
        let mut pending = vec![(node, copy)];
        while let Some((source, target)) = pending.pop() {
            let children = self.children(source).collect::<Vec<_>>();
            for child in children {
                let value = self.value(child).clone();
                let child_copy = self.new_node(value);
                self.append(target, child_copy);
                pending.push((child, child_copy));
            }
        }
        copy
    }
}
