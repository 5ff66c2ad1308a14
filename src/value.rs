use std::borrow::Cow;

use crate::attributes::Attributes;
use crate::entity::{serialize_comment, serialize_text};

pub(crate) const DOCTYPE_NAME: &str = "!DOCTYPE";
pub(crate) const TEXT_NAME: &str = "#text";
pub(crate) const COMMENT_NAME: &str = "#comment";

/// The type of the HTML node.
///
/// Access it using [`Value::value_type`] or
/// [`Html::value_type`](crate::Html::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Element; it has a name, attributes and children.
    Element,
    /// Text. A leaf node.
    Text,
    /// Comment. A leaf node.
    Comment,
}

/// An HTML value.
///
/// Access it using [`Html::value`](crate::Html::value) or mutably using
/// [`Html::value_mut`](crate::Html::value_mut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Element; it has a name, attributes and children.
    Element(Element),
    /// Text. You can get and set the text value.
    Text(Text),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the HTML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
        }
    }

    /// The node name: the element name, `#text` or `#comment`.
    pub fn node_name(&self) -> &str {
        match self {
            Value::Element(element) => element.name(),
            Value::Text(_) => TEXT_NAME,
            Value::Comment(_) => COMMENT_NAME,
        }
    }
}

/// HTML element value.
///
/// Example: `<div class="a">` or `<br>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) void: bool,
}

impl Element {
    pub(crate) fn new(name: String, void: bool) -> Self {
        Element {
            name,
            attributes: Attributes::new(),
            void,
        }
    }

    /// The element name. Always lowercase, except for `!DOCTYPE`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a void element, which has no closing tag and no
    /// children.
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Whether this is the `<!DOCTYPE html>` declaration.
    pub fn is_doctype(&self) -> bool {
        self.name == DOCTYPE_NAME
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The attributes of the element, mutably.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute value. See [`Attributes::set`].
    pub fn set_attribute<S: Into<String>>(&mut self, name: &str, value: S) -> bool {
        self.attributes.set(name, value)
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }
}

/// HTML text value.
///
/// Example: `Hi` in `<p>Hi</p>`.
///
/// The text is stored as given. An escaped text node renders its content with
/// `&`, `<`, `>`, `"` and `'` replaced by entities; a raw text node renders
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
    pub(crate) escape: bool,
}

impl Text {
    pub(crate) fn new(text: String, escape: bool) -> Self {
        Text { text, escape }
    }

    /// Get the text value, unescaped.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Whether the text is entity-escaped when rendered.
    pub fn is_escaped(&self) -> bool {
        self.escape
    }

    /// Change whether the text is entity-escaped when rendered.
    pub fn set_escaped(&mut self, escape: bool) {
        self.escape = escape;
    }

    /// The text with HTML entities escaped, whatever the escape flag says.
    pub fn escaped(&self) -> Cow<str> {
        serialize_text(self.text.as_str().into())
    }

    /// The text as it is rendered in HTML output.
    pub fn rendered(&self) -> Cow<str> {
        if self.escape {
            self.escaped()
        } else {
            Cow::Borrowed(&self.text)
        }
    }
}

/// HTML comment.
///
/// Example: `<!--note-->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text as it was set.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// The comment text as it is placed between `<!--` and `-->`.
    ///
    /// Any `-->` is turned into `-- ` and any `<!--` into ` --`, so the text
    /// can never end the comment early.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let node = html.new_comment("<!--A Comment");
    /// assert_eq!(html.comment(node).unwrap().safe(), " --A Comment");
    /// ```
    pub fn safe(&self) -> Cow<str> {
        serialize_comment(self.text.as_str().into())
    }
}
