use indexmap::IndexMap;

use crate::descriptor::{Descriptor, ElementDescriptor, Fragment};
use crate::htmldata::Html;
use crate::void::VoidElements;

/// Parse markup into descriptors using the standard void element registry.
///
/// Parsing never fails. Unclosed elements are closed at the end of the
/// input, an end tag closes the nearest open element with its name (and
/// everything opened after it), and stray end tags are dropped.
///
/// ```rust
/// use htmlnode::html_as_array;
///
/// let descriptors = html_as_array("<!doctype html>");
/// assert_eq!(descriptors.len(), 1);
/// assert_eq!(descriptors[0].tag_name(), "!DOCTYPE");
///
/// assert!(html_as_array("").is_empty());
/// ```
pub fn html_as_array(text: &str) -> Vec<Descriptor> {
    Scanner::new(text, &VoidElements::default()).run()
}

/// ## Parsing
impl Html {
    /// Parse markup into descriptors using this instance's void element
    /// registry. See [`html_as_array`].
    pub fn html_as_array(&self, text: &str) -> Vec<Descriptor> {
        Scanner::new(text, &self.void_elements).run()
    }

    /// Parse markup into nodes.
    ///
    /// Returns [`None`] if the input holds no markup at all,
    /// [`Fragment::Node`] if it has a single top-level node and
    /// [`Fragment::Nodes`] otherwise.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let fragment = html.parse(r#"<div class="a"><p>Hi</p></div>"#).unwrap();
    /// let div = fragment.single().unwrap();
    /// assert_eq!(html.attribute(div, "class"), Some("a"));
    /// assert_eq!(html.to_html(div, false, 0), r#"<div class="a"><p>Hi</p></div>"#);
    ///
    /// assert!(html.parse("").is_none());
    /// ```
    pub fn parse(&mut self, text: &str) -> Option<Fragment> {
        let descriptors = self.html_as_array(text);
        let mut nodes = descriptors
            .iter()
            .map(|descriptor| descriptor.materialize(self))
            .collect::<Vec<_>>();
        match nodes.len() {
            0 => None,
            1 => nodes.pop().map(Fragment::Node),
            _ => Some(Fragment::Nodes(nodes)),
        }
    }
}

struct Frame {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Descriptor>,
}

impl Frame {
    fn close(self) -> Descriptor {
        Descriptor::Element(ElementDescriptor {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
            is_void: false,
        })
    }
}

struct Tag {
    name: String,
    attributes: IndexMap<String, String>,
    self_closing: bool,
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    void_elements: &'a VoidElements,
    top: Vec<Descriptor>,
    stack: Vec<Frame>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, void_elements: &'a VoidElements) -> Self {
        Scanner {
            input: input.trim(),
            pos: 0,
            void_elements,
            top: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Descriptor> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            match rest.find('<') {
                None => {
                    self.push_text(rest);
                    self.pos = self.input.len();
                }
                Some(0) => self.markup(),
                Some(offset) => {
                    self.push_text(&rest[..offset]);
                    self.pos += offset;
                }
            }
        }
        while let Some(frame) = self.stack.pop() {
            tracing::trace!(name = %frame.name, "closing unclosed element at end of input");
            self.push(frame.close());
        }
        self.top
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    fn level(&mut self) -> &mut Vec<Descriptor> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.top,
        }
    }

    fn push(&mut self, descriptor: Descriptor) {
        self.level().push(descriptor);
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let level = self.level();
        if let Some(Descriptor::Text(existing)) = level.last_mut() {
            existing.push_str(text);
        } else {
            level.push(Descriptor::Text(text.to_string()));
        }
    }

    // called with the scanner positioned on a '<'
    fn markup(&mut self) {
        let rest = self.rest();
        if rest.starts_with("<!--") {
            self.comment();
        } else if starts_with_ignore_case(rest, "<!doctype") {
            self.skip_past('>');
            self.push(Descriptor::Doctype);
        } else if rest.starts_with("</") && self.peek_at(2).is_some_and(|c| c.is_ascii_alphabetic())
        {
            self.end_tag();
        } else if self.peek_at(1).is_some_and(|c| c.is_ascii_alphabetic()) {
            self.start_tag();
        } else if rest.starts_with("<!") || rest.starts_with("<?") || rest.starts_with("</") {
            tracing::trace!(pos = self.pos, "dropping bogus markup");
            self.skip_past('>');
        } else {
            tracing::trace!(pos = self.pos, "treating stray '<' as text");
            self.push_text("<");
            self.pos += 1;
        }
    }

    fn comment(&mut self) {
        let body_start = self.pos + "<!--".len();
        let body = &self.input[body_start..];
        match body.find("-->") {
            Some(end) => {
                self.push(Descriptor::Comment(body[..end].to_string()));
                self.pos = body_start + end + "-->".len();
            }
            None => {
                tracing::trace!("unterminated comment runs to end of input");
                self.push(Descriptor::Comment(body.to_string()));
                self.pos = self.input.len();
            }
        }
    }

    fn skip_past(&mut self, c: char) {
        match self.rest().find(c) {
            Some(offset) => self.pos += offset + c.len_utf8(),
            None => self.pos = self.input.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn name(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'-')
        {
            self.pos += 1;
        }
        self.input[start..self.pos].to_ascii_lowercase()
    }

    fn start_tag(&mut self) {
        self.pos += 1;
        let tag = self.tag();
        let is_void = self.void_elements.contains(&tag.name);
        if is_void || tag.self_closing {
            self.push(Descriptor::Element(ElementDescriptor {
                name: tag.name,
                attributes: tag.attributes,
                children: Vec::new(),
                is_void,
            }));
        } else {
            self.stack.push(Frame {
                name: tag.name,
                attributes: tag.attributes,
                children: Vec::new(),
            });
        }
    }

    fn tag(&mut self) -> Tag {
        let name = self.name();
        let mut attributes = IndexMap::new();
        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    tracing::trace!(name = %name, "unterminated start tag");
                    break;
                }
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') if self.peek_at(1) == Some(b'>') => {
                    self.pos += 2;
                    self_closing = true;
                    break;
                }
                Some(b'/' | b'"' | b'\'' | b'=') => {
                    self.pos += 1;
                }
                Some(_) => {
                    let (attribute_name, value) = self.attribute();
                    attributes.insert(attribute_name, value);
                }
            }
        }
        Tag {
            name,
            attributes,
            self_closing,
        }
    }

    fn attribute(&mut self) -> (String, String) {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || matches!(c, b'=' | b'>' | b'"' | b'\'') {
                break;
            }
            if c == b'/' && self.peek_at(1) == Some(b'>') {
                break;
            }
            self.pos += 1;
        }
        let name = self.input[start..self.pos].to_lowercase();
        let before_value = self.pos;
        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            // a boolean attribute; leave the whitespace for the next one
            self.pos = before_value;
            return (name, String::new());
        }
        self.pos += 1;
        self.skip_whitespace();
        (name, self.attribute_value())
    }

    fn attribute_value(&mut self) -> String {
        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                let value_start = self.pos + 1;
                let body = &self.input[value_start..];
                match body.find(quote as char) {
                    Some(end) => {
                        self.pos = value_start + end + 1;
                        body[..end].to_string()
                    }
                    None => {
                        tracing::trace!("unterminated attribute value runs to end of input");
                        self.pos = self.input.len();
                        body.to_string()
                    }
                }
            }
            _ => {
                let start = self.pos;
                while self
                    .peek()
                    .is_some_and(|c| !c.is_ascii_whitespace() && c != b'>')
                {
                    self.pos += 1;
                }
                self.input[start..self.pos].to_string()
            }
        }
    }

    fn end_tag(&mut self) {
        self.pos += 2;
        let name = self.name();
        self.skip_past('>');
        match self.stack.iter().rposition(|frame| frame.name == name) {
            Some(index) => {
                while self.stack.len() > index + 1 {
                    if let Some(frame) = self.stack.pop() {
                        tracing::trace!(name = %frame.name, closed_by = %name, "auto-closing element");
                        self.push(frame.close());
                    }
                }
                if let Some(frame) = self.stack.pop() {
                    self.push(frame.close());
                }
            }
            None => {
                tracing::trace!(name = %name, "dropping end tag without open element");
            }
        }
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
