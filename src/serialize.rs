use std::io;

use crate::descriptor::Fragment;
use crate::error::Error;
use crate::htmldata::{Html, Node};
use crate::output::code::{CodeOptions, CodeSerializer};
use crate::output::html::{HtmlSerializer, Parameters};
use crate::output::{gen_outputs, Output, OutputToken, Pretty, PrettyOutputToken};

/// ## Serialization
impl Html {
    /// Serialize a node and its descendants to HTML.
    ///
    /// With `formatted`, every tag, text and comment is put on its own line,
    /// indented by 4 spaces per level, starting at level `initial_indent`.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let root = html.parse("<ul><li>a</li><li>b<br></li></ul>").unwrap().nodes()[0];
    /// assert_eq!(html.to_html(root, false, 0), "<ul><li>a</li><li>b<br></li></ul>");
    /// assert_eq!(
    ///     html.to_html(root, true, 0),
    ///     "<ul>\n    <li>\n        a\n    </li>\n    <li>\n        b\n        <br>\n    </li>\n</ul>\n"
    /// );
    /// ```
    pub fn to_html(&self, node: Node, formatted: bool, initial_indent: usize) -> String {
        self.serialize_html_string(&Parameters::formatted(formatted, initial_indent), node)
    }

    /// Serialize a node and its descendants to a string, controlled by
    /// [`Parameters`].
    ///
    /// ```rust
    /// use htmlnode::output::html::Parameters;
    ///
    /// let mut html = htmlnode::Html::new();
    /// let root = html.parse(r#"<input type="text" value="a b" disabled>"#).unwrap().nodes()[0];
    /// let parameters = Parameters {
    ///     quote_attributes: false,
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     html.serialize_html_string(&parameters, root),
    ///     r#"<input type=text value="a b" disabled>"#
    /// );
    /// ```
    pub fn serialize_html_string(&self, parameters: &Parameters, node: Node) -> String {
        let mut buf = Vec::new();
        // writing to a Vec cannot fail
        if self.serialize_html_write(parameters, node, &mut buf).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Write a node and its descendants as HTML to a writer.
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn serialize_html_write(
        &self,
        parameters: &Parameters,
        node: Node,
        w: &mut impl io::Write,
    ) -> Result<(), Error> {
        HtmlSerializer::new(self, parameters).serialize(w, node)
    }

    /// Serialize all top-level nodes of a parse result, in order.
    pub fn fragment_to_html(&self, fragment: &Fragment, formatted: bool) -> String {
        fragment
            .nodes()
            .iter()
            .map(|node| self.to_html(*node, formatted, 0))
            .collect()
    }

    /// The start tag of an element, with its attributes.
    ///
    /// Empty for text and comments.
    ///
    /// ```rust
    /// let mut html = htmlnode::Html::new();
    /// let root = html.parse(r#"<p class="x">text</p>"#).unwrap().nodes()[0];
    /// assert_eq!(html.opening_tag(root), r#"<p class="x">"#);
    /// assert_eq!(html.closing_tag(root), "</p>");
    /// ```
    pub fn opening_tag(&self, node: Node) -> String {
        let parameters = Parameters::default();
        let serializer = HtmlSerializer::new(self, &parameters);
        let mut tag = String::new();
        for (_, output) in gen_outputs(self, node) {
            if !matches!(
                output,
                Output::StartTagOpen(_) | Output::Attribute(..) | Output::StartTagClose(_)
            ) {
                break;
            }
            let token = serializer.render_output(&output);
            if token.space {
                tag.push(' ');
            }
            tag.push_str(&token.text);
        }
        tag
    }

    /// The end tag of an element.
    ///
    /// Empty for void elements, text and comments.
    pub fn closing_tag(&self, node: Node) -> String {
        match self.element(node) {
            Some(element) if !element.is_void() => format!("</{}>", element.name()),
            _ => String::new(),
        }
    }

    /// The rendered tokens of a node and its descendants, with the
    /// indentation [`Parameters`] would give them.
    ///
    /// Use this to build your own output on top of the HTML renderer.
    pub fn html_tokens<'a>(
        &'a self,
        parameters: &'a Parameters,
        node: Node,
    ) -> impl Iterator<Item = (Node, Output<'a>, PrettyOutputToken)> + 'a {
        let serializer = HtmlSerializer::new(self, parameters);
        let initial = parameters
            .indentation
            .as_ref()
            .map(|indentation| indentation.initial)
            .unwrap_or(0);
        let indented = parameters.indentation.is_some();
        let mut pretty = Pretty::new(initial);
        gen_outputs(self, node).map(move |(node, output)| {
            let (indentation, newline) = if indented {
                pretty.prettify(&output)
            } else {
                (0, false)
            };
            let OutputToken { space, text } = serializer.render_output(&output);
            let token = PrettyOutputToken {
                indentation,
                space,
                text,
                newline,
            };
            (node, output, token)
        })
    }

    /// Render a node as highlighted, escaped HTML source in a `<pre>` block.
    ///
    /// ```rust
    /// use htmlnode::output::code::CodeOptions;
    ///
    /// let mut html = htmlnode::Html::new();
    /// let root = html.parse("<b>hi</b>").unwrap().nodes()[0];
    /// let options = CodeOptions {
    ///     with_colors: false,
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     html.as_code(root, &options),
    ///     "<pre>&lt;b&gt;\n    hi\n&lt;/b&gt;\n</pre>"
    /// );
    /// ```
    pub fn as_code(&self, node: Node, options: &CodeOptions) -> String {
        let mut buf = Vec::new();
        if self.as_code_write(node, options, &mut buf).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Write the code view of a node to a writer.
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn as_code_write(
        &self,
        node: Node,
        options: &CodeOptions,
        w: &mut impl io::Write,
    ) -> Result<(), Error> {
        CodeSerializer::new(self, options).serialize(w, node)
    }
}
