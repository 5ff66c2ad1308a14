//! HTML output method.
//!
//! The main entry point is [`Parameters`], which you can pass into
//! [`Html::serialize_html_string`](crate::Html::serialize_html_string) and
//! [`Html::serialize_html_write`](crate::Html::serialize_html_write) to
//! control the output.

use std::io;

use crate::entity::{needs_quotes, serialize_attribute};
use crate::error::Error;
use crate::htmldata::{Html, Node};

use super::{gen_outputs, write_indentation, Output, OutputToken, Pretty};

/// Indentation: put every tag, text and comment on its own line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indentation {
    /// Number of spaces per nesting level.
    pub tab_spaces: usize,
    /// Nesting level of the top node.
    pub initial: usize,
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation {
            tab_spaces: 4,
            initial: 0,
        }
    }
}

/// Parameters for HTML generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Indented output, or compact output if [`None`].
    pub indentation: Option<Indentation>,
    /// Always double-quote attribute values.
    ///
    /// If `false`, a value is only quoted if it contains whitespace or one of
    /// ``" ' < > = ` ``.
    pub quote_attributes: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            indentation: None,
            quote_attributes: true,
        }
    }
}

impl Parameters {
    /// Parameters for compact (`formatted == false`) or indented output
    /// starting at nesting level `initial_indent`.
    pub fn formatted(formatted: bool, initial_indent: usize) -> Self {
        Parameters {
            indentation: formatted.then(|| Indentation {
                initial: initial_indent,
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

pub(crate) struct HtmlSerializer<'a> {
    html: &'a Html,
    parameters: &'a Parameters,
}

impl<'a> HtmlSerializer<'a> {
    pub(crate) fn new(html: &'a Html, parameters: &'a Parameters) -> Self {
        HtmlSerializer { html, parameters }
    }

    pub(crate) fn serialize<W: io::Write>(&self, w: &mut W, node: Node) -> Result<(), Error> {
        let outputs = gen_outputs(self.html, node);
        match &self.parameters.indentation {
            None => {
                for (_, output) in outputs {
                    self.serialize_output(w, &output)?;
                }
            }
            Some(indentation) => {
                let mut pretty = Pretty::new(indentation.initial);
                for (_, output) in outputs {
                    let (level, newline) = pretty.prettify(&output);
                    write_indentation(w, level, indentation.tab_spaces)?;
                    self.serialize_output(w, &output)?;
                    if newline {
                        w.write_all(b"\n")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn serialize_output<W: io::Write>(&self, w: &mut W, output: &Output) -> Result<(), Error> {
        let token = self.render_output(output);
        if token.space {
            w.write_all(b" ")?;
        }
        w.write_all(token.text.as_bytes())?;
        Ok(())
    }

    pub(crate) fn render_output(&self, output: &Output) -> OutputToken {
        use Output::*;
        match output {
            StartTagOpen(element) => OutputToken {
                space: false,
                text: format!("<{}", element.name()),
            },
            Attribute(name, value) => OutputToken {
                space: true,
                text: render_attribute(name, value, self.parameters.quote_attributes),
            },
            StartTagClose(_) => OutputToken {
                space: false,
                text: ">".to_string(),
            },
            EndTag(element) => OutputToken {
                space: false,
                text: format!("</{}>", element.name()),
            },
            Text(text) => OutputToken {
                space: false,
                text: text.rendered().into_owned(),
            },
            Comment(comment) => OutputToken {
                space: false,
                text: format!("<!--{}-->", comment.safe()),
            },
        }
    }
}

pub(crate) fn render_attribute(name: &str, value: &str, quote: bool) -> String {
    if value.is_empty() {
        name.to_string()
    } else if quote || needs_quotes(value) {
        format!("{}=\"{}\"", name, serialize_attribute(value.into()))
    } else {
        format!("{}={}", name, value)
    }
}
