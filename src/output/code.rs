//! Code view: HTML source rendered as HTML, for display.
//!
//! The markup of a node is escaped, indented and wrapped in a `<pre>` block;
//! every token can be colored with an inline-styled `<span>`. Configure it
//! with [`CodeOptions`] and pass it to [`Html::as_code`](crate::Html::as_code).
//!
//! With the `serde` feature, [`CodeOptions`] can be read from a
//! configuration object with the keys `tab-spaces`, `initial-tab`,
//! `with-colors` and `colors`; missing keys keep their defaults.

use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::htmldata::{Html, Node};

use super::{gen_outputs, write_indentation, Output, OutputToken, Pretty};

/// Colors of the code view. Any CSS color works.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Colors {
    /// Background of the `<pre>` block.
    pub bg_color: String,
    /// Text nodes, and anything without its own color.
    pub text_color: String,
    /// Attribute names.
    pub attribute_color: String,
    /// Attribute values.
    pub attribute_value_color: String,
    /// Element names.
    pub node_name_color: String,
    /// `<`, `</` and `>`.
    pub lt_gt_color: String,
    /// Comments, delimiters included.
    pub comment_color: String,
    /// The `=` between attribute name and value.
    pub operator_color: String,
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            bg_color: "rgb(21, 18, 33)".to_string(),
            text_color: "gray".to_string(),
            attribute_color: "rgb(0,124,0)".to_string(),
            attribute_value_color: "rgb(170,85,137)".to_string(),
            node_name_color: "rgb(204,225,70)".to_string(),
            lt_gt_color: "rgb(204,225,70)".to_string(),
            comment_color: "rgb(0,165,245)".to_string(),
            operator_color: "gray".to_string(),
        }
    }
}

/// Options for the code view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct CodeOptions {
    /// Spaces per nesting level. Clamped to `0..=8`.
    pub tab_spaces: i64,
    /// Nesting level of the top node. Negative values count as `0`.
    pub initial_tab: i64,
    /// Color the tokens. Without colors the output is plain escaped source.
    pub with_colors: bool,
    /// The colors used when `with_colors` is set.
    pub colors: Colors,
}

impl Default for CodeOptions {
    fn default() -> Self {
        CodeOptions {
            tab_spaces: 4,
            initial_tab: 0,
            with_colors: true,
            colors: Colors::default(),
        }
    }
}

impl CodeOptions {
    /// Spaces per nesting level, clamped.
    pub fn effective_tab_spaces(&self) -> usize {
        self.tab_spaces.clamp(0, 8) as usize
    }

    /// Initial nesting level, clamped.
    pub fn effective_initial_tab(&self) -> usize {
        self.initial_tab.max(0) as usize
    }
}

pub(crate) struct CodeSerializer<'a> {
    html: &'a Html,
    options: &'a CodeOptions,
}

impl<'a> CodeSerializer<'a> {
    pub(crate) fn new(html: &'a Html, options: &'a CodeOptions) -> Self {
        CodeSerializer { html, options }
    }

    pub(crate) fn serialize<W: io::Write>(&self, w: &mut W, node: Node) -> Result<(), Error> {
        let colors = &self.options.colors;
        if self.options.with_colors {
            write!(
                w,
                "<pre style=\"margin:0;background-color:{};color:{}\">",
                colors.bg_color, colors.text_color
            )?;
        } else {
            w.write_all(b"<pre>")?;
        }
        let tab_spaces = self.options.effective_tab_spaces();
        let mut pretty = Pretty::new(self.options.effective_initial_tab());
        for (_, output) in gen_outputs(self.html, node) {
            let (level, newline) = pretty.prettify(&output);
            write_indentation(w, level, tab_spaces)?;
            let token = self.render_output(&output);
            if token.space {
                w.write_all(b" ")?;
            }
            w.write_all(token.text.as_bytes())?;
            if newline {
                w.write_all(b"\n")?;
            }
        }
        w.write_all(b"</pre>")?;
        Ok(())
    }

    fn span(&self, color: &str, text: &str) -> String {
        if self.options.with_colors {
            format!("<span style=\"color:{}\">{}</span>", color, text)
        } else {
            text.to_string()
        }
    }

    pub(crate) fn render_output(&self, output: &Output) -> OutputToken {
        use Output::*;
        let colors = &self.options.colors;
        match output {
            StartTagOpen(element) => OutputToken {
                space: false,
                text: format!(
                    "{}{}",
                    self.span(&colors.lt_gt_color, "&lt;"),
                    self.span(&colors.node_name_color, &serialize_text(element.name().into()))
                ),
            },
            Attribute(name, value) => {
                let mut text = self.span(&colors.attribute_color, &serialize_text((*name).into()));
                if !value.is_empty() {
                    let quoted = format!("\"{}\"", serialize_attribute((*value).into()));
                    text.push_str(&self.span(&colors.operator_color, "="));
                    text.push_str(&self.span(
                        &colors.attribute_value_color,
                        &serialize_text(quoted.into()),
                    ));
                }
                OutputToken { space: true, text }
            }
            StartTagClose(_) => OutputToken {
                space: false,
                text: self.span(&colors.lt_gt_color, "&gt;"),
            },
            EndTag(element) => OutputToken {
                space: false,
                text: format!(
                    "{}{}{}",
                    self.span(&colors.lt_gt_color, "&lt;/"),
                    self.span(&colors.node_name_color, &serialize_text(element.name().into())),
                    self.span(&colors.lt_gt_color, "&gt;")
                ),
            },
            Text(text) => OutputToken {
                space: false,
                text: serialize_text(text.rendered()).into_owned(),
            },
            Comment(comment) => {
                let source = format!("<!--{}-->", comment.safe());
                OutputToken {
                    space: false,
                    text: self.span(&colors.comment_color, &serialize_text(source.into())),
                }
            }
        }
    }
}
