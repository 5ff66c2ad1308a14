use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::access::NodeEdge;
use crate::htmldata::{Html, Node};
use crate::value::{Comment, Element, Text, Value};

/// Output of serialization
///
/// Every renderer walks the same sequence of outputs; this enum says what
/// part of the tree an output stands for. Given an [`OutputToken`] you can
/// use it for customized serialization.
#[derive(Debug, PartialEq)]
pub enum Output<'a> {
    /// Start tag open, i.e `<div`
    StartTagOpen(&'a Element),
    /// Attribute, i.e. `class="a"` or `disabled`
    Attribute(&'a str, &'a str),
    /// Start tag close, i.e. `>`
    StartTagClose(&'a Element),
    /// End tag, i.e. `</div>`. Void elements have none.
    EndTag(&'a Element),
    /// Text, i.e. `Hi`
    Text(&'a Text),
    /// Comment, i.e. `<!--note-->`
    Comment(&'a Comment),
}

pub(crate) fn gen_outputs(html: &Html, node: Node) -> impl Iterator<Item = (Node, Output)> + '_ {
    gen!({
        for edge in html.traverse(node) {
            match edge {
                NodeEdge::Start(current_node) => {
                    for output in gen_edge_start(html, current_node) {
                        yield_!((current_node, output));
                    }
                }
                NodeEdge::End(current_node) => {
                    if let Some(output) = edge_end(html, current_node) {
                        yield_!((current_node, output));
                    }
                }
            }
        }
    })
    .into_iter()
}

fn gen_edge_start(html: &Html, node: Node) -> impl Iterator<Item = Output> + '_ {
    gen!({
        match html.value(node) {
            Value::Element(element) => {
                yield_!(Output::StartTagOpen(element));
                for (name, value) in element.attributes().iter() {
                    yield_!(Output::Attribute(name, value));
                }
                yield_!(Output::StartTagClose(element));
            }
            Value::Text(text) => {
                yield_!(Output::Text(text));
            }
            Value::Comment(comment) => {
                yield_!(Output::Comment(comment));
            }
        }
    })
    .into_iter()
}

fn edge_end(html: &Html, node: Node) -> Option<Output> {
    match html.value(node) {
        Value::Element(element) if !element.is_void() => Some(Output::EndTag(element)),
        _ => None,
    }
}

/// Output token
///
/// This represents an [`Output`] as a rendered output token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputToken {
    /// Whether the token is prefixed by a space character.
    pub space: bool,
    /// The token.
    ///
    /// This is a fragment of HTML like `<div` or `class="a"` or `>`, etc.
    pub text: String,
}
