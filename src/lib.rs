#![forbid(unsafe_code)]

//! Build, query, parse and pretty-print HTML trees.
//!
//! All nodes live in an [`Html`] arena; a [`Node`] is a small copyable handle
//! into it. A node is an element, a text or a comment; see [`Value`].
//!
//! ```rust
//! use htmlnode::Html;
//!
//! let mut html = Html::new();
//! let div = html.new_element("div")?;
//! html.set_class(div, "greeting");
//! let p = html.append_element(div, "p")?;
//! html.append_text(p, "Hello & welcome");
//! assert_eq!(
//!     html.to_html(div, false, 0),
//!     r#"<div class="greeting"><p>Hello &amp; welcome</p></div>"#
//! );
//!
//! let parsed = html.parse(r#"<ul><li id="one">1<li id="two">2</ul>"#).unwrap();
//! let ul = parsed.single().unwrap();
//! let two = html.find_by_id(ul, "two").unwrap();
//! assert_eq!(html.text_content(two), "2");
//! # Ok::<(), htmlnode::Error>(())
//! ```
//!
//! Everything except element creation with an invalid name is permissive:
//! changes that would break the tree (a child for a void element, an
//! attribute on a text node) are ignored and reported through the return
//! value, never through a panic. Parsing never fails.
//!
//! Rejected changes and parser recoveries are reported as [`tracing`]
//! events at `debug` and `trace` level.
//!
//! [`tracing`]: https://docs.rs/tracing

mod access;
mod attributeaccess;
mod attributes;
mod creation;
pub mod descriptor;
mod entity;
mod error;
mod htmldata;
mod manipulation;
pub mod output;
mod parse;
#[cfg(feature = "proptest")]
pub mod proptest;
mod search;
mod serialize;
mod value;
mod void;

pub use access::NodeEdge;
pub use attributes::Attributes;
pub use descriptor::{Descriptor, ElementDescriptor, Fragment};
pub use error::Error;
pub use htmldata::{Html, Node};
pub use parse::html_as_array;
pub use value::{Comment, Element, Text, Value, ValueType};
pub use void::VoidElements;
