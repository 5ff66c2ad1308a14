//! Proptest support for htmlnode
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary descriptor
//! trees, which you can materialize into an [`Html`](crate::Html).
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! htmlnode = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use indexmap::IndexMap;
use proptest::prelude::*;

use crate::descriptor::{Descriptor, ElementDescriptor};

const ELEMENT_NAMES: &[&str] = &["a", "b", "div", "p", "span", "x-item"];
const VOID_NAMES: &[&str] = &["br", "hr", "img"];
const ATTRIBUTE_NAMES: &[&str] = &["id", "class", "title", "data-q", "hidden"];
// no `<`, so text cannot start markup when it is parsed again
const TEXT: &str = "[a-zA-Z0-9 &;.>\n]*";
const COMMENT: &str = "[a-zA-Z0-9 .]*";
const ATTRIBUTE_VALUE: &str = "[a-zA-Z0-9 &\"'=]*";

fn arb_attributes() -> impl Strategy<Value = IndexMap<String, String>> {
    prop::collection::vec(
        (prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE),
        0..4,
    )
    .prop_map(|attributes| {
        attributes
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    })
}

fn arb_void_element() -> impl Strategy<Value = Descriptor> {
    (prop::sample::select(VOID_NAMES), arb_attributes()).prop_map(|(name, attributes)| {
        Descriptor::Element(ElementDescriptor {
            name: name.to_string(),
            attributes,
            children: vec![],
            is_void: true,
        })
    })
}

/// Generate an arbitrary descriptor: an element tree, text or a comment.
pub fn arb_descriptor() -> impl Strategy<Value = Descriptor> {
    let leaf = prop_oneof![
        TEXT.prop_map(Descriptor::Text),
        COMMENT.prop_map(Descriptor::Comment),
        arb_void_element(),
    ];

    leaf.prop_recursive(
        6,   // levels deep
        128, // maximum size of 128 nodes
        8,   // up to 8 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_attributes(),
                prop::collection::vec(inner, 0..8),
            )
                .prop_map(|(name, attributes, children)| {
                    Descriptor::Element(ElementDescriptor {
                        name: name.to_string(),
                        attributes,
                        children,
                        is_void: false,
                    })
                })
        },
    )
}

prop_compose! {
    /// Generate an arbitrary (non-void) element descriptor.
    ///
    /// Example:
    ///
    /// ```notrust
    /// use htmlnode::proptest::arb_element;
    /// use htmlnode::Html;
    ///
    /// proptest! {
    ///   #[test]
    ///   fn test_can_serialize_parse(element in arb_element()) {
    ///     let mut html = Html::new();
    ///     let node = element.materialize(&mut html);
    ///     let serialized = html.to_html(node, false, 0);
    ///     prop_assert!(html.parse(&serialized).is_some());
    ///   }
    /// }
    /// ```
    pub fn arb_element()(name in prop::sample::select(ELEMENT_NAMES),
                         attributes in arb_attributes(),
                         children in prop::collection::vec(arb_descriptor(), 0..4)) -> ElementDescriptor {
        ElementDescriptor {
            name: name.to_string(),
            attributes,
            children,
            is_void: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::htmldata::Html;

    proptest! {
        #[test]
        fn test_serialize_parse_serialize(element in arb_element()) {
            let mut html = Html::new();
            let node = element.materialize(&mut html);
            let serialized = html.to_html(node, false, 0);
            let parsed = html.parse(&serialized);
            prop_assert!(parsed.is_some(), "Cannot parse: {:?}", serialized);
            let reparsed = html.fragment_to_html(&parsed.unwrap(), false);
            prop_assert_eq!(serialized, reparsed);
        }
    }

    proptest! {
        #[test]
        fn test_parse_single_element(element in arb_element()) {
            let mut html = Html::new();
            let node = element.materialize(&mut html);
            let serialized = html.to_html(node, false, 0);
            let parsed = html.parse(&serialized).unwrap();
            prop_assert!(parsed.single().is_some());
        }
    }
}
