//! Node and attribute model.
//!
//! A tree is built bottom-up from the factories in [`crate::elem`],
//! [`crate::text`] and [`crate::attr`], rendered once, then dropped.
//! Nothing here mutates after construction.

use crate::Stem;

/// An ordered attribute sequence as declared on an element.
pub type Attrs<'a> = Vec<Attribute<'a>>;

/// One modifier attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum Attribute<'a> {
    /// `key="value"`
    KeyValue { key: Stem<'a>, value: Stem<'a> },
    /// Bare `key`, rendered as presence only.
    Boolean { key: Stem<'a> },
}

impl<'a> Attribute<'a> {
    /// Key used for merge grouping.
    pub fn key(&self) -> &str {
        match self {
            Attribute::KeyValue { key, .. } | Attribute::Boolean { key } => key,
        }
    }

    pub(crate) fn key_stem(&self) -> &Stem<'a> {
        match self {
            Attribute::KeyValue { key, .. } | Attribute::Boolean { key } => key,
        }
    }

    /// The value, or `None` for a boolean attribute.
    pub fn value(&self) -> Option<&str> {
        match self {
            Attribute::KeyValue { value, .. } => Some(value),
            Attribute::Boolean { .. } => None,
        }
    }

    /// Returns true if this is a presence-only attribute.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Attribute::Boolean { .. })
    }

    /// Detach from any borrowed input.
    pub fn into_owned(self) -> Attribute<'static> {
        match self {
            Attribute::KeyValue { key, value } => Attribute::KeyValue {
                key: key.into_owned(),
                value: value.into_owned(),
            },
            Attribute::Boolean { key } => Attribute::Boolean {
                key: key.into_owned(),
            },
        }
    }
}

/// One element of the tree.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum Node<'a> {
    /// Text, emitted verbatim. Any escaping already happened at construction.
    Text(Stem<'a>),
    /// A container element with an end tag.
    Element {
        tag: Stem<'a>,
        attrs: Attrs<'a>,
        children: Vec<Node<'a>>,
    },
    /// An element that never has children or an end tag.
    SelfClosing { tag: Stem<'a>, attrs: Attrs<'a> },
}

impl<'a> Node<'a> {
    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns true if this is a container element.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Returns true if this is a self-closing element.
    pub fn is_self_closing(&self) -> bool {
        matches!(self, Node::SelfClosing { .. })
    }

    /// Tag name, `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Text(_) => None,
            Node::Element { tag, .. } | Node::SelfClosing { tag, .. } => Some(tag),
        }
    }

    /// Attributes as declared (not merged). Empty for text.
    pub fn attrs(&self) -> &[Attribute<'a>] {
        match self {
            Node::Text(_) => &[],
            Node::Element { attrs, .. } | Node::SelfClosing { attrs, .. } => attrs,
        }
    }

    /// Child nodes. Empty for text and self-closing nodes.
    pub fn children(&self) -> &[Node<'a>] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) | Node::SelfClosing { .. } => &[],
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Concatenated text payloads of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::SelfClosing { .. } => {}
        }
    }

    /// Detach the whole subtree from any borrowed input.
    pub fn into_owned(self) -> Node<'static> {
        match self {
            Node::Text(t) => Node::Text(t.into_owned()),
            Node::Element {
                tag,
                attrs,
                children,
            } => Node::Element {
                tag: tag.into_owned(),
                attrs: attrs.into_iter().map(Attribute::into_owned).collect(),
                children: children.into_iter().map(Node::into_owned).collect(),
            },
            Node::SelfClosing { tag, attrs } => Node::SelfClosing {
                tag: tag.into_owned(),
                attrs: attrs.into_iter().map(Attribute::into_owned).collect(),
            },
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Node<'static>>();
    assert_sync::<Node<'static>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attr, elem, text};
    use facet_testhelpers::test;

    #[test]
    fn test_attribute_keys() {
        assert_eq!(attr::class("a").key(), "class");
        assert_eq!(attr::checked().key(), "checked");
        assert_eq!(attr::checked().value(), None);
        assert_eq!(attr::id("main").value(), Some("main"));
        assert!(attr::hidden().is_boolean());
    }

    #[test]
    fn test_node_accessors() {
        let input = elem::input([attr::type_("text")]);
        assert!(input.is_self_closing());
        assert_eq!(input.tag(), Some("input"));
        assert_eq!(input.attrs().len(), 1);
        assert!(input.children().is_empty());

        let t = text::raw("hi");
        assert!(t.is_text());
        assert_eq!(t.tag(), None);
        assert_eq!(t.as_text(), Some("hi"));
        assert!(t.attrs().is_empty());
    }

    #[test]
    fn test_text_content() {
        let div = elem::div(
            [],
            [
                text::raw("Hello "),
                elem::span([], [text::raw("world")]),
                elem::br([]),
                text::raw("!"),
            ],
        );
        assert!(div.is_element());
        assert_eq!(div.text_content(), "Hello world!");
    }

    #[test]
    fn test_into_owned_preserves_tree() {
        let label = String::from("dynamic");
        let node = elem::p([attr::custom("data-x", &label)], [text::raw(&label)]);
        let owned: Node<'static> = node.clone().into_owned();
        assert_eq!(owned, node);
    }
}
