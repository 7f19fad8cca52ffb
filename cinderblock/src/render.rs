//! Tree-to-string renderer.
//!
//! Output is one continuous string:
//!
//! - text payloads are written verbatim (escaping happened at construction)
//! - self-closing nodes become `<tag attrs />`
//! - elements become `<tag attrs>children</tag>`, even when empty
//! - attributes are merged per element (see [`crate::merge`]) and written
//!   as ` key="value"` or ` key`, values unescaped
//!
//! No whitespace or indentation is added.

use std::fmt::{self, Write};

use crate::debug;
use crate::merge::{Merged, merge_refs};
use crate::node::{Attribute, Node};

/// Render a node and its subtree to an HTML string.
pub fn render_to_string(node: &Node<'_>) -> String {
    let mut out = String::new();
    let mut renderer = Renderer::new(&mut out);
    renderer.write_node(node);
    debug!(len = out.len(), "rendered tree");
    out
}

/// Render a sequence of sibling nodes to an HTML string.
pub fn render_fragment(nodes: &[Node<'_>]) -> String {
    let mut out = String::new();
    let mut renderer = Renderer::new(&mut out);
    for node in nodes {
        renderer.write_node(node);
    }
    debug!(roots = nodes.len(), len = out.len(), "rendered fragment");
    out
}

/// Render a node into any [`fmt::Write`] sink.
///
/// Rendering itself cannot fail; the only error source is the sink.
pub fn render_into<W: Write>(node: &Node<'_>, out: &mut W) -> fmt::Result {
    let mut renderer = Renderer::new(out);
    renderer.write_node(node);
    renderer.result
}

struct Renderer<'w, W: Write> {
    out: &'w mut W,
    result: fmt::Result,
}

impl<'w, W: Write> Renderer<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self {
            out,
            result: Ok(()),
        }
    }

    fn write_str(&mut self, s: &str) {
        if self.result.is_ok() {
            self.result = self.out.write_str(s);
        }
    }

    fn write_node(&mut self, node: &Node<'_>) {
        match node {
            Node::Text(text) => self.write_str(text),
            Node::SelfClosing { tag, attrs } => {
                self.write_str("<");
                self.write_str(tag);
                self.write_attrs(attrs);
                self.write_str(" />");
            }
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                self.write_str("<");
                self.write_str(tag);
                self.write_attrs(attrs);
                self.write_str(">");
                for child in children {
                    self.write_node(child);
                }
                self.write_str("</");
                self.write_str(tag);
                self.write_str(">");
            }
        }
    }

    fn write_attrs(&mut self, attrs: &[Attribute<'_>]) {
        if attrs.is_empty() {
            return;
        }
        for merged in merge_refs(attrs) {
            self.write_attr(&merged);
        }
    }

    fn write_attr(&mut self, attr: &Merged<'_, '_>) {
        self.write_str(" ");
        self.write_str(attr.key());
        if let Some(value) = attr.value() {
            self.write_str("=\"");
            self.write_str(value);
            self.write_str("\"");
        }
    }
}

// =============================================================================
// Convenience methods on Node
// =============================================================================

impl Node<'_> {
    /// Render this node and its subtree to an HTML string.
    pub fn to_html(&self) -> String {
        render_to_string(self)
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_into(self, f)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attr, elem, text};
    use facet_testhelpers::test;

    #[test]
    fn test_text_verbatim() {
        assert_eq!(text::raw("a < b").to_html(), "a < b");
        assert_eq!(text::encoded("a < b").to_html(), "a &lt; b");
    }

    #[test]
    fn test_empty_element_keeps_end_tag() {
        assert_eq!(elem::div([], []).to_html(), "<div></div>");
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(elem::br([]).to_html(), "<br />");
        assert_eq!(
            elem::img([attr::src("/a.png"), attr::alt("")]).to_html(),
            r#"<img src="/a.png" alt="" />"#
        );
    }

    #[test]
    fn test_attributes_merged_at_render() {
        let node = elem::a(
            [
                attr::class("btn"),
                attr::href("/old"),
                attr::class("primary"),
                attr::href("/new"),
            ],
            [text::raw("go")],
        );
        assert_eq!(
            node.to_html(),
            r#"<a class="btn primary" href="/new">go</a>"#
        );
    }

    #[test]
    fn test_attribute_values_not_escaped() {
        let node = elem::div([attr::title(r#"say "hi""#)], []);
        assert_eq!(node.to_html(), r#"<div title="say "hi""></div>"#);
    }

    #[test]
    fn test_fragment() {
        let nodes = [elem::plain::li([text::raw("a")]), elem::plain::li([text::raw("b")])];
        assert_eq!(render_fragment(&nodes), "<li>a</li><li>b</li>");
        assert_eq!(render_fragment(&[]), "");
    }

    #[test]
    fn test_display_and_render_into_agree() {
        let node = elem::p([attr::id("x")], [text::raw("y")]);
        let mut buf = String::new();
        render_into(&node, &mut buf).unwrap();
        assert_eq!(buf, node.to_string());
        assert_eq!(buf, render_to_string(&node));
    }

    #[test]
    fn test_sink_error_propagates() {
        struct Failing;
        impl Write for Failing {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        assert!(render_into(&elem::plain::hr(), &mut Failing).is_err());
    }
}
