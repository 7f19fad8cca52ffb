//! Element factories.
//!
//! Container tags take `(attrs, children)`, self-closing tags take `(attrs)`.
//! Both accept anything iterable, so arrays, `Vec`s and iterator chains work:
//!
//! ```
//! use cinderblock::{attr, elem, text};
//!
//! let items = ["one", "two"];
//! let list = elem::ul(
//!     [attr::class("items")],
//!     items.iter().map(|item| elem::li([], [text::encoded(*item)])),
//! );
//! assert_eq!(
//!     list.to_html(),
//!     r#"<ul class="items"><li>one</li><li>two</li></ul>"#
//! );
//! ```
//!
//! [`plain`] has the same factories without the attribute argument.

use crate::Stem;
use crate::error::{MarkupError, check_tag_name};
use crate::node::{Attribute, Node};

macro_rules! tags {
    (
        container { $($name:ident => $tag:literal;)* }
        self_closing { $($void_name:ident => $void_tag:literal;)* }
    ) => {
        $(
            #[doc = concat!("`<", $tag, ">`")]
            pub fn $name<'a>(
                attrs: impl IntoIterator<Item = Attribute<'a>>,
                children: impl IntoIterator<Item = Node<'a>>,
            ) -> Node<'a> {
                create($tag, attrs, children)
            }
        )*

        $(
            #[doc = concat!("`<", $void_tag, " />`")]
            pub fn $void_name<'a>(attrs: impl IntoIterator<Item = Attribute<'a>>) -> Node<'a> {
                create_self_closing($void_tag, attrs)
            }
        )*

        /// Factories that default the attribute list to empty.
        pub mod plain {
            use crate::node::Node;

            $(
                #[doc = concat!("`<", $tag, ">` without attributes")]
                pub fn $name<'a>(children: impl IntoIterator<Item = Node<'a>>) -> Node<'a> {
                    super::$name([], children)
                }
            )*

            $(
                #[doc = concat!("`<", $void_tag, " />` without attributes")]
                pub fn $void_name() -> Node<'static> {
                    super::$void_name([])
                }
            )*
        }
    };
}

tags! {
    container {
        html => "html";
        head => "head";
        body => "body";
        title => "title";
        style => "style";
        script => "script";
        div => "div";
        p => "p";
        span => "span";
        a => "a";
        h1 => "h1";
        h2 => "h2";
        h3 => "h3";
        h4 => "h4";
        h5 => "h5";
        h6 => "h6";
        ul => "ul";
        ol => "ol";
        li => "li";
        nav => "nav";
        header => "header";
        footer => "footer";
        main => "main";
        section => "section";
        article => "article";
        pre => "pre";
        code => "code";
        em => "em";
        strong => "strong";
        table => "table";
        thead => "thead";
        tbody => "tbody";
        tr => "tr";
        th => "th";
        td => "td";
        form => "form";
        label => "label";
        button => "button";
        select => "select";
        option => "option";
        textarea => "textarea";
    }
    self_closing {
        input => "input";
        img => "img";
        br => "br";
        hr => "hr";
        meta => "meta";
        link => "link";
        area => "area";
        base => "base";
        col => "col";
        source => "source";
        wbr => "wbr";
    }
}

/// A container element with an arbitrary tag.
///
/// The tag is embedded as given, empty or not. Use [`try_create`] when the
/// name comes from outside the program.
pub fn create<'a>(
    tag: impl Into<Stem<'a>>,
    attrs: impl IntoIterator<Item = Attribute<'a>>,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Node<'a> {
    Node::Element {
        tag: tag.into(),
        attrs: attrs.into_iter().collect(),
        children: children.into_iter().collect(),
    }
}

/// A self-closing element with an arbitrary tag, passed through unchecked
/// like [`create`].
pub fn create_self_closing<'a>(
    tag: impl Into<Stem<'a>>,
    attrs: impl IntoIterator<Item = Attribute<'a>>,
) -> Node<'a> {
    Node::SelfClosing {
        tag: tag.into(),
        attrs: attrs.into_iter().collect(),
    }
}

/// Like [`create`], but rejects tag names that are empty or would break the
/// markup.
pub fn try_create<'a>(
    tag: impl Into<Stem<'a>>,
    attrs: impl IntoIterator<Item = Attribute<'a>>,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Result<Node<'a>, MarkupError> {
    let tag = tag.into();
    check_tag_name(&tag)?;
    Ok(create(tag, attrs, children))
}

/// Like [`create_self_closing`], but rejects tag names that are empty or
/// would break the markup.
pub fn try_create_self_closing<'a>(
    tag: impl Into<Stem<'a>>,
    attrs: impl IntoIterator<Item = Attribute<'a>>,
) -> Result<Node<'a>, MarkupError> {
    let tag = tag.into();
    check_tag_name(&tag)?;
    Ok(create_self_closing(tag, attrs))
}

/// An empty child list.
pub fn empty<'a>() -> Vec<Node<'a>> {
    Vec::new()
}
