//! Text node factories.
//!
//! Escaping happens here, once, when the node is built. The renderer writes
//! text payloads verbatim.

use std::borrow::Cow;
use std::fmt;

use crate::Stem;
use crate::node::Node;

/// Characters replaced by [`escape_html`].
const ESCAPED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// Borrows when there is nothing to replace.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPED) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Wrap trusted markup unmodified.
///
/// The caller vouches that `content` is safe to embed as-is (static style
/// blocks, pre-sanitized fragments).
pub fn raw<'a>(content: impl Into<Stem<'a>>) -> Node<'a> {
    Node::Text(content.into())
}

/// Escape `content` and wrap the result. Use this for anything user-supplied.
pub fn encoded<'a>(content: impl Into<Stem<'a>>) -> Node<'a> {
    let content = content.into();
    let escaped = match escape_html(&content) {
        Cow::Borrowed(_) => None,
        Cow::Owned(escaped) => Some(escaped),
    };
    match escaped {
        Some(escaped) => Node::Text(Stem::from(escaped)),
        None => Node::Text(content),
    }
}

/// Format and wrap the result unescaped, with the same trust contract as [`raw`].
///
/// Usually reached through [`rawf!`](crate::rawf).
pub fn raw_fmt(args: fmt::Arguments<'_>) -> Node<'static> {
    match args.as_str() {
        Some(s) => Node::Text(Stem::Borrowed(s)),
        None => Node::Text(Stem::from(compact_str::format_compact!("{args}"))),
    }
}

/// Build an unescaped text node from a format string.
///
/// ```
/// let node = cinderblock::rawf!("Hello <b>{0}</b>!", "World");
/// assert_eq!(node.to_html(), "Hello <b>World</b>!");
/// ```
#[macro_export]
macro_rules! rawf {
    ($($arg:tt)*) => {
        $crate::text::raw_fmt(::core::format_args!($($arg)*))
    };
}
