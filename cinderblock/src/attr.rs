//! Attribute factories.
//!
//! Values are stored as given. They are **not** escaped, here or at render
//! time: a value containing `"` ends the quoted attribute early. Run untrusted
//! input through [`crate::text::escape_html`] before passing it in.

use crate::Stem;
use crate::node::{Attribute, Attrs};

pub use crate::merge::{is_additive, merge, merge_one};

macro_rules! key_value_attrs {
    ($($(#[$meta:meta])* $name:ident => $key:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<'a>(value: impl Into<Stem<'a>>) -> Attribute<'a> {
                key_value($key, value)
            }
        )*
    };
}

macro_rules! boolean_attrs {
    ($($(#[$meta:meta])* $name:ident => $key:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $name() -> Attribute<'static> {
                Attribute::Boolean { key: Stem::Borrowed($key) }
            }
        )*
    };
}

fn key_value<'a>(key: &'static str, value: impl Into<Stem<'a>>) -> Attribute<'a> {
    Attribute::KeyValue {
        key: Stem::Borrowed(key),
        value: value.into(),
    }
}

key_value_attrs! {
    /// `class`, space-joined when repeated.
    class => "class";
    id => "id";
    /// `style`, `"; "`-joined when repeated.
    style => "style";
    href => "href";
    src => "src";
    alt => "alt";
    title => "title";
    /// `type`
    type_ => "type";
    name => "name";
    value => "value";
    placeholder => "placeholder";
    content => "content";
    lang => "lang";
    charset => "charset";
    rel => "rel";
    action => "action";
    method => "method";
    /// `for`
    for_ => "for";
    /// `accept`, `"; "`-joined when repeated.
    accept => "accept";
    onclick => "onclick";
    onchange => "onchange";
    onsubmit => "onsubmit";
    onload => "onload";
}

boolean_attrs! {
    required => "required";
    disabled => "disabled";
    checked => "checked";
    selected => "selected";
    hidden => "hidden";
}

/// A key-value attribute with an arbitrary key. The key is not validated.
pub fn custom<'a>(key: impl Into<Stem<'a>>, value: impl Into<Stem<'a>>) -> Attribute<'a> {
    Attribute::KeyValue {
        key: key.into(),
        value: value.into(),
    }
}

/// A presence-only attribute with an arbitrary key. The key is not validated.
pub fn custom_bool<'a>(key: impl Into<Stem<'a>>) -> Attribute<'a> {
    Attribute::Boolean { key: key.into() }
}

/// An empty attribute list.
pub fn empty<'a>() -> Attrs<'a> {
    Vec::new()
}
