//! Errors for checked construction and tree validation.
//!
//! The plain factories never fail. [`crate::elem::create`] and
//! [`crate::attr::custom`] accept any name as given; the checked variants and
//! [`Node::validate`] are there for callers who take names from elsewhere.

use facet::Facet;

use crate::node::{Attribute, Node};

/// Errors reported for malformed tag names or attribute keys.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum MarkupError {
    /// tag name is empty
    EmptyTagName,

    /// invalid tag name `{tag}`
    InvalidTagName { tag: String },

    /// attribute key is empty on <{tag}>
    EmptyAttributeKey { tag: String },

    /// invalid attribute key `{key}` on <{tag}>
    InvalidAttributeKey { tag: String, key: String },
}

/// Characters that would break out of a tag or attribute name.
fn is_forbidden_in_name(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, '/' | '>' | '<' | '"' | '\'' | '=')
}

/// Check that `tag` is usable as an element name.
pub fn check_tag_name(tag: &str) -> Result<(), MarkupError> {
    if tag.is_empty() {
        return Err(MarkupError::EmptyTagName);
    }
    if tag.contains(is_forbidden_in_name) {
        return Err(MarkupError::InvalidTagName {
            tag: tag.to_owned(),
        });
    }
    Ok(())
}

/// Check that `key` is usable as an attribute name on `tag`.
pub fn check_attribute_key(tag: &str, key: &str) -> Result<(), MarkupError> {
    if key.is_empty() {
        return Err(MarkupError::EmptyAttributeKey {
            tag: tag.to_owned(),
        });
    }
    if key.contains(is_forbidden_in_name) {
        return Err(MarkupError::InvalidAttributeKey {
            tag: tag.to_owned(),
            key: key.to_owned(),
        });
    }
    Ok(())
}

fn check_attrs(tag: &str, attrs: &[Attribute<'_>]) -> Result<(), MarkupError> {
    attrs
        .iter()
        .try_for_each(|attr| check_attribute_key(tag, attr.key()))
}

impl Node<'_> {
    /// Check every tag name and attribute key in this subtree.
    ///
    /// Returns the first problem found in document order. Text payloads and
    /// attribute values are not inspected.
    pub fn validate(&self) -> Result<(), MarkupError> {
        match self {
            Node::Text(_) => Ok(()),
            Node::SelfClosing { tag, attrs } => {
                check_tag_name(tag)?;
                check_attrs(tag, attrs)
            }
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                check_tag_name(tag)?;
                check_attrs(tag, attrs)?;
                children.iter().try_for_each(Node::validate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attr, elem, text};
    use facet_testhelpers::test;

    #[test]
    fn test_valid_names() {
        assert_eq!(check_tag_name("my-component"), Ok(()));
        assert_eq!(check_tag_name("h1"), Ok(()));
        assert_eq!(check_attribute_key("div", "data-user-id"), Ok(()));
        assert_eq!(check_attribute_key("svg", "xlink:href"), Ok(()));
    }

    #[test]
    fn test_rejects_empty_tag() {
        assert_eq!(check_tag_name(""), Err(MarkupError::EmptyTagName));
    }

    #[test]
    fn test_rejects_breaking_characters() {
        for tag in ["di v", "div>", "a/b", "x\"y", "p\n"] {
            assert_eq!(
                check_tag_name(tag),
                Err(MarkupError::InvalidTagName {
                    tag: tag.to_string()
                })
            );
        }
        assert_eq!(
            check_attribute_key("div", "on click"),
            Err(MarkupError::InvalidAttributeKey {
                tag: "div".to_string(),
                key: "on click".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_walks_tree() {
        let good = elem::div(
            [attr::class("ok")],
            [elem::br([]), text::raw("<not checked>")],
        );
        assert_eq!(good.validate(), Ok(()));

        let bad = elem::div(
            [],
            [elem::p([], [elem::create_self_closing("bad tag", [])])],
        );
        assert_eq!(
            bad.validate(),
            Err(MarkupError::InvalidTagName {
                tag: "bad tag".to_string()
            })
        );

        let bad_key = elem::span([attr::custom_bool("")], []);
        assert_eq!(
            bad_key.validate(),
            Err(MarkupError::EmptyAttributeKey {
                tag: "span".to_string()
            })
        );
    }
}
