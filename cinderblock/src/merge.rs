//! Attribute merging.
//!
//! Several attribute lists declared for the same element collapse into one
//! list with unique keys:
//!
//! - `class` values are joined with a space
//! - `style` and `accept` values are joined with `"; "` and end with `;`
//! - every other key keeps its last declaration
//!
//! Output order is the order in which each key first appears.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::node::{Attribute, Attrs};
use crate::{Stem, trace};

/// Keys whose values accumulate instead of overriding, with their separator.
const ADDITIVE_KEYS: &[(&str, &str)] = &[("class", " "), ("style", "; "), ("accept", "; ")];

fn separator_for(key: &str) -> Option<&'static str> {
    ADDITIVE_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, sep)| *sep)
}

/// Returns true if repeated declarations of `key` are combined rather than overridden.
pub fn is_additive(key: &str) -> bool {
    separator_for(key).is_some()
}

/// One surviving attribute of a merge, borrowing from the declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Merged<'r, 'a> {
    /// The last declaration of an override key.
    Kept(&'r Attribute<'a>),
    /// The combined value of an additive key; `first` is its first declaration.
    Combined {
        first: &'r Attribute<'a>,
        value: String,
    },
}

impl<'r, 'a> Merged<'r, 'a> {
    pub(crate) fn key(&self) -> &str {
        match self {
            Merged::Kept(attr) | Merged::Combined { first: attr, .. } => attr.key(),
        }
    }

    pub(crate) fn value(&self) -> Option<&str> {
        match self {
            Merged::Kept(attr) => attr.value(),
            Merged::Combined { value, .. } => Some(value),
        }
    }

    fn into_attribute(self) -> Attribute<'a> {
        match self {
            Merged::Kept(attr) => attr.clone(),
            Merged::Combined { first, value } => Attribute::KeyValue {
                key: first.key_stem().clone(),
                value: Stem::from(value),
            },
        }
    }
}

/// Merge borrowed declarations, in order.
pub(crate) fn merge_refs<'r, 'a: 'r>(
    attrs: impl IntoIterator<Item = &'r Attribute<'a>>,
) -> Vec<Merged<'r, 'a>> {
    let mut groups: IndexMap<&'r str, SmallVec<[&'r Attribute<'a>; 2]>> = IndexMap::new();
    for attr in attrs {
        groups.entry(attr.key()).or_default().push(attr);
    }

    groups
        .into_iter()
        .filter_map(|(key, members)| match separator_for(key) {
            Some(separator) => Some(Merged::Combined {
                first: members[0],
                value: combine(&members, separator),
            }),
            None => {
                if members.len() > 1 {
                    trace!(key, shadowed = members.len() - 1, "attribute overridden");
                }
                members.last().copied().map(Merged::Kept)
            }
        })
        .collect()
}

/// Join the key-value members of an additive group. Boolean members carry no
/// value and are skipped.
fn combine(members: &[&Attribute<'_>], separator: &str) -> String {
    let mut out = String::new();
    for (i, value) in members.iter().filter_map(|attr| attr.value()).enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(value.trim_end().trim_end_matches(';'));
    }
    out.push_str(separator.trim());
    out
}

/// Merge any number of attribute lists into one list with unique keys.
///
/// ```
/// use cinderblock::attr;
///
/// let merged = attr::merge([
///     vec![attr::class("btn"), attr::id("first")],
///     vec![attr::class("primary"), attr::id("second")],
/// ]);
/// assert_eq!(merged, vec![attr::class("btn primary"), attr::id("second")]);
/// ```
pub fn merge<'a, L>(lists: impl IntoIterator<Item = L>) -> Attrs<'a>
where
    L: IntoIterator<Item = Attribute<'a>>,
{
    let all: Attrs<'a> = lists.into_iter().flatten().collect();
    merge_one(&all)
}

/// Merge a single declared list, as the renderer does for every element.
pub fn merge_one<'a>(attrs: &[Attribute<'a>]) -> Attrs<'a> {
    merge_refs(attrs)
        .into_iter()
        .map(Merged::into_attribute)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr;
    use facet_testhelpers::test;

    #[test]
    fn test_empty_input() {
        assert!(merge_one(&[]).is_empty());
        assert!(merge(Vec::<Attrs<'_>>::new()).is_empty());
    }

    #[test]
    fn test_class_joined_with_space() {
        let merged = merge_one(&[attr::class("a"), attr::class("b")]);
        assert_eq!(merged, vec![attr::class("a b")]);
    }

    #[test]
    fn test_style_joined_with_semicolon() {
        let merged = merge_one(&[attr::style("color: red;"), attr::style("background: blue;")]);
        assert_eq!(merged, vec![attr::style("color: red; background: blue;")]);
    }

    #[test]
    fn test_single_style_gains_trailing_semicolon() {
        let merged = merge_one(&[attr::style("color: red")]);
        assert_eq!(merged, vec![attr::style("color: red;")]);
    }

    #[test]
    fn test_accept_is_additive() {
        let merged = merge_one(&[attr::accept("image/png"), attr::accept("image/jpeg")]);
        assert_eq!(merged, vec![attr::accept("image/png; image/jpeg;")]);
    }

    #[test]
    fn test_trailing_whitespace_and_semicolons_trimmed() {
        let merged = merge_one(&[attr::class("a  "), attr::class("b;;")]);
        assert_eq!(merged, vec![attr::class("a b")]);

        let merged = merge_one(&[attr::style("margin: 0;; "), attr::style("padding: 0")]);
        assert_eq!(merged, vec![attr::style("margin: 0; padding: 0;")]);
    }

    #[test]
    fn test_override_keeps_last() {
        let merged = merge_one(&[attr::id("first"), attr::id("second"), attr::id("third")]);
        assert_eq!(merged, vec![attr::id("third")]);
    }

    #[test]
    fn test_first_occurrence_order() {
        let merged = merge_one(&[
            attr::id("x"),
            attr::class("a"),
            attr::href("/"),
            attr::class("b"),
            attr::id("y"),
        ]);
        let keys: Vec<_> = merged.iter().map(|a| a.key()).collect();
        assert_eq!(keys, ["id", "class", "href"]);
        assert_eq!(merged[0], attr::id("y"));
        assert_eq!(merged[1], attr::class("a b"));
    }

    #[test]
    fn test_mixed_variants_last_wins() {
        let merged = merge_one(&[attr::custom("disabled", "false"), attr::disabled()]);
        assert_eq!(merged, vec![attr::disabled()]);

        let merged = merge_one(&[attr::disabled(), attr::custom("disabled", "false")]);
        assert_eq!(merged, vec![attr::custom("disabled", "false")]);
    }

    #[test]
    fn test_boolean_members_of_additive_group_dropped() {
        let merged = merge_one(&[attr::custom_bool("class"), attr::class("a")]);
        assert_eq!(merged, vec![attr::class("a")]);

        let merged = merge_one(&[attr::custom_bool("style")]);
        assert_eq!(merged, vec![attr::style(";")]);
    }

    #[test]
    fn test_merge_concatenates_lists() {
        let merged = merge([
            vec![attr::class("card"), attr::id("one")],
            vec![],
            vec![attr::class("shadow"), attr::required()],
        ]);
        assert_eq!(
            merged,
            vec![attr::class("card shadow"), attr::id("one"), attr::required()]
        );
    }

    #[test]
    fn test_is_additive() {
        assert!(is_additive("class"));
        assert!(is_additive("style"));
        assert!(is_additive("accept"));
        assert!(!is_additive("id"));
    }
}
