//! Ordered, duplicate-free lists of style classes

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::conflict::{conflict_key, ConflictKey};

/// An ordered list of class tokens.
///
/// Tokens are split on whitespace when added. Empty tokens are dropped and a
/// token that is already present is skipped, so the first occurrence keeps its
/// position.
///
/// There are two ways to grow a list:
///
/// - [`ClassList::add`] appends literally. Tokens that target the same
///   property are all kept and the cascade decides which one wins. Theme
///   bundles are built this way.
/// - [`ClassList::merge`] lets the incoming classes replace earlier tokens in
///   the same conflict group under the same variant, so a component's caller
///   can override its base classes (`px-2` replaces `px-2.5`, `py-3` replaces
///   `pt-0`). Tokens within one incoming batch never replace each other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClassList {
    tokens: SmallVec<[String; 8]>,
}

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space separated class string
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.add(classes);
        list
    }

    /// Append every token of `classes`
    pub fn add(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    /// Builder form of [`ClassList::add`]
    pub fn with(mut self, classes: &str) -> Self {
        self.add(classes);
        self
    }

    /// Append every token of another list
    pub fn extend(&mut self, other: &ClassList) {
        for token in other.iter() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    /// Builder form of [`ClassList::extend`]
    pub fn extended(mut self, other: &ClassList) -> Self {
        self.extend(other);
        self
    }

    /// Append `classes`, dropping earlier tokens they conflict with
    pub fn merge(&mut self, classes: &str) {
        let incoming: SmallVec<[&str; 8]> = classes.split_whitespace().collect();
        self.merge_tokens(&incoming);
    }

    /// [`ClassList::merge`] with another list as the incoming batch
    pub fn merge_from(&mut self, other: &ClassList) {
        let incoming: SmallVec<[&str; 8]> = other.iter().collect();
        self.merge_tokens(&incoming);
    }

    fn merge_tokens(&mut self, incoming: &[&str]) {
        let keys: SmallVec<[ConflictKey<'_>; 8]> = incoming
            .iter()
            .filter(|token| !self.contains(token))
            .filter_map(|token| conflict_key(token))
            .collect();

        if !keys.is_empty() {
            self.tokens.retain(|existing| match conflict_key(existing) {
                Some(earlier) => !keys.iter().any(|later| later.overrides(&earlier)),
                None => true,
            });
        }

        for token in incoming {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// True when every token of `classes` is present
    pub fn contains_all(&self, classes: &str) -> bool {
        classes.split_whitespace().all(|t| self.contains(t))
    }

    /// Position of a token, used to check cascade order
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Display for ClassList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

/// Compose several class strings into one list, shadcn `cn()` style.
///
/// Each part is [merged](ClassList::merge) over the parts before it, so a
/// later utility replaces a conflicting earlier one.
///
/// ```
/// use cardkit_core::cn;
///
/// let classes = cn(["flex items-center", "", "gap-2 flex"]);
/// assert_eq!(classes.to_string(), "flex items-center gap-2");
///
/// let classes = cn(["px-2.5 py-0.5 font-semibold", "px-2 font-bold"]);
/// assert_eq!(classes.to_string(), "py-0.5 px-2 font-bold");
/// ```
pub fn cn<I, S>(parts: I) -> ClassList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = ClassList::new();
    for part in parts {
        list.merge(part.as_ref());
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_and_skips_empty_tokens() {
        let list = ClassList::parse("  bg-white   text-gray-900 ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "bg-white text-gray-900");
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let list = ClassList::parse("a b").with("c a");
        assert_eq!(list.to_string(), "a b c");
        assert_eq!(list.position("c"), Some(2));
    }

    #[test]
    fn test_add_keeps_conflicting_tokens() {
        let list = ClassList::parse("hover:text-white").with("hover:bg-white hover:text-gray-900");
        assert!(list.contains("hover:text-white"));
        assert!(list.contains("hover:text-gray-900"));
        assert!(list.position("hover:text-white") < list.position("hover:text-gray-900"));
    }

    #[test]
    fn test_merge_replaces_conflicting_base_tokens() {
        let mut list = ClassList::parse("flex items-center p-6 pt-0");
        list.merge("flex-col bg-white bg-opacity-10 mt-4 py-3");
        assert_eq!(
            list.to_string(),
            "flex items-center p-6 flex-col bg-white bg-opacity-10 mt-4 py-3"
        );
    }

    #[test]
    fn test_merge_keeps_other_variants() {
        let mut list = ClassList::parse("bg-card");
        list.merge("bg-white bg-opacity-10 dark:bg-gray-800 dark:bg-opacity-50");
        assert_eq!(
            list.to_string(),
            "bg-white bg-opacity-10 dark:bg-gray-800 dark:bg-opacity-50"
        );
    }

    #[test]
    fn test_merge_leaves_incoming_batch_intact() {
        let mut list = ClassList::parse("hover:text-foreground");
        list.merge("hover:text-white hover:text-gray-900");
        assert_eq!(list.to_string(), "hover:text-white hover:text-gray-900");
    }

    #[test]
    fn test_merge_skips_exact_duplicates_in_place() {
        let mut list = ClassList::parse("text-xs px-2.5");
        list.merge_from(&ClassList::parse("px-2 text-xs"));
        assert_eq!(list.to_string(), "text-xs px-2");
    }

    #[test]
    fn test_cn_resolves_later_parts() {
        let list = cn(["rounded-lg border shadow-sm", "shadow-lg border-transparent"]);
        assert_eq!(
            list.to_string(),
            "rounded-lg border shadow-lg border-transparent"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let list = ClassList::parse("px-2 py-1");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "\"px-2 py-1\"");

        let back: ClassList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_empty_list_displays_nothing() {
        assert_eq!(ClassList::new().to_string(), "");
        assert!(cn(["", "  "]).is_empty());
    }
}
