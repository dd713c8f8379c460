// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered key/value property storage.
//!
//! This module provides the [`Properties`] store used by every section and
//! group in the graph: an insertion-ordered multi-map of trimmed key/value
//! pairs. Duplicate keys are deliberately preserved as separate entries —
//! several pipeline plugins accept repeated properties, and the dump/builder
//! interfaces rely on reproducing them faithfully.

use crate::domain::errors::{ConfigError, Result};
use serde::Serialize;
use std::borrow::Cow;

/// Trims surrounding whitespace from a possibly-borrowed string without
/// allocating when nothing changes.
pub(crate) fn trim_cow(s: Cow<'_, str>) -> Cow<'_, str> {
    match s {
        Cow::Borrowed(b) => Cow::Borrowed(b.trim()),
        Cow::Owned(o) => {
            let trimmed = o.trim();
            if trimmed.len() == o.len() {
                Cow::Owned(o)
            } else {
                Cow::Owned(trimmed.to_string())
            }
        }
    }
}

/// A single key/value property.
///
/// Both key and value have already been trimmed on insertion. The strings may
/// be views borrowed from an external parse buffer (`'a`) or owned; see the
/// crate-level discussion of borrowed vs. owned graphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Property<'a> {
    /// The trimmed, non-empty property key.
    pub key: Cow<'a, str>,
    /// The trimmed property value; may be empty.
    pub value: Cow<'a, str>,
}

/// An insertion-ordered store of key/value properties.
///
/// Entries are kept exactly in the order they were added; duplicate keys are
/// allowed and never merged. Keys and values are trimmed of surrounding
/// whitespace when inserted, and an entry whose key trims to the empty string
/// is rejected without modifying the store.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::Properties;
///
/// let mut props = Properties::new();
/// props.add(" key ", " val   ").unwrap();
/// assert_eq!(props.len(), 1);
/// assert_eq!(props.iter().next().unwrap().key, "key");
/// assert_eq!(props.iter().next().unwrap().value, "val");
///
/// // Whitespace-only keys are rejected, the store is unchanged.
/// assert!(props.add("   ", "anything").is_err());
/// assert_eq!(props.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties<'a> {
    entries: Vec<Property<'a>>,
}

impl<'a> Properties<'a> {
    /// Creates an empty property store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a property, trimming both key and value.
    ///
    /// Returns a reference to the newly stored entry. Fails with
    /// [`ConfigError::InvalidProperty`] if the key is empty after trimming;
    /// the store is left unchanged in that case. An empty *value* is valid.
    ///
    /// Duplicate keys are preserved as distinct entries in insertion order.
    pub fn add(
        &mut self,
        key: impl Into<Cow<'a, str>>,
        value: impl Into<Cow<'a, str>>,
    ) -> Result<&Property<'a>> {
        let key = trim_cow(key.into());
        if key.is_empty() {
            return Err(ConfigError::InvalidProperty);
        }
        let value = trim_cow(value.into());
        let idx = self.entries.len();
        self.entries.push(Property { key, value });
        Ok(&self.entries[idx])
    }

    /// Returns the value of the first entry whose key matches `key` exactly.
    ///
    /// Later duplicates are reachable through [`iter`](Self::iter).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_ref())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property<'a>> {
        self.entries.iter()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, 's> IntoIterator for &'s Properties<'a> {
    type Item = &'s Property<'a>;
    type IntoIter = std::slice::Iter<'s, Property<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_key_and_value() {
        let mut props = Properties::new();
        let entry = props.add(" key ", " val   ").unwrap();
        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, "val");
    }

    #[test]
    fn test_add_empty_key_fails_and_store_unchanged() {
        let mut props = Properties::new();
        props.add("key", "val").unwrap();
        let err = props.add("   ", "").unwrap_err();
        assert_eq!(err, ConfigError::InvalidProperty);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_add_empty_value_is_valid() {
        let mut props = Properties::new();
        let entry = props.add("key", "").unwrap();
        assert_eq!(entry.value, "");
    }

    #[test]
    fn test_duplicate_keys_preserved_in_order() {
        let mut props = Properties::new();
        props.add("key", "first").unwrap();
        props.add("key", "second").unwrap();
        assert_eq!(props.len(), 2);
        let values: Vec<&str> = props.iter().map(|p| p.value.as_ref()).collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn test_get_returns_first_match() {
        let mut props = Properties::new();
        props.add("a", "1").unwrap();
        props.add("b", "2").unwrap();
        props.add("a", "3").unwrap();
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn test_borrowed_input_stays_borrowed() {
        let buffer = String::from("  spaced  ");
        let mut props = Properties::new();
        let entry = props.add(buffer.as_str(), "v").unwrap();
        assert!(matches!(entry.key, Cow::Borrowed(_)));
        assert_eq!(entry.key, "spaced");
    }

    #[test]
    fn test_trim_cow_owned_avoids_realloc_when_clean() {
        let clean = trim_cow(Cow::Owned("already".to_string()));
        assert_eq!(clean, "already");
        let dirty = trim_cow(Cow::Owned("  messy ".to_string()));
        assert_eq!(dirty, "messy");
    }
}
