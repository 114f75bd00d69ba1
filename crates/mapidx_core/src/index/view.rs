//! Read-only views over nature buckets.

use crate::index::AttributeKey;
use crate::source::{PluralAttributeSource, SingularAttributeSource};
use indexmap::IndexMap;
use std::fmt;
use std::iter::Flatten;
use std::option;

/// Read-only, insertion-ordered view of one nature bucket.
///
/// A view over a nature that was never populated is simply empty. Views
/// borrow from the index and cannot be used to modify it.
pub struct AttributeView<'a, V> {
    entries: Option<&'a IndexMap<AttributeKey, V>>,
}

/// View of singular attributes keyed by attribute key.
pub type SingularAttributes<'a> = AttributeView<'a, SingularAttributeSource>;

/// View of plural attributes keyed by attribute key.
pub type PluralAttributes<'a> = AttributeView<'a, PluralAttributeSource>;

/// Iterator over the entries of an [`AttributeView`].
pub type ViewIter<'a, V> = Flatten<option::IntoIter<indexmap::map::Iter<'a, AttributeKey, V>>>;

impl<'a, V> AttributeView<'a, V> {
    pub(crate) fn new(entries: Option<&'a IndexMap<AttributeKey, V>>) -> Self {
        Self { entries }
    }

    /// Returns an empty view.
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: None }
    }

    /// Returns the number of attributes in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.map_or(0, |entries| entries.len())
    }

    /// Returns true if the view holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up an attribute by key.
    #[must_use]
    pub fn get(&self, key: &AttributeKey) -> Option<&'a V> {
        self.entries.and_then(|entries| entries.get(key))
    }

    /// Returns true if the view contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.is_some_and(|entries| entries.contains_key(key))
    }

    /// Returns the entry at a position in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&'a AttributeKey, &'a V)> {
        self.entries.and_then(|entries| entries.get_index(index))
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> ViewIter<'a, V> {
        self.entries.map(|entries| entries.iter()).into_iter().flatten()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'a AttributeKey> + 'a {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over attribute sources in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &'a V> + 'a {
        self.iter().map(|(_, value)| value)
    }
}

impl<V> Clone for AttributeView<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for AttributeView<'_, V> {}

impl<V> Default for AttributeView<'_, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: fmt::Debug> fmt::Debug for AttributeView<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for AttributeView<'a, V> {
    type Item = (&'a AttributeKey, &'a V);
    type IntoIter = ViewIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
