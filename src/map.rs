//! An ordered map. Setting a key that is already present updates its value in place.
//!
//! # Examples
//!
//! ```
//! use gentree::Map;
//!
//! let mut map = Map::new();
//!
//! assert_eq!(map.set("b", 2), None);
//! assert_eq!(map.set("a", 1), None);
//! assert_eq!(map.set("b", 3), Some(2));
//!
//! assert_eq!(map.get(&"b"), Some(&3));
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
//! assert_eq!(map.remove(&"a"), Some(1));
//! ```

use std::fmt;

use crate::compare::{Comparator, First, Natural};
use crate::error::TreeError;
use crate::traverse::{self, Iter};
use crate::tree::GenTree;

/// A map from unique keys ordered by `C` to values.
pub struct Map<K, V, C = Natural> {
    tree: GenTree<(K, V), First, C>,
}

impl<K: Ord, V> Map<K, V> {
    /// Generates a new, empty `Map` ordered by `Ord` on the keys.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K: Ord, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Map<K, V, C> {
    /// Generates a new, empty `Map` ordered by `comparator` on the keys.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: GenTree::with_strategy(First, comparator),
        }
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> MapIter<'_, K, V> {
        MapIter {
            inner: self.tree.iter(),
        }
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|(k, v)| (k, v))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|(k, v)| (k, v))
    }
}

impl<K, V, C: Comparator<K>> Map<K, V, C> {
    /// Associates `value` with `key`, returning the value previously associated with it.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.tree.add((key, value)).map(|(_, old)| old)
    }

    /// The value associated with `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key).map(|(_, v)| v)
    }

    /// Mutable access to the value associated with `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::Map;
    ///
    /// let mut map = Map::new();
    /// map.set(1, vec![1]);
    /// map.get_mut(&1).unwrap().push(2);
    ///
    /// assert_eq!(map.get(&1), Some(&vec![1, 2]));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key).map(|(_, v)| v)
    }

    /// Whether `key` has a value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key).map(|(_, v)| v)
    }

    /// Removes `key`, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove(key)
    }

    /// See [`GenTree::validate`].
    pub fn validate(&self) -> Result<(), TreeError> {
        self.tree.validate()
    }
}

/// A borrowing iterator over the entries of a [`Map`] in ascending key order.
pub struct MapIter<'a, K, V> {
    inner: Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for MapIter<'_, K, V> {}

impl<K: Clone, V: Clone, C: Clone> Clone for Map<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for Map<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq, C> Eq for Map<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Map<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    fn into_iter(self) -> MapIter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for Map<K, V, C> {
    type Item = (K, V);
    type IntoIter = traverse::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for Map<K, V, C> {
    /// Sets every entry, later values replacing earlier ones for the same key.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
