//! An ordered set. Adding a value that is already present leaves the stored value alone.
//!
//! # Examples
//!
//! ```
//! use gentree::Set;
//!
//! let mut set = Set::new();
//!
//! assert!(set.add(3));
//! assert!(set.add(1));
//! assert!(!set.add(3));
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3]);
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1));
//! ```

use std::fmt;

use crate::compare::{Comparator, Identity, Natural};
use crate::error::TreeError;
use crate::traverse::{IntoIter, Iter};
use crate::tree::GenTree;

/// A set of unique values ordered by `C`.
pub struct Set<T, C = Natural> {
    tree: GenTree<T, Identity, C>,
}

impl<T: Ord> Set<T> {
    /// Generates a new, empty `Set` ordered by `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Set<T, C> {
    /// Generates a new, empty `Set` ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: GenTree::with_strategy(Identity, comparator),
        }
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// The smallest value.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// The largest value.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }
}

impl<T, C: Comparator<T>> Set<T, C> {
    /// Adds `value` unless an equal value is already present. Returns whether it was added.
    pub fn add(&mut self, value: T) -> bool {
        self.tree.try_add(value).is_ok()
    }

    /// Removes the value equal to `value`. Returns whether there was one.
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value)
    }

    /// Whether a value equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    /// The stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.get(value)
    }

    /// See [`GenTree::validate`].
    pub fn validate(&self) -> Result<(), TreeError> {
        self.tree.validate()
    }
}

impl<T: Clone, C: Clone> Clone for Set<T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<T: PartialEq, C> PartialEq for Set<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq, C> Eq for Set<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for Set<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for Set<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.tree.into_iter()
    }
}

impl<T, C: Comparator<T>> Extend<T> for Set<T, C> {
    /// Adds every value, keeping the first of any equal values.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Reversed;

    #[test]
    fn duplicates_are_rejected() {
        let mut set = Set::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert!(set.add((1, 'a')));
        assert!(!set.add((1, 'b')));
        assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_iter_keeps_first_and_sorts() {
        let set: Set<i32> = [3, 1, 2, 3, 1].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        set.validate().unwrap();
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }

    #[test]
    fn reversed_order() {
        let mut set = Set::with_comparator(Reversed);
        set.extend(0..5);
        assert_eq!(set.first(), Some(&4));
        assert_eq!(set.last(), Some(&0));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn remove_and_take() {
        let mut set: Set<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert!(set.contains(&"b".to_string()));
        assert!(set.remove(&"b".to_string()));
        assert!(!set.remove(&"b".to_string()));
        assert_eq!(set.take(&"c".to_string()), Some("c".to_string()));
        assert_eq!(set.len(), 1);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn clones_are_independent() {
        let mut set: Set<i32> = (0..100).collect();
        let copy = set.clone();
        for x in 0..100 {
            set.remove(&x);
        }
        assert!(set.is_empty());
        assert_eq!(copy.len(), 100);
        assert_eq!(copy, (0..100).collect::<Set<i32>>());
    }
}
