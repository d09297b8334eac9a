//! The ordered container built on the AVL engines.
//!
//! # Examples
//!
//! ```
//! use gentree::GenTree;
//!
//! let mut tree: GenTree<i32> = GenTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.add(1);
//! tree.add(3);
//! tree.add(2);
//! assert!(tree.contains(&2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // Removing returns the payload.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.remove(&2), None);
//! assert_eq!(tree.len(), 2);
//! ```

use std::fmt;

use crate::compare::{Comparator, Identity, KeyOf, Natural};
use crate::error::TreeError;
use crate::node::{node_mut, node_ref, Direction, Link};
use crate::path::PathStack;
use crate::raw::RawTree;
use crate::traverse::{IntoIter, Iter};

/// A height-balanced (AVL) binary search tree of payloads of type `T`.
///
/// Payloads are ordered by the key the adapter `A` extracts from them, compared with `C`. Keys
/// are unique: at most one payload per key is stored.
///
/// Every operation that walks the tree (lookup, insertion, removal, iteration, cloning, dropping)
/// uses an explicit stack instead of recursion.
pub struct GenTree<T, A = Identity, C = Natural> {
    raw: RawTree<T>,
    adapter: A,
    comparator: C,
}

impl<T, A, C> Default for GenTree<T, A, C>
where
    A: Default,
    C: Default,
{
    fn default() -> Self {
        Self::with_strategy(A::default(), C::default())
    }
}

impl<T, A, C> GenTree<T, A, C>
where
    A: Default,
    C: Default,
{
    /// Generates a new, empty `GenTree` with default strategies.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, A, C> GenTree<T, A, C> {
    /// Generates a new, empty `GenTree` that extracts keys with `adapter` and orders them with
    /// `comparator`.
    pub fn with_strategy(adapter: A, comparator: C) -> Self {
        Self {
            raw: RawTree::new(),
            adapter,
            comparator,
        }
    }

    /// The number of payloads in the tree.
    pub fn len(&self) -> usize {
        self.raw.len
    }

    /// Same as [`GenTree::len`].
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Whether the tree holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.raw.root.is_none()
    }

    /// Removes every payload.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Iterates over the payloads in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.raw.iter()
    }

    /// The payload with the smallest key.
    pub fn first(&self) -> Option<&T> {
        self.raw.extreme(Direction::Left)
    }

    /// The payload with the largest key.
    pub fn last(&self) -> Option<&T> {
        self.raw.extreme(Direction::Right)
    }

    /// The key adapter this tree was built with.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, A, C> GenTree<T, A, C>
where
    A: KeyOf<T>,
    C: Comparator<A::Key>,
{
    /// Finds the payload stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::{First, GenTree, Natural};
    ///
    /// let mut tree = GenTree::with_strategy(First, Natural);
    /// tree.add((1, "one"));
    ///
    /// assert_eq!(tree.get(&1), Some(&(1, "one")));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &A::Key) -> Option<&T> {
        let (adapter, comparator) = (&self.adapter, &self.comparator);
        let node = self
            .raw
            .find(|payload| comparator.compare(key, adapter.key(payload)))?;
        // SAFETY: the node belongs to `self.raw`, which is borrowed for the returned lifetime.
        Some(unsafe { &node_ref(node).payload })
    }

    /// Mutable access to the payload stored under `key`. Changing the part of the payload the
    /// key is extracted from would break the ordering, so this stays inside the crate.
    pub(crate) fn get_mut(&mut self, key: &A::Key) -> Option<&mut T> {
        let (adapter, comparator) = (&self.adapter, &self.comparator);
        let node = self
            .raw
            .find(|payload| comparator.compare(key, adapter.key(payload)))?;
        // SAFETY: the node belongs to `self.raw`, which is mutably borrowed for the returned
        // lifetime.
        Some(unsafe { &mut node_mut(node).payload })
    }

    /// Descends towards the key of `payload`, recording the path.
    fn locate(&self, payload: &T) -> (PathStack<T>, Link<T>) {
        let (adapter, comparator) = (&self.adapter, &self.comparator);
        let key = adapter.key(payload);
        self.raw
            .search(|stored| comparator.compare(key, adapter.key(stored)))
    }

    /// Whether a payload is stored under `key`.
    pub fn contains(&self, key: &A::Key) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `payload`. If a payload with the same key is already stored, it is replaced in
    /// place and returned; the shape of the tree doesn't change.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::{First, GenTree, Natural};
    ///
    /// let mut tree = GenTree::with_strategy(First, Natural);
    ///
    /// assert_eq!(tree.add((1, 2)), None);
    /// assert_eq!(tree.add((1, 3)), Some((1, 2)));
    /// assert_eq!(tree.get(&1), Some(&(1, 3)));
    /// ```
    pub fn add(&mut self, payload: T) -> Option<T> {
        let (path, found) = self.locate(&payload);
        match found {
            // SAFETY: the node belongs to `self.raw`, which is mutably borrowed here.
            Some(node) => Some(std::mem::replace(unsafe { &mut node_mut(node).payload }, payload)),
            None => {
                // SAFETY: `path` was built against `self.raw` just now and ends at an empty link.
                unsafe { self.raw.insert_at(path, payload) };
                None
            }
        }
    }

    /// Inserts `payload` unless a payload with the same key is already stored, in which case the
    /// tree is left untouched and `payload` is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::GenTree;
    ///
    /// let mut tree: GenTree<i32> = GenTree::new();
    ///
    /// assert_eq!(tree.try_add(7), Ok(()));
    /// assert_eq!(tree.try_add(7), Err(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_add(&mut self, payload: T) -> Result<(), T> {
        let (path, found) = self.locate(&payload);
        if found.is_some() {
            return Err(payload);
        }
        // SAFETY: `path` was built against `self.raw` just now and ends at an empty link.
        unsafe { self.raw.insert_at(path, payload) };
        Ok(())
    }

    /// Removes the payload stored under `key` and returns it. Removing a key that isn't there
    /// does nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentree::GenTree;
    ///
    /// let mut tree: GenTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 8]);
    /// ```
    pub fn remove(&mut self, key: &A::Key) -> Option<T> {
        let (adapter, comparator) = (&self.adapter, &self.comparator);
        let removed = self
            .raw
            .remove(|payload| comparator.compare(key, adapter.key(payload)));
        if removed.is_none() {
            log::debug!("remove of absent key ignored");
        }
        removed
    }

    /// Like [`GenTree::remove`] but reports an absent key as [`TreeError::KeyNotFound`].
    pub fn try_remove(&mut self, key: &A::Key) -> Result<T, TreeError> {
        self.remove(key).ok_or(TreeError::KeyNotFound)
    }

    /// Checks every structural invariant by walking the whole tree: each node's balance factor
    /// matches the measured heights of its subtrees and lies in `-1..=1`, an in-order walk is
    /// strictly increasing under the comparator, and the count matches the reachable nodes.
    ///
    /// This is `O(n)` and meant for tests and debugging.
    pub fn validate(&self) -> Result<(), TreeError> {
        self.raw.validate_shape()?;
        let (adapter, comparator) = (&self.adapter, &self.comparator);
        self.raw
            .validate_order(|a, b| comparator.compare(adapter.key(a), adapter.key(b)))
    }
}

impl<T, A, C> GenTree<T, A, C>
where
    T: Clone,
    A: Clone,
    C: Clone,
{
    /// Replaces the contents of `self` with a deep copy of `other`, including its strategies.
    pub fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

impl<T, A, C> Clone for GenTree<T, A, C>
where
    T: Clone,
    A: Clone,
    C: Clone,
{
    /// A deep copy with the same shape. Nodes are copied one for one rather than re-inserted.
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone_with(T::clone),
            adapter: self.adapter.clone(),
            comparator: self.comparator.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.raw.clear();
        self.raw = source.raw.clone_with(T::clone);
        self.adapter = source.adapter.clone();
        self.comparator = source.comparator.clone();
    }
}

/// Two trees are equal when they hold equal payloads in the same order. Their shapes may differ.
impl<T, A, C> PartialEq for GenTree<T, A, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut ours = self.iter();
        let mut theirs = other.iter();
        loop {
            match (ours.next(), theirs.next()) {
                (Some(a), Some(b)) if a == b => {}
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq, A, C> Eq for GenTree<T, A, C> {}

impl<T: fmt::Debug, A, C> fmt::Debug for GenTree<T, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, A, C> IntoIterator for &'a GenTree<T, A, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, A, C> IntoIterator for GenTree<T, A, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its payloads in ascending key order.
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter::new(&mut self.raw)
    }
}

impl<T, A, C> Extend<T> for GenTree<T, A, C>
where
    A: KeyOf<T>,
    C: Comparator<A::Key>,
{
    /// Adds every payload, later payloads replacing earlier ones with the same key.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.add(payload);
        }
    }
}

impl<T, A, C> FromIterator<T> for GenTree<T, A, C>
where
    A: KeyOf<T> + Default,
    C: Comparator<A::Key> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::compare::First;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeMap`, checking the invariants after each
    /// one. This way we can ensure that after a random smattering of inserts and deletes we have
    /// the same contents in both.
    fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut GenTree<(K, V), First>, map: &mut BTreeMap<K, V>)
    where
        K: Ord + Clone + std::fmt::Debug,
        V: PartialEq + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    assert_eq!(
                        tree.add((k.clone(), v.clone())).map(|(_, v)| v),
                        map.insert(k.clone(), v.clone())
                    );
                }
                Op::Remove(k) => {
                    assert_eq!(tree.remove(k).map(|(_, v)| v), map.remove(k));
                }
                Op::Iter => {
                    assert!(tree
                        .iter()
                        .map(|(k, v)| (k, v))
                        .eq(map.iter()));
                }
            }
            tree.validate().unwrap();
            assert_eq!(tree.len(), map.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
            let mut tree = GenTree::with_strategy(First, Natural);
            let mut map = BTreeMap::new();

            do_ops(&ops, &mut tree, &mut map);
            map.iter().all(|(key, value)| tree.get(key).map(|(_, v)| v) == Some(value))
        }
    }

    quickcheck::quickcheck! {
        fn clone_matches_original(xs: Vec<i16>) -> bool {
            let tree: GenTree<i16> = xs.into_iter().collect();
            let copy = tree.clone();
            copy.validate().is_ok() && copy == tree
        }
    }

    quickcheck::quickcheck! {
        fn iterates_sorted_and_deduplicated(xs: Vec<i32>) -> bool {
            let tree: GenTree<i32> = xs.iter().copied().collect();
            let mut expected = xs;
            expected.sort_unstable();
            expected.dedup();
            tree.iter().copied().eq(expected)
        }
    }
}
