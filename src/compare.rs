//! The two strategies a tree is configured with: how to get a key out of a payload and how to
//! order keys. Both are plain values handed to the tree when it is built, so a tree never consults
//! any global state and every call is resolved statically.
//!
//! # Examples
//!
//! ```
//! use gentree::{First, GenTree, Reversed};
//!
//! // A map-like tree of `(name, age)` pairs ordered by name, largest first.
//! let mut tree = GenTree::with_strategy(First, Reversed);
//! tree.add(("ada", 36));
//! tree.add(("grace", 85));
//!
//! assert_eq!(tree.get(&"grace"), Some(&("grace", 85)));
//! assert_eq!(tree.first(), Some(&("grace", 85)));
//! ```

use std::cmp::Ordering;

/// Extracts the key a payload is ordered by.
pub trait KeyOf<T> {
    /// The key type.
    type Key;

    /// Borrows the key of `payload`.
    fn key<'a>(&self, payload: &'a T) -> &'a Self::Key;
}

/// The payload is its own key, as in a set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl<T> KeyOf<T> for Identity {
    type Key = T;

    fn key<'a>(&self, payload: &'a T) -> &'a T {
        payload
    }
}

/// The key is the first element of a `(key, value)` pair, as in a map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct First;

impl<K, V> KeyOf<(K, V)> for First {
    type Key = K;

    fn key<'a>(&self, payload: &'a (K, V)) -> &'a K {
        &payload.0
    }
}

/// A three-way comparison of keys. It has to be a strict total order over every key that is ever
/// in the tree at the same time; a comparator that isn't leaves the tree in an unspecified (but
/// memory safe) order.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator.
pub trait Comparator<K: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed;

impl<K: Ord + ?Sized> Comparator<K> for Reversed {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapters() {
        assert_eq!(Identity.key(&5), &5);
        assert_eq!(First.key(&("key", 1)), &"key");
    }

    #[test]
    fn comparators() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Reversed.compare(&1, &2), Ordering::Greater);

        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
        assert_eq!(by_len.compare(&"ab", &"de"), Ordering::Equal);
    }
}
