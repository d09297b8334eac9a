//! This crate provides ordered containers backed by a self-balancing binary search tree (an AVL
//! tree).
//!
//! ## AVL Tree
//!
//! A Binary Search Tree stores records in `Node`s. Each `Node` has a payload and up to two child
//! `Node`s, and for every `Node`:
//!
//! 1. all the `Node`s in its left subtree have a key less than its own key, and
//! 2. all the `Node`s in its right subtree have a key greater than its own key.
//!
//! Searching takes `O(height)`. An AVL tree additionally keeps, in every `Node`, the difference
//! between the heights of its right and left subtrees (its balance factor) and never lets that
//! difference exceed one. Inserting or removing a `Node` can break this, and the tree repairs it
//! with rotations on the way back up from the change. That keeps the height within about
//! `1.44 lg N` for `N` nodes.
//!
//! > Nothing in this crate recurses. Descents record the visited `Node`s on a fixed size stack so
//! > that rebalancing can retrace them, and iteration, cloning and dropping all walk the tree with
//! > an explicit stack. A tree of any shape can be dropped without overflowing the call stack.
//!
//! ## Containers
//!
//! - [`GenTree`] is the general tree. It is configured with a key adapter ([`KeyOf`]) that pulls
//!   the key out of a payload and a [`Comparator`] that orders keys.
//! - [`Set`] stores unique values. Adding a value that is already there is rejected.
//! - [`Map`] stores key/value pairs. Setting an existing key replaces its value.
//!
//! ```
//! use gentree::{Map, Set};
//!
//! let set: Set<_> = [3, 1, 2].into_iter().collect();
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! let mut map = Map::new();
//! map.set("key", 1);
//! assert_eq!(map.get(&"key"), Some(&1));
//! ```
//!
//! None of the containers synchronize internally. They are `Send`/`Sync` when their contents
//! are, so wrap them in a lock to share them between threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod compare;
mod error;
mod insert;
mod map;
mod node;
mod path;
mod raw;
mod remove;
mod rotate;
mod set;
mod traverse;
mod tree;
mod validate;


pub use compare::{Comparator, First, Identity, KeyOf, Natural, Reversed};
pub use error::TreeError;
pub use map::{Map, MapIter};
pub use path::MAX_HEIGHT;
pub use set::Set;
pub use traverse::{IntoIter, Iter};
pub use tree::GenTree;
