//! The untyped core of every tree: an owning root link and a node count. It knows nothing about
//! keys or comparators; descents are steered by a closure that compares the target against a
//! node's payload.

use std::cmp::Ordering;
use std::ptr::NonNull;

use crate::node::{node_ref, Direction, Link, Node};
use crate::path::PathStack;

/// Root and size of an AVL tree.
///
/// The insertion and removal engines live in [`crate::insert`] and [`crate::remove`]; iteration,
/// cloning and teardown live in [`crate::traverse`].
pub(crate) struct RawTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

// SAFETY: A `RawTree` exclusively owns its nodes (no `Rc`, no sharing between trees) so moving it
// to another thread moves every payload with it.
unsafe impl<T: Send> Send for RawTree<T> {}
// SAFETY: `&RawTree` only ever hands out `&T`.
unsafe impl<T: Sync> Sync for RawTree<T> {}

impl<T> Drop for RawTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> RawTree<T> {
    pub(crate) const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Descends from the root, steered by `direction`, which orders the target against a payload
    /// (`Less` means the target sorts before the payload). Returns the recorded path and the node
    /// that compared `Equal`, if any. When nothing matched, the path ends at the empty link where
    /// the target would be inserted.
    pub(crate) fn search<F>(&self, mut direction: F) -> (PathStack<T>, Link<T>)
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut path = PathStack::new();
        let mut current = self.root;
        while let Some(node_ptr) = current {
            // SAFETY: nodes reachable from `self.root` are live while `self` is borrowed.
            let node = unsafe { node_ref(node_ptr) };
            let side = match direction(&node.payload) {
                Ordering::Less => Direction::Left,
                Ordering::Equal => return (path, Some(node_ptr)),
                Ordering::Greater => Direction::Right,
            };
            path.push(node_ptr, side);
            current = node.child(side);
        }
        (path, None)
    }

    /// Like [`RawTree::search`] but without recording the path.
    pub(crate) fn find<F>(&self, mut direction: F) -> Option<NonNull<Node<T>>>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            // SAFETY: nodes reachable from `self.root` are live while `self` is borrowed.
            let node = unsafe { node_ref(node_ptr) };
            current = match direction(&node.payload) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(node_ptr),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// The node reached by always taking `side`, i.e. the smallest or largest payload.
    pub(crate) fn extreme(&self, side: Direction) -> Option<&T> {
        let mut node = self.root?;
        // SAFETY: nodes reachable from `self.root` are live while `self` is borrowed.
        unsafe {
            while let Some(next) = node_ref(node).child(side) {
                node = next;
            }
            Some(&node_ref(node).payload)
        }
    }
}
