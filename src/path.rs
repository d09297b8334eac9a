//! The record of a descent from the root, used to walk back up without parent pointers or
//! recursion.

use std::ptr::NonNull;

use arrayvec::ArrayVec;

use crate::node::{node_mut, Direction, Link, Node};

/// Capacity of a [`PathStack`]. An AVL tree of height `h` holds at least `fib(h + 2) - 1` nodes,
/// so reaching 64 levels takes more than 10^13 nodes.
pub const MAX_HEIGHT: usize = 64;

/// The nodes visited while descending from the root together with the side taken out of each.
/// The bottom entry is the root; the top entry is the parent of wherever the descent stopped.
pub(crate) struct PathStack<T> {
    entries: ArrayVec<(NonNull<Node<T>>, Direction), MAX_HEIGHT>,
}

impl<T> PathStack<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// ## Panics
    ///
    /// When the stack already holds [`MAX_HEIGHT`] entries, which means the tree is no longer
    /// height-balanced.
    pub(crate) fn push(&mut self, node: NonNull<Node<T>>, direction: Direction) {
        if self.entries.try_push((node, direction)).is_err() {
            panic!("path deeper than {MAX_HEIGHT} levels: tree is not balanced");
        }
    }

    /// ## Panics
    ///
    /// When the stack is empty.
    pub(crate) fn pop(&mut self) -> (NonNull<Node<T>>, Direction) {
        self.entries.pop().expect("pop from an empty path")
    }

    pub(crate) fn top_node(&self) -> Option<NonNull<Node<T>>> {
        self.entries.last().map(|&(node, _)| node)
    }

    pub(crate) fn top_direction(&self) -> Option<Direction> {
        self.entries.last().map(|&(_, direction)| direction)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// The link that the descent recorded here ends in: the root link when nothing has been
    /// pushed, otherwise the child link of the top node on the recorded side. Writing a subtree
    /// into the returned slot is how every splice and rotation reattaches its result.
    ///
    /// # Safety
    ///
    /// Every node on the stack must still be live and part of the tree rooted at `root`, and
    /// nothing else may borrow the returned slot for `'a`.
    pub(crate) unsafe fn slot<'a>(&self, root: &'a mut Link<T>) -> &'a mut Link<T> {
        match (self.top_node(), self.top_direction()) {
            (Some(node), Some(direction)) => node_mut(node).child_mut(direction),
            _ => root,
        }
    }
}
