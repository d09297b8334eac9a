//! The vertex type shared by every engine in this crate.

use std::ptr::NonNull;

/// A possibly empty owning pointer to a [`Node`]. Every non-`None` link in a tree is the unique
/// owner of the node it points at; the node was allocated by [`Node::new_leaked`] and is released
/// exactly once by [`Node::free`].
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// Which child of a node a descent went into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    /// How the balance factor of a parent moves when the subtree on this side grows by one
    /// level.
    pub(crate) fn grow(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A tree vertex. `balance` is `height(right) - height(left)` and lies in `-1..=1` whenever the
/// tree is observable from outside the engines.
///
/// A `Node` doesn't drop its children. Tearing a tree down is done iteratively by the tree (see
/// [`crate::traverse`]) so that no recursion happens however tall the tree is.
pub(crate) struct Node<T> {
    pub(crate) payload: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) balance: i8,
}

impl<T> Node<T> {
    /// Allocates a childless node and releases ownership of it to the caller.
    pub(crate) fn new_leaked(payload: T) -> NonNull<Self> {
        Self::leak(payload, 0)
    }

    pub(crate) fn leak(payload: T, balance: i8) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            payload,
            left: None,
            right: None,
            balance,
        })))
    }

    /// Releases a node and hands back its payload. The node's links are discarded without being
    /// followed.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::new_leaked`]/[`Node::leak`], must not have been freed already
    /// and must not be reachable from any link that will be dereferenced afterwards.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> T {
        Box::from_raw(node.as_ptr()).payload
    }

    pub(crate) fn child(&self, direction: Direction) -> Link<T> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Borrows the node behind a link.
///
/// # Safety
///
/// The node must be live and not mutably aliased for `'a`.
pub(crate) unsafe fn node_ref<'a, T>(node: NonNull<Node<T>>) -> &'a Node<T> {
    &*node.as_ptr()
}

/// Mutably borrows the node behind a link.
///
/// # Safety
///
/// The node must be live and not otherwise borrowed for `'a`.
pub(crate) unsafe fn node_mut<'a, T>(node: NonNull<Node<T>>) -> &'a mut Node<T> {
    &mut *node.as_ptr()
}
