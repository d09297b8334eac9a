//! In-order walks without recursion. The same left-spine-and-backtrack walk drives borrowing
//! iteration, consuming iteration (which is also how a tree is torn down) and deep cloning.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::node::{node_mut, node_ref, Link, Node};
use crate::raw::RawTree;

/// Nodes whose left subtree is being visited (or is done) but which haven't been visited
/// themselves yet. The top is always the next node in order.
pub(crate) struct TraversalStack<T> {
    nodes: Vec<NonNull<Node<T>>>,
}

impl<T> TraversalStack<T> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Pushes `link` and then every left child below it.
    ///
    /// # Safety
    ///
    /// Every node reachable from `link` must be live.
    unsafe fn descend_left(&mut self, mut link: Link<T>) {
        while let Some(node) = link {
            self.nodes.push(node);
            link = node_ref(node).left;
        }
    }

    /// Like [`TraversalStack::descend_left`] but detaches every left child from its parent on the
    /// way down, so that nodes popped later are not reachable from anything still on the stack.
    ///
    /// # Safety
    ///
    /// The caller must own every node reachable from `link`.
    unsafe fn detach_left(&mut self, mut link: Link<T>) {
        while let Some(node) = link {
            self.nodes.push(node);
            link = node_mut(node).left.take();
        }
    }

    fn pop(&mut self) -> Option<NonNull<Node<T>>> {
        self.nodes.pop()
    }
}

/// A borrowing iterator over the payloads of a tree in ascending order.
pub struct Iter<'a, T> {
    stack: TraversalStack<T>,
    remaining: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a RawTree<T>) -> Self {
        let mut stack = TraversalStack::new();
        // SAFETY: the nodes of `tree` are live for `'a`.
        unsafe { stack.descend_left(tree.root) };
        Self {
            stack,
            remaining: tree.len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // SAFETY: the tree is borrowed for `'a` so its nodes are live and not mutated.
        unsafe {
            let node = node_ref::<'a, T>(node);
            self.stack.descend_left(node.right);
            self.remaining -= 1;
            Some(&node.payload)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// SAFETY: an `Iter` only reads through shared references to the payloads.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: as above.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: TraversalStack {
                nodes: self.stack.nodes.clone(),
            },
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

/// An owning iterator over the payloads of a tree in ascending order. Each node is freed as soon
/// as it is yielded; dropping the iterator frees whatever is left.
pub struct IntoIter<T> {
    stack: TraversalStack<T>,
    remaining: usize,
}

// SAFETY: the iterator exclusively owns the nodes it hasn't yielded yet.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: nothing is reachable through `&IntoIter`.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Takes every node out of `tree`, leaving it empty.
    pub(crate) fn new(tree: &mut RawTree<T>) -> Self {
        let root = tree.root.take();
        let remaining = std::mem::take(&mut tree.len);
        let mut stack = TraversalStack::new();
        // SAFETY: the root was taken out of `tree`, so the iterator now owns every node.
        unsafe { stack.detach_left(root) };
        Self { stack, remaining }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.stack.pop()?;
        // SAFETY: `node` was popped so nothing on the stack reaches it; its left child was
        // detached when it was pushed and its right child is detached here. Nothing else links to
        // it any more.
        unsafe {
            let right = node_mut(node).right.take();
            self.stack.detach_left(right);
            self.remaining -= 1;
            Some(Node::free(node))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        self.by_ref().for_each(drop);
    }
}

impl<T> RawTree<T> {
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Frees every node, in order, without recursing.
    pub(crate) fn clear(&mut self) {
        if self.root.is_some() {
            log::debug!("clearing tree of {} nodes", self.len);
        }
        drop(IntoIter::new(self));
    }

    /// Copies the tree node for node, keeping its exact shape and balance factors. The source is
    /// walked in order while a second stack tracks the matching nodes of the copy.
    pub(crate) fn clone_with<F>(&self, mut clone_payload: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mut copy = RawTree::new();
        let Some(root) = self.root else {
            return copy;
        };
        log::debug!("cloning tree of {} nodes", self.len);

        let mut source = TraversalStack::new();
        let mut target = TraversalStack::new();

        // SAFETY: `self`'s nodes are live while it is borrowed. The copy's nodes are freshly
        // allocated, owned by `copy` as soon as they are linked, and each one is linked exactly once.
        unsafe {
            let mut pending = Some(root);
            let mut slot: *mut Link<T> = &mut copy.root;
            loop {
                // Copy the left spine below `pending`, linking each copy into `slot`.
                while let Some(src) = pending {
                    let src_node = node_ref(src);
                    let dst = Node::leak(clone_payload(&src_node.payload), src_node.balance);
                    *slot = Some(dst);
                    copy.len += 1;
                    source.nodes.push(src);
                    target.nodes.push(dst);
                    slot = &mut node_mut(dst).left;
                    pending = src_node.left;
                }

                let (Some(src), Some(dst)) = (source.pop(), target.pop()) else {
                    break;
                };
                pending = node_ref(src).right;
                slot = &mut node_mut(dst).right;
            }
        }

        debug_assert_eq!(copy.len, self.len);
        copy
    }
}
