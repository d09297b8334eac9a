//! Linking a new node at the end of a recorded path and rebalancing on the way back up.

use std::ptr::NonNull;

use crate::node::{node_mut, Node};
use crate::path::PathStack;
use crate::raw::RawTree;
use crate::rotate;

impl<T> RawTree<T> {
    /// Links a new node holding `payload` into the empty link that `path` ends at, then walks the
    /// path back up adjusting balance factors. Returns the new node.
    ///
    /// The walk stops at the first ancestor whose balance becomes `0` (its height didn't change)
    /// or at the first ancestor that needs a rotation (the rotation restores the height it had
    /// before the insert). So at most one single or double rotation happens per insert.
    ///
    /// # Safety
    ///
    /// `path` must come from [`RawTree::search`] on this tree, with no modification of the tree
    /// in between, and must end at an empty link.
    pub(crate) unsafe fn insert_at(&mut self, mut path: PathStack<T>, payload: T) -> NonNull<Node<T>> {
        let new = Node::new_leaked(payload);
        let slot = path.slot(&mut self.root);
        debug_assert!(slot.is_none(), "insertion path must end at an empty link");
        *slot = Some(new);
        self.len += 1;

        while !path.is_empty() {
            let (ancestor, side) = path.pop();
            let ancestor = node_mut(ancestor);
            ancestor.balance += side.grow();
            match ancestor.balance {
                0 => break,
                -1 | 1 => continue,
                _ => {
                    rotate::rebalance(path.slot(&mut self.root));
                    break;
                }
            }
        }

        new
    }
}
