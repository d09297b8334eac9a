//! Unlinking a node and rebalancing every ancestor that needs it.

use std::cmp::Ordering;

use crate::node::{node_mut, Direction, Node};
use crate::raw::RawTree;
use crate::rotate;

impl<T> RawTree<T> {
    /// Removes the node whose payload compares `Equal` under `direction` (see
    /// [`RawTree::search`]) and returns its payload, or `None` if there is no such node.
    ///
    /// A node with two children isn't unlinked itself. Its payload is swapped with its in-order
    /// successor, which has no left child and is spliced out instead. The descent to the successor
    /// is recorded on the same path so the rebalancing walk starts where a node actually left the
    /// tree.
    ///
    /// Unlike insertion, a rotation here can leave the subtree shorter than before, so the walk
    /// keeps going after a rotation and may rotate at several ancestors.
    pub(crate) fn remove<F>(&mut self, direction: F) -> Option<T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let (mut path, found) = self.search(direction);
        let found = found?;

        // SAFETY: `path` and `found` were built against this tree just now and the tree hasn't
        // changed since. Each node is borrowed mutably only while no other borrow of it is used.
        unsafe {
            let matched = node_mut(found);
            let removed = match (matched.left, matched.right) {
                (None, replacement) | (replacement, None) => {
                    *path.slot(&mut self.root) = replacement;
                    found
                }
                (Some(_), Some(right)) => {
                    path.push(found, Direction::Right);
                    let mut successor = right;
                    while let Some(left) = node_mut(successor).left {
                        path.push(successor, Direction::Left);
                        successor = left;
                    }
                    let successor_node = node_mut(successor);
                    std::mem::swap(&mut matched.payload, &mut successor_node.payload);
                    *path.slot(&mut self.root) = successor_node.right;
                    successor
                }
            };
            self.len -= 1;

            while !path.is_empty() {
                let (ancestor, side) = path.pop();
                let ancestor = node_mut(ancestor);
                ancestor.balance -= side.grow();
                match ancestor.balance {
                    -1 | 1 => break,
                    0 => continue,
                    _ => {
                        if !rotate::rebalance(path.slot(&mut self.root)) {
                            break;
                        }
                    }
                }
            }

            Some(Node::free(removed))
        }
    }
}
