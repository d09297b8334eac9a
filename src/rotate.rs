//! Single rotations and the rebalancing decision built from them.
//!
//! Balance factors are updated from their previous values rather than recomputed from heights,
//! so nothing here looks further than one level below the rotated node.

use crate::node::{node_mut, node_ref, Link};

/// Rotate the subtree in `slot` to the right. Used when the subtree is left-heavy, so it must
/// have a left child.
///
/// ## Panics
///
/// When the subtree is empty or has no left child.
///
/// # Diagram
///
/// ```text
///      slot                 slot
///       |                    |
///       r                    nr
///      / \                  /  \
///    nr   z    rotate ->   x    r
///   /  \                       / \
///  x    y                     y   z
/// ```
///
/// # Safety
///
/// `slot` must be a link of a well formed tree whose nodes are not otherwise borrowed.
pub(crate) unsafe fn rotate_right<T>(slot: &mut Link<T>) {
    let r_ptr = slot.expect("Cannot rotate an empty subtree.");
    let r = node_mut(r_ptr);
    let nr_ptr = r.left.expect("Rotate right => left child");
    let nr = node_mut(nr_ptr);

    r.left = nr.right;
    nr.right = Some(r_ptr);
    *slot = Some(nr_ptr);

    r.balance = r.balance + 1 - nr.balance.min(0);
    nr.balance = nr.balance + 1 + r.balance.max(0);
}

/// Mirror image of [`rotate_right`]: the right child is lifted into `slot`.
///
/// ## Panics
///
/// When the subtree is empty or has no right child.
///
/// # Safety
///
/// `slot` must be a link of a well formed tree whose nodes are not otherwise borrowed.
pub(crate) unsafe fn rotate_left<T>(slot: &mut Link<T>) {
    let r_ptr = slot.expect("Cannot rotate an empty subtree.");
    let r = node_mut(r_ptr);
    let nr_ptr = r.right.expect("Rotate left => right child");
    let nr = node_mut(nr_ptr);

    r.right = nr.left;
    nr.left = Some(r_ptr);
    *slot = Some(nr_ptr);

    r.balance = r.balance - 1 - nr.balance.max(0);
    nr.balance = nr.balance - 1 + r.balance.min(0);
}

/// Restores the AVL invariant at the node in `slot`, whose balance factor has just reached `-2`
/// or `+2`. If the taller child leans the other way it is rotated first, making this a double
/// rotation.
///
/// Returns `true` if the subtree in `slot` ended up one level shorter than it was before the
/// rotation. That only matters to removal: after an insertion the rotated subtree is always back
/// to its height from before the insert.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
///
/// # Safety
///
/// `slot` must be a link of a well formed tree whose nodes are not otherwise borrowed.
pub(crate) unsafe fn rebalance<T>(slot: &mut Link<T>) -> bool {
    let node = node_mut(slot.expect("Cannot rebalance an empty subtree."));
    match node.balance {
        -2 => {
            let left = node.left.expect("left-heavy => left child");
            if node_ref(left).balance > 0 {
                log::trace!("rotating left-right");
                rotate_left(&mut node.left);
            } else {
                log::trace!("rotating right");
            }
            rotate_right(slot);
        }
        2 => {
            let right = node.right.expect("right-heavy => right child");
            if node_ref(right).balance < 0 {
                log::trace!("rotating right-left");
                rotate_right(&mut node.right);
            } else {
                log::trace!("rotating left");
            }
            rotate_left(slot);
        }
        balance => unreachable!("rebalance called with balance factor {balance}"),
    }

    let new_root = slot.expect("rotation keeps the subtree non-empty");
    node_ref(new_root).balance == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use std::ptr::NonNull;

    /// Builds a node with the given children and balance.
    fn node(value: i32, left: Link<i32>, right: Link<i32>, balance: i8) -> NonNull<Node<i32>> {
        let n = Node::leak(value, balance);
        // SAFETY: just allocated.
        unsafe {
            node_mut(n).left = left;
            node_mut(n).right = right;
        }
        n
    }

    /// Shape as (value, balance) pairs in pre-order, for small trees only.
    fn shape(link: Link<i32>) -> Vec<(i32, i8)> {
        let mut out = Vec::new();
        let mut pending = vec![link];
        while let Some(link) = pending.pop() {
            if let Some(n) = link {
                // SAFETY: every test tree is live until `free_all`.
                let n = unsafe { node_ref(n) };
                out.push((n.payload, n.balance));
                pending.push(n.right);
                pending.push(n.left);
            }
        }
        out
    }

    fn free_all(link: Link<i32>) {
        let mut pending = vec![link];
        while let Some(link) = pending.pop() {
            if let Some(n) = link {
                // SAFETY: each node is reachable exactly once from `pending`.
                unsafe {
                    pending.push(node_ref(n).left);
                    pending.push(node_ref(n).right);
                    Node::free(n);
                }
            }
        }
    }

    #[test]
    fn single_right_rotation() {
        // 30 <- 20 <- 10
        let ten = node(10, None, None, 0);
        let twenty = node(20, Some(ten), None, -1);
        let mut root = Some(node(30, Some(twenty), None, -2));

        // SAFETY: `root` owns a well formed tree.
        let shorter = unsafe { rebalance(&mut root) };
        assert!(shorter);
        assert_eq!(shape(root), vec![(20, 0), (10, 0), (30, 0)]);
        free_all(root);
    }

    #[test]
    fn single_left_rotation_with_even_child_keeps_height() {
        //  1
        //   \
        //    3
        //   / \
        //  2   4
        let two = node(2, None, None, 0);
        let four = node(4, None, None, 0);
        let three = node(3, Some(two), Some(four), 0);
        let mut root = Some(node(1, None, Some(three), 2));

        // SAFETY: `root` owns a well formed tree.
        let shorter = unsafe { rebalance(&mut root) };
        assert!(!shorter);
        assert_eq!(shape(root), vec![(3, -1), (1, 1), (2, 0), (4, 0)]);
        free_all(root);
    }

    #[test]
    fn left_right_double_rotation() {
        // 30 <- 10 -> 20
        let twenty = node(20, None, None, 0);
        let ten = node(10, None, Some(twenty), 1);
        let mut root = Some(node(30, Some(ten), None, -2));

        // SAFETY: `root` owns a well formed tree.
        unsafe { rebalance(&mut root) };
        assert_eq!(shape(root), vec![(20, 0), (10, 0), (30, 0)]);
        free_all(root);
    }

    #[test]
    fn right_left_double_rotation() {
        // 10 -> 30 <- 20
        let twenty = node(20, None, None, 0);
        let thirty = node(30, Some(twenty), None, -1);
        let mut root = Some(node(10, None, Some(thirty), 2));

        // SAFETY: `root` owns a well formed tree.
        unsafe { rebalance(&mut root) };
        assert_eq!(shape(root), vec![(20, 0), (10, 0), (30, 0)]);
        free_all(root);
    }
}
