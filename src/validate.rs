//! Checks of the tree invariants that don't trust anything the engines maintain: heights are
//! measured by walking the tree and nodes are counted rather than read from `len`.

use std::cmp::Ordering;
use std::ptr::NonNull;

use crate::error::TreeError;
use crate::node::{node_ref, Link, Node};
use crate::raw::RawTree;

enum Visit<T> {
    Enter(Link<T>),
    Exit(NonNull<Node<T>>),
}

impl<T> RawTree<T> {
    /// Measures every subtree's height (post-order, with an explicit stack) and checks each
    /// node's balance factor against it, then checks the node count.
    pub(crate) fn validate_shape(&self) -> Result<(), TreeError> {
        let mut visits = vec![Visit::Enter(self.root)];
        let mut heights: Vec<isize> = Vec::new();
        let mut reachable = 0;

        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(None) => heights.push(0),
                Visit::Enter(Some(node)) => {
                    // SAFETY: nodes reachable from `self.root` are live while `self` is borrowed.
                    let n = unsafe { node_ref(node) };
                    visits.push(Visit::Exit(node));
                    visits.push(Visit::Enter(n.right));
                    visits.push(Visit::Enter(n.left));
                }
                Visit::Exit(node) => {
                    // SAFETY: as above.
                    let n = unsafe { node_ref(node) };
                    let right = heights.pop().expect("right height pushed");
                    let left = heights.pop().expect("left height pushed");
                    let actual = right - left;
                    if actual.abs() > 1 {
                        return Err(TreeError::Unbalanced { balance: actual });
                    }
                    if isize::from(n.balance) != actual {
                        return Err(TreeError::BalanceMismatch {
                            recorded: n.balance,
                            actual,
                        });
                    }
                    heights.push(left.max(right) + 1);
                    reachable += 1;
                }
            }
        }

        if reachable != self.len {
            return Err(TreeError::CountMismatch {
                recorded: self.len,
                actual: reachable,
            });
        }
        Ok(())
    }

    /// Checks that an in-order walk is strictly increasing under `compare`.
    pub(crate) fn validate_order<F>(&self, mut compare: F) -> Result<(), TreeError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut previous: Option<&T> = None;
        for (position, payload) in self.iter().enumerate() {
            if let Some(previous) = previous {
                if compare(previous, payload) != Ordering::Less {
                    return Err(TreeError::OutOfOrder { position });
                }
            }
            previous = Some(payload);
        }
        Ok(())
    }
}
