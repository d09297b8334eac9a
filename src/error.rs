use thiserror::Error;

/// Errors reported by trees. Misuse that can only come from a bug in this crate (a path deeper
/// than [`crate::MAX_HEIGHT`], popping an empty path) panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `try_remove` was asked for a key the tree doesn't hold.
    #[error("key not found")]
    KeyNotFound,
    /// A node's stored balance factor disagrees with the heights of its subtrees.
    #[error("node records balance {recorded} but its subtrees differ by {actual}")]
    BalanceMismatch {
        /// The balance factor stored in the node.
        recorded: i8,
        /// `height(right) - height(left)` as measured.
        actual: isize,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("node has balance factor {balance}")]
    Unbalanced {
        /// `height(right) - height(left)` as measured.
        balance: isize,
    },
    /// An in-order walk produced a payload not strictly greater than the one before it.
    #[error("payload {position} (in order) is not greater than its predecessor")]
    OutOfOrder {
        /// Zero-based in-order index of the offending payload.
        position: usize,
    },
    /// The stored count disagrees with the number of reachable nodes.
    #[error("tree records {recorded} nodes but {actual} are reachable")]
    CountMismatch {
        /// The count maintained by inserts and removals.
        recorded: usize,
        /// The number of nodes found by walking the tree.
        actual: usize,
    },
}
