// =====================================================================
// File: index/avl.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 2, 2025 - Refactored Dec. 4, 2025
//
// Description:
//   Implements the balanced index (`BalancedIndex`), a self-balancing
//   AVL tree over `AvlNode` structures. Students are kept here, ordered
//   by enrollment stamp.
//
// Features:
//   - `insert`: Adds a record, rejects duplicate keys, rebalances.
//   - `find`  : Iterative descent by key.
//   - `iter`  : Lazy in-order traversal (ascending key order).
//   - `validate`: Re-derives heights bottom-up and checks every rule.
//   - Rotation helpers: Restore balance after an insert.
//
// Notes:
//   * No delete - records are never removed from this index.
//   * Heights are stored per node and refreshed after every structural
//     change, child before parent, so they are never read stale.
// =====================================================================
use std::cmp::Ordering;

use tracing::{debug, trace};

use super::iter::InOrder;
use super::node::{height, AvlNode, Keyed, Link};
use super::outcome::InsertOutcome;
use crate::error::IndexError;

/// AVL-balanced binary search tree keyed by `R::Key`.
#[derive(Debug)]
pub struct BalancedIndex<R: Keyed> {
    pub root: Link<AvlNode<R>>,
    len: usize,
}


impl<R: Keyed> Default for BalancedIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}


// AVL Referencing:
// https://www.geeksforgeeks.org/dsa/insertion-in-an-avl-tree/
impl<R: Keyed> BalancedIndex<R> {
    /// Create a new empty balanced index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree (0 when empty). O(1).
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Search for a record by key.
    ///
    /// # Returns
    /// * `Some(&R)` if a record with `key` is stored.
    /// * `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use academy_index::{BalancedIndex, Keyed};
    ///
    /// struct Tick(u32);
    /// impl Keyed for Tick {
    ///     type Key = u32;
    ///     fn key(&self) -> u32 { self.0 }
    /// }
    ///
    /// let mut index = BalancedIndex::new();
    /// assert!(index.insert(Tick(3)).is_inserted());
    /// assert_eq!(index.find(&3).map(|t| t.0), Some(3));
    /// assert!(index.find(&4).is_none());
    /// ```
    pub fn find(&self, key: &R::Key) -> Option<&R> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.record),
            };
        }
        None
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.find(key).is_some()
    }

    /// Insert a record into the tree.
    ///
    /// - If no record has the same key, it is placed by standard BST
    ///   descent and the tree is rebalanced on the way back up.
    /// - If the key is already present, nothing changes and the record is
    ///   handed back in [`InsertOutcome::Duplicate`].
    ///
    /// # Example
    /// ```
    /// use academy_index::{BalancedIndex, InsertOutcome, Keyed};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Tick(u32);
    /// impl Keyed for Tick {
    ///     type Key = u32;
    ///     fn key(&self) -> u32 { self.0 }
    /// }
    ///
    /// let mut index = BalancedIndex::new();
    /// for k in [1, 2, 3] {
    ///     assert!(index.insert(Tick(k)).is_inserted());
    /// }
    /// // Sorted input would degenerate a plain BST, here it rotates
    /// assert_eq!(index.height(), 2);
    /// assert_eq!(index.insert(Tick(2)), InsertOutcome::Duplicate(Tick(2)));
    /// ```
    pub fn insert(&mut self, record: R) -> InsertOutcome<R> {
        let key = record.key();
        let (root, rejected) = Self::insert_internal(self.root.take(), record);
        self.root = Some(root);

        match rejected {
            Some(record) => {
                debug!(key = %record.key(), "balanced index: duplicate key rejected");
                InsertOutcome::Duplicate(record)
            }
            None => {
                self.len += 1;
                debug!(key = %key, "balanced index: inserted");
                InsertOutcome::Inserted
            }
        }
    }

    /// In-order traversal, ascending by key. Restartable and read-only.
    pub fn iter(&self) -> InOrder<'_, AvlNode<R>> {
        InOrder::new(self.root.as_deref())
    }

    /// Re-derives every height bottom-up and checks the BST ordering, the
    /// stored heights, the AVL balance rule and the record count.
    pub fn validate(&self) -> Result<(), IndexError> {
        let mut count = 0;
        Self::validate_node(self.root.as_deref(), None, None, &mut count)?;
        if count != self.len {
            return Err(IndexError::StructuralInvariantViolation(format!(
                "len is {} but the tree holds {} nodes",
                self.len, count
            )));
        }
        Ok(())
    }


    // =========================
    // Insertion helpers
    // =========================

    /// Inserts `record` into the subtree `link` and returns the new subtree
    /// root, plus the record itself if its key was already present.
    ///
    /// # Behavior
    /// 1. Descend by key; an exact match leaves the subtree untouched.
    /// 2. Refresh this node's height.
    /// 3. If the node is out of balance, pick the rotation case by comparing
    ///    the inserted key with the key of the child on the heavy side:
    ///    - left-left   : rotate right here.
    ///    - right-right : rotate left here.
    ///    - left-right  : rotate left at the left child, then right here.
    ///    - right-left  : rotate right at the right child, then left here.
    fn insert_internal(link: Link<AvlNode<R>>, record: R) -> (Box<AvlNode<R>>, Option<R>) {
        // Base case - empty spot, new leaf
        let Some(mut node) = link else {
            return (Box::new(AvlNode::new(record)), None);
        };

        let key = record.key();
        let rejected = match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, rejected) = Self::insert_internal(node.left.take(), record);
                node.left = Some(child);
                rejected
            }
            Ordering::Greater => {
                let (child, rejected) = Self::insert_internal(node.right.take(), record);
                node.right = Some(child);
                rejected
            }
            Ordering::Equal => Some(record),
        };

        // Shape did not change - nothing to rebalance
        if rejected.is_some() {
            return (node, rejected);
        }

        node.update_height();
        let balance = node.balance_factor();

        let node = if balance > 1 {
            let left_key = node.left.as_ref().map(|left| left.key);
            match left_key.map(|left_key| key.cmp(&left_key)) {
                Some(Ordering::Less) => Self::rotate_right(node),
                Some(Ordering::Greater) => {
                    node.left = node.left.take().map(Self::rotate_left);
                    Self::rotate_right(node)
                }
                _ => node,
            }
        } else if balance < -1 {
            let right_key = node.right.as_ref().map(|right| right.key);
            match right_key.map(|right_key| key.cmp(&right_key)) {
                Some(Ordering::Greater) => Self::rotate_left(node),
                Some(Ordering::Less) => {
                    node.right = node.right.take().map(Self::rotate_right);
                    Self::rotate_left(node)
                }
                _ => node,
            }
        } else {
            node
        };

        debug_assert!(
            node.balance_factor().abs() <= 1,
            "AVL balance violated at key {}",
            node.key
        );
        (node, None)
    }


    // =========================
    // Rotation helpers
    // =========================

    /// Right rotation around `y`.
    ///
    /// ```text
    ///        y              x
    ///       / \            / \
    ///      x   C   ==>    A   y
    ///     / \                / \
    ///    A   T              T   C
    /// ```
    /// Heights are refreshed for `y` first, then `x`. A node without a left
    /// child is returned unchanged.
    pub(crate) fn rotate_right(mut y: Box<AvlNode<R>>) -> Box<AvlNode<R>> {
        let Some(mut x) = y.left.take() else {
            return y;
        };
        trace!(pivot = %y.key, new_root = %x.key, "rotate right");

        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    /// Left rotation around `x`, the mirror of [`Self::rotate_right`].
    pub(crate) fn rotate_left(mut x: Box<AvlNode<R>>) -> Box<AvlNode<R>> {
        let Some(mut y) = x.right.take() else {
            return x;
        };
        trace!(pivot = %x.key, new_root = %y.key, "rotate left");

        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }


    // =========================
    // Validation helpers
    // =========================

    /// Checks the subtree at `node` against the open key interval
    /// (`lower`, `upper`) and returns its re-derived height.
    fn validate_node(
        node: Option<&AvlNode<R>>,
        lower: Option<R::Key>,
        upper: Option<R::Key>,
        count: &mut usize,
    ) -> Result<usize, IndexError> {
        let Some(node) = node else {
            return Ok(0);
        };
        *count += 1;

        if node.key != node.record.key() {
            return Err(IndexError::StructuralInvariantViolation(format!(
                "node key {} does not match its record key {}",
                node.key,
                node.record.key()
            )));
        }
        if lower.is_some_and(|lower| node.key <= lower) || upper.is_some_and(|upper| node.key >= upper) {
            return Err(IndexError::StructuralInvariantViolation(format!(
                "key {} is out of order",
                node.key
            )));
        }

        let left = Self::validate_node(node.left.as_deref(), lower, Some(node.key), count)?;
        let right = Self::validate_node(node.right.as_deref(), Some(node.key), upper, count)?;

        let derived = 1 + left.max(right);
        if node.height != derived {
            return Err(IndexError::StructuralInvariantViolation(format!(
                "key {} stores height {} but its subtree height is {}",
                node.key, node.height, derived
            )));
        }
        if left.abs_diff(right) > 1 {
            return Err(IndexError::StructuralInvariantViolation(format!(
                "key {} is unbalanced ({} vs {})",
                node.key, left, right
            )));
        }
        Ok(derived)
    }
}


impl<'a, R: Keyed> IntoIterator for &'a BalancedIndex<R> {
    type Item = &'a R;
    type IntoIter = InOrder<'a, AvlNode<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
