// =====================================================================
// File: index/bst.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 3, 2025
//
// Description:
//   Implements the unbalanced index (`UnbalancedIndex`), a plain binary
//   search tree over `BstNode` structures. Instructors are kept here,
//   ordered by id.
//
// Features:
//   - `insert`   : Adds a record, rejects duplicate keys. No rebalancing.
//   - `find_with`: Iterative lookup reporting every node it examines.
//   - `remove`   : Classic BST delete with in-order successor swap.
//   - `iter`     : Lazy in-order traversal (ascending key order).
//
// Notes:
//   * Shape depends on insertion order; sorted input degenerates into a
//     list. The index is meant for small collections.
// =====================================================================
use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};

use super::iter::InOrder;
use super::node::{BstNode, Keyed, Link};
use super::outcome::{DeleteOutcome, InsertOutcome};
use crate::error::IndexError;

/// Plain binary search tree keyed by `R::Key`.
#[derive(Debug)]
pub struct UnbalancedIndex<R: Keyed> {
    pub root: Link<BstNode<R>>,
    len: usize,
}


impl<R: Keyed> Default for UnbalancedIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}


impl<R: Keyed> UnbalancedIndex<R> {
    /// Create a new empty unbalanced index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, found by walking it (0 when empty).
    pub fn height(&self) -> usize {
        fn walk<R: Keyed>(node: Option<&BstNode<R>>) -> usize {
            match node {
                Some(node) => 1 + walk(node.left.as_deref()).max(walk(node.right.as_deref())),
                None => 0,
            }
        }
        walk(self.root.as_deref())
    }

    /// Search for a record by key.
    pub fn find(&self, key: &R::Key) -> Option<&R> {
        self.find_with(key, |_| {})
    }

    /// Search for a record by key, calling `visit` once for every node
    /// examined, in descent order (root first, match last).
    ///
    /// # Example
    /// ```
    /// use academy_index::{Keyed, UnbalancedIndex};
    ///
    /// struct Badge(u32);
    /// impl Keyed for Badge {
    ///     type Key = u32;
    ///     fn key(&self) -> u32 { self.0 }
    /// }
    ///
    /// let mut index = UnbalancedIndex::new();
    /// for id in [50, 20, 80, 30] {
    ///     assert!(index.insert(Badge(id)).is_inserted());
    /// }
    ///
    /// let mut path = Vec::new();
    /// let found = index.find_with(&30, |b| path.push(b.0));
    /// assert_eq!(found.map(|b| b.0), Some(30));
    /// assert_eq!(path, vec![50, 20, 30]);
    /// ```
    pub fn find_with<F>(&self, key: &R::Key, mut visit: F) -> Option<&R>
    where
        F: FnMut(&R),
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            visit(&node.record);
            trace!(key = %node.key, "unbalanced index: visited");

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
    /// Descends by key and hangs the record as a new leaf. If the key is
    /// already present the tree is left untouched and the record is handed
    /// back in [`InsertOutcome::Duplicate`].
    pub fn insert(&mut self, record: R) -> InsertOutcome<R> {
        let key = record.key();
        let (root, rejected) = Self::insert_internal(self.root.take(), record);
        self.root = Some(root);

        match rejected {
            Some(record) => {
                debug!(key = %record.key(), "unbalanced index: duplicate key rejected");
                InsertOutcome::Duplicate(record)
            }
            None => {
                self.len += 1;
                debug!(key = %key, "unbalanced index: inserted");
                InsertOutcome::Inserted
            }
        }
    }

    /// Deletes the record stored under `key`, if present.
    ///
    /// Follows the standard BST deletion algorithm:
    /// - Node with no children or one child: replaced by that child.
    /// - Node with two children: its record is swapped with the record of
    ///   its in-order successor (leftmost node of the right subtree), then
    ///   the successor's old position, which has no left child, is deleted.
    ///
    /// No rebalancing is done afterwards.
    ///
    /// # Example
    /// ```
    /// use academy_index::{DeleteOutcome, Keyed, UnbalancedIndex};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Badge(u32);
    /// impl Keyed for Badge {
    ///     type Key = u32;
    ///     fn key(&self) -> u32 { self.0 }
    /// }
    ///
    /// let mut index = UnbalancedIndex::new();
    /// for id in [50, 20, 80] {
    ///     assert!(index.insert(Badge(id)).is_inserted());
    /// }
    /// assert_eq!(index.remove(&50), DeleteOutcome::Removed(Badge(50)));
    /// assert_eq!(index.remove(&50), DeleteOutcome::NotFound);
    /// assert_eq!(index.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &R::Key) -> DeleteOutcome<R> {
        let (root, removed) = Self::delete_internal(self.root.take(), key);
        self.root = root;

        match removed {
            Some(record) => {
                self.len -= 1;
                debug!(key = %key, "unbalanced index: removed");
                DeleteOutcome::Removed(record)
            }
            None => {
                debug!(key = %key, "unbalanced index: nothing to remove");
                DeleteOutcome::NotFound
            }
        }
    }

    /// In-order traversal, ascending by key. Restartable and read-only.
    pub fn iter(&self) -> InOrder<'_, BstNode<R>> {
        InOrder::new(self.root.as_deref())
    }

    /// Checks the BST ordering, that each node's key matches its record
    /// and that the record count is right.
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

    /// Inserts into the subtree `link`, rebuilding the links along the
    /// descent path. Returns the subtree root and, on a duplicate, the
    /// rejected record.
    fn insert_internal(link: Link<BstNode<R>>, record: R) -> (Box<BstNode<R>>, Option<R>) {
        let Some(mut node) = link else {
            return (Box::new(BstNode::new(record)), None);
        };

        let rejected = match record.key().cmp(&node.key) {
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
        (node, rejected)
    }


    // =========================
    // Deletion helpers
    // =========================

    /// Deletes `key` from the subtree `link`. Returns the new subtree root
    /// and the removed record (`None` if the key was not found).
    fn delete_internal(link: Link<BstNode<R>>, key: &R::Key) -> (Link<BstNode<R>>, Option<R>) {
        // Fell off the tree - key not present
        let Some(mut node) = link else {
            return (None, None);
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, removed) = Self::delete_internal(node.left.take(), key);
                node.left = child;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (child, removed) = Self::delete_internal(node.right.take(), key);
                node.right = child;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // Zero or one child - splice the child into this spot
                (None, child) | (child, None) => {
                    let BstNode { record, .. } = *node;
                    (child, Some(record))
                }
                // Two children - swap with successor, delete from the right
                (Some(left), Some(mut right)) => {
                    Self::swap_with_leftmost(&mut right, &mut node.record, &mut node.key);
                    let (right, removed) = Self::delete_internal(Some(right), key);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), removed)
                }
            },
        }
    }

    /// Swaps `record`/`key` with those of the leftmost node under `node`.
    fn swap_with_leftmost(node: &mut BstNode<R>, record: &mut R, key: &mut R::Key) {
        match node.left.as_deref_mut() {
            Some(next) => Self::swap_with_leftmost(next, record, key),
            None => {
                trace!(successor = %node.key, "unbalanced index: successor swap");
                mem::swap(&mut node.record, record);
                mem::swap(&mut node.key, key);
            }
        }
    }


    // =========================
    // Validation helpers
    // =========================

    fn validate_node(
        node: Option<&BstNode<R>>,
        lower: Option<R::Key>,
        upper: Option<R::Key>,
        count: &mut usize,
    ) -> Result<(), IndexError> {
        let Some(node) = node else {
            return Ok(());
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

        Self::validate_node(node.left.as_deref(), lower, Some(node.key), count)?;
        Self::validate_node(node.right.as_deref(), Some(node.key), upper, count)
    }
}


impl<'a, R: Keyed> IntoIterator for &'a UnbalancedIndex<R> {
    type Item = &'a R;
    type IntoIter = InOrder<'a, BstNode<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
