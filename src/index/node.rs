// =====================================================================
// File: index/node.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 2, 2025
//
// Description:
//   Defines the node structures used by both in-memory indexes:
//
//   - `AvlNode` : Node of the balanced index. Carries a stored `height`.
//   - `BstNode` : Node of the unbalanced index. No balance bookkeeping.
//
//   Each node owns its record, a copy of the record's sort key, and its
//   two child subtrees (`Link`). Dropping a node drops its whole subtree.
//
// Notes:
//   * Shared helpers (`height`, `TreeNode`) live here so the traversal
//     code in `iter.rs` works for both node kinds.
//   * Tree algorithms (insert, rotate, delete) live in `avl.rs` and
//     `bst.rs`.
// =====================================================================
use std::fmt::{Debug, Display};

/// A record that can be stored in an index.
///
/// The key must be unique per index and must not change while the record
/// is stored.
pub trait Keyed {
    type Key: Ord + Copy + Display + Debug;

    fn key(&self) -> Self::Key;
}


/// Owning pointer to an optional child subtree. `None` marks a leaf boundary.
pub type Link<N> = Option<Box<N>>;


/// Read-only navigation shared by both node kinds.
pub trait TreeNode {
    type Record;

    fn record(&self) -> &Self::Record;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}


/// Node of the balanced (AVL) index.
#[derive(Debug)]
pub struct AvlNode<R: Keyed> {
    pub record: R,
    pub key: R::Key,
    pub left: Link<AvlNode<R>>,
    pub right: Link<AvlNode<R>>,
    /// 1 for a leaf, otherwise 1 + the taller child's height.
    pub height: usize,
}


impl<R: Keyed> AvlNode<R> {
    /// Creates a leaf holding `record`.
    ///
    /// # Example
    /// ```
    /// use academy_index::index::{AvlNode, Keyed};
    ///
    /// struct Tick(u32);
    /// impl Keyed for Tick {
    ///     type Key = u32;
    ///     fn key(&self) -> u32 { self.0 }
    /// }
    ///
    /// let leaf = AvlNode::new(Tick(7));
    /// assert_eq!(leaf.height, 1);
    /// assert_eq!(leaf.key, 7);
    /// assert!(leaf.left.is_none() && leaf.right.is_none());
    /// ```
    pub fn new(record: R) -> Self {
        Self {
            key: record.key(),
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Recomputes `height` from the (already correct) child heights.
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// height(left) - height(right).
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}


/// Height of a subtree: 0 when absent, else the stored height. O(1).
pub fn height<R: Keyed>(link: &Link<AvlNode<R>>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}


/// Node of the unbalanced (plain BST) index.
#[derive(Debug)]
pub struct BstNode<R: Keyed> {
    pub record: R,
    pub key: R::Key,
    pub left: Link<BstNode<R>>,
    pub right: Link<BstNode<R>>,
}


impl<R: Keyed> BstNode<R> {
    /// Creates a leaf holding `record`.
    pub fn new(record: R) -> Self {
        Self {
            key: record.key(),
            record,
            left: None,
            right: None,
        }
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}


impl<R: Keyed> TreeNode for AvlNode<R> {
    type Record = R;

    fn record(&self) -> &R {
        &self.record
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}


impl<R: Keyed> TreeNode for BstNode<R> {
    type Record = R;

    fn record(&self) -> &R {
        &self.record
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
