// =====================================================================
// File: index/mod.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 2, 2025
//
//! The `index` module contains the two in-memory ordered indexes used by
//! the academy.
//!
//! Structure:
//! - `node.rs`    : Defines [`AvlNode`], [`BstNode`], the [`Keyed`] record
//!                  trait and the shared `height` helper.
//! - `avl.rs`     : Defines [`BalancedIndex`] (AVL insert and rotations).
//! - `bst.rs`     : Defines [`UnbalancedIndex`] (insert, lookup, delete).
//! - `iter.rs`    : Defines [`InOrder`], the lazy traversal both share.
//! - `outcome.rs` : Defines [`InsertOutcome`] and [`DeleteOutcome`].
//! - `tests.rs`   : Unit and property tests (compiled only in test mode).
// =====================================================================

pub mod avl;
pub mod bst;
pub mod iter;
pub mod node;
pub mod outcome;

pub use self::avl::BalancedIndex;
pub use self::bst::UnbalancedIndex;
pub use self::iter::InOrder;
pub use self::node::{height, AvlNode, BstNode, Keyed, Link, TreeNode};
pub use self::outcome::{DeleteOutcome, InsertOutcome};
