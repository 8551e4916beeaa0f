// =====================================================================
// File: index/iter.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 2, 2025
//
// Description:
//   Lazy in-order traversal shared by both indexes. Uses an explicit
//   stack of borrowed nodes instead of recursion, so it can be paused
//   between items and never touches the tree structure.
// =====================================================================
use super::node::TreeNode;

/// In-order iterator over the records of a tree.
///
/// Yields records in ascending key order. Each call to the index's
/// `iter()` starts a fresh traversal.
pub struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}


impl<'a, N: TreeNode> InOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    // Push `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}


impl<'a, N: TreeNode> Iterator for InOrder<'a, N> {
    type Item = &'a N::Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Next smallest after `node` is the leftmost of its right subtree
        self.push_left_spine(node.right());
        Some(node.record())
    }
}
