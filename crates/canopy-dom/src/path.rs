//! Node paths and path copying
//!
//! A `NodePath` addresses a node by child indices from a root. Targeted
//! updates rebuild only the nodes along the path; everything off-path is
//! shared by reference with the input tree.

use std::sync::Arc;

use crate::{Child, Node};

/// Child-index path from a root to a descendant.
///
/// Indices count all children, text leaves included, so a path stays valid
/// across rewrites that never change tree structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    indices: Vec<usize>,
}

impl NodePath {
    /// Empty path, addressing the root itself
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Path from explicit child indices
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    /// Navigate to the node at this path
    pub fn navigate<'a>(&self, root: &'a Arc<Node>) -> Option<&'a Arc<Node>> {
        let mut current = root;
        for &index in &self.indices {
            current = current.children().get(index).and_then(Child::as_node)?;
        }
        Some(current)
    }

    /// Rewrite the node at this path, path copying on the way up.
    ///
    /// A path that does not resolve, or an `f` returning the node unchanged,
    /// yields the input root reference-identical.
    pub fn modify<F>(&self, root: &Arc<Node>, f: F) -> Arc<Node>
    where
        F: FnOnce(&Arc<Node>) -> Arc<Node>,
    {
        Self::modify_at(root, &self.indices, f)
    }

    fn modify_at<F>(node: &Arc<Node>, path: &[usize], f: F) -> Arc<Node>
    where
        F: FnOnce(&Arc<Node>) -> Arc<Node>,
    {
        let Some((&index, rest)) = path.split_first() else {
            return f(node);
        };
        match node.children().get(index).and_then(Child::as_node) {
            Some(child) => {
                let new_child = Self::modify_at(child, rest, f);
                if Arc::ptr_eq(child, &new_child) {
                    Arc::clone(node)
                } else {
                    node.with_child_at(index, new_child)
                }
            }
            None => Arc::clone(node),
        }
    }
}
