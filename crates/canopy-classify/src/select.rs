//! Tree search
//!
//! Preorder depth-first search with first-match pruning: once a node
//! matches, its subtree is excluded from further search for that selector.

use std::sync::Arc;

use canopy_dom::{Node, NodePath};

use crate::Selector;

/// Find all nodes matching `selector`, in document order.
///
/// `root` is the scope root for `:root`. With `exclude_root` set, the root
/// itself is skipped and only descendants are searched (it then also loses
/// `:root` eligibility, so `:root` matches nothing).
pub fn select(
    root: &Arc<Node>,
    selector: impl Into<Selector>,
    exclude_root: bool,
) -> Vec<Arc<Node>> {
    let selector = selector.into();
    select_paths(root, &selector, exclude_root)
        .iter()
        .filter_map(|path| path.navigate(root))
        .cloned()
        .collect()
}

/// Like [`select`], but returns the child-index path of each match.
///
/// Paths let the classification engine rewrite matched nodes through path
/// copying after the search is done.
pub fn select_paths(root: &Arc<Node>, selector: &Selector, exclude_root: bool) -> Vec<NodePath> {
    let mut found = Vec::new();
    collect(root, selector, exclude_root, true, &mut NodePath::new(), &mut found);
    found
}

fn collect(
    node: &Arc<Node>,
    selector: &Selector,
    exclude_self: bool,
    is_scope_root: bool,
    prefix: &mut NodePath,
    found: &mut Vec<NodePath>,
) {
    if !exclude_self && selector.matches(node, is_scope_root) {
        found.push(prefix.clone());
        // A match prunes its own subtree
        return;
    }
    for (index, child) in node.children().iter().enumerate() {
        let Some(child_node) = child.as_node() else {
            continue; // text leaves never match
        };
        prefix.push(index);
        collect(child_node, selector, false, false, prefix, found);
        prefix.pop();
    }
}
