//! Classification engine
//!
//! Walks an ordered rule map, searches each selector, resolves its class
//! spec per matched node, and writes the result back through path copying.
//! Scoped rules recurse into each matched node's subtree with the matched
//! node itself excluded from re-matching.

use std::sync::Arc;

use canopy_dom::Node;

use crate::select::select_paths;
use crate::spec::resolve;
use crate::{ClassSpec, ClassifyError, Selector};

/// One rule body: plain classes, or classes plus rules scoped to the
/// matched node's subtree.
#[derive(Debug, Clone)]
pub enum Rule {
    Classes(ClassSpec),
    Scoped {
        classes: ClassSpec,
        nested: RuleMap,
    },
}

/// Ordered selector → rule mapping. Rules apply in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RuleMap {
    rules: Vec<(Selector, Rule)>,
}

impl RuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule adding classes to every match
    pub fn rule(mut self, selector: impl Into<Selector>, spec: impl Into<ClassSpec>) -> Self {
        self.rules.push((selector.into(), Rule::Classes(spec.into())));
        self
    }

    /// Append a rule adding classes to every match and applying `nested`
    /// to each match's subtree (the match itself excluded).
    pub fn scoped(
        mut self,
        selector: impl Into<Selector>,
        spec: impl Into<ClassSpec>,
        nested: RuleMap,
    ) -> Self {
        self.rules.push((
            selector.into(),
            Rule::Scoped {
                classes: spec.into(),
                nested,
            },
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Selector, Rule)> {
        self.rules.iter()
    }
}

/// Apply a rule map to a tree, returning the new tree.
///
/// The input is never mutated; subtrees no rule touches are shared with the
/// input by reference. Matched nodes get each rule's resolved classes
/// appended after their existing ones, in rule order.
pub fn classify(tree: &Arc<Node>, rules: &RuleMap) -> Result<Arc<Node>, ClassifyError> {
    apply(tree, rules, false)
}

fn apply(
    scope: &Arc<Node>,
    rules: &RuleMap,
    exclude_scope_root: bool,
) -> Result<Arc<Node>, ClassifyError> {
    let mut tree = Arc::clone(scope);

    for (selector, rule) in rules.iter() {
        let (spec, nested) = match rule {
            Rule::Classes(spec) => (spec, None),
            Rule::Scoped { classes, nested } => (classes, Some(nested)),
        };

        let paths = select_paths(&tree, selector, exclude_scope_root);
        if paths.is_empty() {
            continue; // zero matches is a no-op
        }
        tracing::debug!("rule `{}` matched {} node(s)", selector, paths.len());

        // Snapshot the matched set before any writes; function specs see
        // the nodes as the search found them.
        let matched: Vec<Arc<Node>> = paths
            .iter()
            .filter_map(|path| path.navigate(&tree))
            .cloned()
            .collect();

        for (index, path) in paths.iter().enumerate() {
            let addition = resolve(spec, &matched[index], index, &matched).map_err(|_| {
                ClassifyError::InvalidClassSpec {
                    selector: selector.to_string(),
                }
            })?;
            if addition.is_empty() {
                continue; // leave existing classes untouched
            }
            tracing::trace!("appending `{}` at {:?}", addition, path);
            tree = path.modify(&tree, |node| node.with_class_appended(&addition));
        }

        if let Some(nested) = nested {
            for path in &paths {
                // Re-navigate: the class writes above replaced the node
                let Some(matched_node) = path.navigate(&tree).cloned() else {
                    continue;
                };
                let rewritten = apply(&matched_node, nested, true)?;
                if !Arc::ptr_eq(&rewritten, &matched_node) {
                    tree = path.modify(&tree, |_| rewritten);
                }
            }
        }
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_map_builder_counts() {
        let rules = RuleMap::new();
        assert!(rules.is_empty());

        let rules = rules.rule("p", "x").scoped("div", "y", RuleMap::new());
        assert!(!rules.is_empty());
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_rule_order_appends_in_order() {
        let tree = Node::element("p").class("a").build();
        let rules = RuleMap::new().rule(".a", "b").rule("p", "c");

        let out = classify(&tree, &rules).unwrap();
        assert_eq!(out.class_attr(), Some("a b c"));
    }

    #[test]
    fn test_no_match_returns_input_unchanged() {
        let tree = Node::element("div").child(Node::element("p")).build();
        let rules = RuleMap::new().rule("xx", "nope");

        let out = classify(&tree, &rules).unwrap();
        assert!(Arc::ptr_eq(&tree, &out));
    }

    #[test]
    fn test_untouched_sibling_shared() {
        let tree = Node::element("div")
            .child(Node::element("p").id("hit"))
            .child(Node::element("span"))
            .build();
        let rules = RuleMap::new().rule("p", "x");

        let out = classify(&tree, &rules).unwrap();
        let siblings: Vec<_> = out.child_nodes().collect();
        assert_eq!(siblings[0].class_attr(), Some("x"));
        assert!(Arc::ptr_eq(
            tree.child_nodes().nth(1).unwrap(),
            siblings[1]
        ));
    }

    #[test]
    fn test_invalid_spec_names_selector() {
        fn looping() -> ClassSpec {
            ClassSpec::func(|_, _, _| looping())
        }
        let tree = Node::element("div").build();
        let rules = RuleMap::new().rule("#missing", looping()).rule("div", looping());

        let err = classify(&tree, &rules).unwrap_err();
        let ClassifyError::InvalidClassSpec { selector } = err;
        assert_eq!(selector, "div");
    }
}
