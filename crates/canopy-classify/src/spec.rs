//! Class specifications
//!
//! A `ClassSpec` describes the classes a rule adds to a matched node. Specs
//! nest arbitrarily (lists of toggles of functions, ...) and resolve to a
//! single space-joined string per node.

use std::fmt;
use std::sync::Arc;

use canopy_dom::Node;

/// Callback spec: receives the matched node, its 0-based position within
/// the matched set, and the full matched set.
pub type SpecFn = dyn Fn(&Node, usize, &[Arc<Node>]) -> ClassSpec + Send + Sync;

/// Function specs may return further function specs; beyond this depth the
/// spec is reported as invalid instead of recursing forever.
pub(crate) const MAX_SPEC_DEPTH: usize = 64;

/// Raised when resolution exceeds [`MAX_SPEC_DEPTH`]. Surfaced by the
/// engine as [`crate::ClassifyError::InvalidClassSpec`].
pub(crate) struct SpecDepthExceeded;

/// Classes to add to a matched node
#[derive(Clone)]
pub enum ClassSpec {
    /// No contribution
    None,
    /// Literal class string
    Text(String),
    /// Nested specs, resolved in order and space-joined
    List(Vec<ClassSpec>),
    /// Ordered class → enabled pairs; only enabled keys contribute
    Toggle(Vec<(String, bool)>),
    /// Computed per matched node
    Func(Arc<SpecFn>),
}

impl ClassSpec {
    /// Toggle spec from ordered (class, enabled) pairs
    pub fn toggle<K: Into<String>>(pairs: impl IntoIterator<Item = (K, bool)>) -> Self {
        Self::Toggle(pairs.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }

    /// Function spec computed per matched node
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Node, usize, &[Arc<Node>]) -> ClassSpec + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }
}

impl fmt::Debug for ClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Toggle(pairs) => f.debug_tuple("Toggle").field(pairs).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for ClassSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for ClassSpec {
    fn from(on: bool) -> Self {
        // Mirrors falsy short-circuits like `el.tag == "p" && "two"`
        if on { Self::Text(String::new()) } else { Self::None }
    }
}

impl From<Vec<ClassSpec>> for ClassSpec {
    fn from(items: Vec<ClassSpec>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<ClassSpec>, const N: usize> From<[T; N]> for ClassSpec {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Resolve a spec for one matched node into its class-string contribution.
///
/// Empty contributions come back as `""`; the caller drops them rather than
/// writing stray separators.
pub(crate) fn resolve(
    spec: &ClassSpec,
    node: &Node,
    index: usize,
    matched: &[Arc<Node>],
) -> Result<String, SpecDepthExceeded> {
    resolve_at(spec, node, index, matched, 0)
}

fn resolve_at(
    spec: &ClassSpec,
    node: &Node,
    index: usize,
    matched: &[Arc<Node>],
    depth: usize,
) -> Result<String, SpecDepthExceeded> {
    if depth > MAX_SPEC_DEPTH {
        return Err(SpecDepthExceeded);
    }
    match spec {
        ClassSpec::None => Ok(String::new()),
        ClassSpec::Text(s) => Ok(s.clone()),
        ClassSpec::List(items) => {
            let mut joined = String::new();
            for item in items {
                let part = resolve_at(item, node, index, matched, depth + 1)?;
                if part.is_empty() {
                    continue;
                }
                if !joined.is_empty() {
                    joined.push(' ');
                }
                joined.push_str(&part);
            }
            Ok(joined)
        }
        ClassSpec::Toggle(pairs) => Ok(pairs
            .iter()
            .filter(|(_, on)| *on)
            .map(|(class, _)| class.as_str())
            .collect::<Vec<_>>()
            .join(" ")),
        ClassSpec::Func(f) => {
            let produced = f(node, index, matched);
            resolve_at(&produced, node, index, matched, depth + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_dom::Node;
    use pretty_assertions::assert_eq;

    fn resolve_alone(spec: &ClassSpec) -> Result<String, SpecDepthExceeded> {
        let node = Node::element("p").build();
        let matched = vec![Arc::clone(&node)];
        resolve(spec, &node, 0, &matched)
    }

    #[test]
    fn test_text() {
        assert_eq!(resolve_alone(&ClassSpec::from("a b")).ok(), Some("a b".into()));
    }

    #[test]
    fn test_list_skips_empty_parts() {
        let spec = ClassSpec::from([
            ClassSpec::from("one"),
            ClassSpec::None,
            ClassSpec::from(""),
            ClassSpec::from("two"),
        ]);
        assert_eq!(resolve_alone(&spec).ok(), Some("one two".into()));
    }

    #[test]
    fn test_toggle_order_and_filtering() {
        let spec = ClassSpec::toggle([("should", true), ("should-not", false), ("also", true)]);
        assert_eq!(resolve_alone(&spec).ok(), Some("should also".into()));
    }

    #[test]
    fn test_func_receives_node() {
        let spec = ClassSpec::func(|node, _, _| {
            ClassSpec::toggle([("is-p", node.tag_name() == "p")])
        });
        assert_eq!(resolve_alone(&spec).ok(), Some("is-p".into()));
    }

    #[test]
    fn test_mixed_nesting() {
        let spec = ClassSpec::from([
            ClassSpec::from([ClassSpec::from("one")]),
            ClassSpec::func(|node, _, _| {
                if node.tag_name() == "p" {
                    "two".into()
                } else {
                    ClassSpec::None
                }
            }),
            ClassSpec::toggle([("three", true), ("four", false)]),
            ClassSpec::from("ok"),
        ]);
        assert_eq!(resolve_alone(&spec).ok(), Some("one two three ok".into()));
    }

    #[test]
    fn test_self_returning_func_hits_depth_cap() {
        fn looping() -> ClassSpec {
            ClassSpec::func(|_, _, _| looping())
        }
        assert!(resolve_alone(&looping()).is_err());
    }
}
