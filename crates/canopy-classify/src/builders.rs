//! Position-based rule builders
//!
//! Specs that contribute only at a given position within the matched set.

use crate::ClassSpec;

/// Classes applied only to the `n`-th match (1-based) of the rule's
/// matched set. Positions beyond the set contribute to no node.
pub fn nth_child(n: usize, spec: impl Into<ClassSpec>) -> ClassSpec {
    let spec = spec.into();
    ClassSpec::func(move |_, index, _| {
        if index + 1 == n {
            spec.clone()
        } else {
            ClassSpec::None
        }
    })
}

/// Classes applied only to the first match
pub fn first_child(spec: impl Into<ClassSpec>) -> ClassSpec {
    nth_child(1, spec)
}

/// Classes applied only to the last match
pub fn last_child(spec: impl Into<ClassSpec>) -> ClassSpec {
    let spec = spec.into();
    ClassSpec::func(move |_, index, matched| {
        if index + 1 == matched.len() {
            spec.clone()
        } else {
            ClassSpec::None
        }
    })
}
