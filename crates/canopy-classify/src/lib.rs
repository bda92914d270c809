//! Canopy Classify - Selector-driven class assignment
//!
//! Matches CSS-like simple selectors (tag, `.class`, `#id`, `:root`, `*`)
//! against an immutable node tree and produces a new tree with class lists
//! applied according to an ordered rule map. Search is preorder with
//! first-match pruning; writes go through path copying, so unmatched
//! subtrees are shared with the input.

mod builders;
mod engine;
mod error;
mod select;
mod selector;
mod spec;

pub use builders::{first_child, last_child, nth_child};
pub use engine::{Rule, RuleMap, classify};
pub use error::ClassifyError;
pub use select::{select, select_paths};
pub use selector::Selector;
pub use spec::ClassSpec;
