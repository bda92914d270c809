//! Canopy DOM - Immutable node tree
//!
//! Persistent, Arc-shared tree of labeled nodes with path copying. Attribute
//! updates return new nodes; unchanged subtrees are shared between versions.

mod node;
mod path;

pub use node::{Child, Node, NodeBuilder, Tag};
pub use path::NodePath;
