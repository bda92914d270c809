//! Simple selectors
//!
//! A closed set of single simple selectors: `*`, `:root`, `.class`, `#id`,
//! and tag name. No combinators.

use std::fmt;

use canopy_dom::Node;

/// A single simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*` - matches any node
    Universal,
    /// `:root` - matches only the root of the current search scope
    Root,
    /// `.name` - class list membership
    Class(String),
    /// `#name` - id equality
    Id(String),
    /// Tag or component name, exact match
    Tag(String),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// Never fails: anything that is not `*`, `:root`, `.class`, or `#id`
    /// is treated as a tag name.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == "*" {
            Self::Universal
        } else if s == ":root" {
            Self::Root
        } else if let Some(class) = s.strip_prefix('.') {
            Self::Class(class.to_string())
        } else if let Some(id) = s.strip_prefix('#') {
            Self::Id(id.to_string())
        } else {
            Self::Tag(s.to_string())
        }
    }

    /// Match this selector against a node.
    ///
    /// `is_scope_root` is true only for the root of the current search
    /// scope; it drives `:root` and nothing else. Nodes missing the
    /// relevant attribute simply do not match.
    pub fn matches(&self, node: &Node, is_scope_root: bool) -> bool {
        match self {
            Self::Universal => true,
            Self::Root => is_scope_root,
            Self::Class(name) => node
                .class_attr()
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == name)),
            Self::Id(name) => node.id_attr() == Some(name.as_str()),
            // Components are compared by name, same as literal tags
            Self::Tag(name) => node.tag_name() == name,
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => f.write_str("*"),
            Self::Root => f.write_str(":root"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Tag(name) => f.write_str(name),
        }
    }
}
