//! Tree nodes
//!
//! Nodes are immutable once built. Every update goes through a `with_*`
//! method returning a new `Arc<Node>` that shares unchanged attributes and
//! children with the original.

use std::sync::Arc;

/// Reserved attribute keys holding the class list.
const CLASS_KEYS: [&str; 2] = ["class", "className"];

/// Tag identifier for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tag {
    /// Literal element name ("div", "p", ...)
    Element(Arc<str>),
    /// Reference to a named component; identity is the name
    Component(Arc<str>),
}

impl Tag {
    /// Name this tag is compared by
    pub fn name(&self) -> &str {
        match self {
            Self::Element(name) | Self::Component(name) => name,
        }
    }
}

/// Child entry: an element node or an opaque text leaf.
///
/// Text leaves never match a selector and are never descended into, but they
/// are preserved in rewritten trees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Child {
    Node(Arc<Node>),
    Text(Arc<str>),
}

impl Child {
    /// Get the element node, if this child is one
    #[inline]
    pub fn as_node(&self) -> Option<&Arc<Node>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }
}

/// A labeled tree node: tag identifier, attribute map, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    tag: Tag,
    /// Attributes in insertion order (shared)
    attrs: Arc<[(Arc<str>, Arc<str>)]>,
    /// Children in document order (shared)
    children: Arc<[Child]>,
}

impl Node {
    /// Start building an element node
    pub fn element(name: &str) -> NodeBuilder {
        NodeBuilder::new(Tag::Element(Arc::from(name)))
    }

    /// Start building a component node
    pub fn component(name: &str) -> NodeBuilder {
        NodeBuilder::new(Tag::Component(Arc::from(name)))
    }

    /// Tag identifier
    #[inline]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Tag or component name
    #[inline]
    pub fn tag_name(&self) -> &str {
        self.tag.name()
    }

    /// Whether the tag references a named component
    #[inline]
    pub fn is_component(&self) -> bool {
        matches!(self.tag, Tag::Component(_))
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }

    /// Class list attribute (`class`, falling back to `className`)
    pub fn class_attr(&self) -> Option<&str> {
        CLASS_KEYS.iter().find_map(|&key| self.attr(key))
    }

    /// The `id` attribute
    pub fn id_attr(&self) -> Option<&str> {
        self.attr("id")
    }

    /// All children, text leaves included
    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Element children only, text leaves skipped
    pub fn child_nodes(&self) -> impl Iterator<Item = &Arc<Node>> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Create a modified copy with one attribute set, children shared
    pub fn with_attr(self: &Arc<Self>, name: &str, value: &str) -> Arc<Self> {
        let mut attrs: Vec<(Arc<str>, Arc<str>)> = self.attrs.to_vec();
        match attrs.iter_mut().find(|(key, _)| key.as_ref() == name) {
            Some(entry) => entry.1 = Arc::from(value),
            None => attrs.push((Arc::from(name), Arc::from(value))),
        }
        Arc::new(Node {
            tag: self.tag.clone(),
            attrs: Arc::from(attrs),
            children: Arc::clone(&self.children),
        })
    }

    /// Create a modified copy with `addition` appended to the class list,
    /// existing classes first, single space separated.
    ///
    /// An empty addition returns the node unchanged (reference-identical).
    pub fn with_class_appended(self: &Arc<Self>, addition: &str) -> Arc<Self> {
        if addition.is_empty() {
            return Arc::clone(self);
        }
        let joined = match self.class_attr() {
            Some(existing) if !existing.is_empty() => format!("{existing} {addition}"),
            _ => addition.to_string(),
        };
        self.with_attr(self.class_key(), &joined)
    }

    /// Create a modified copy with the child at `index` replaced
    pub fn with_child_at(self: &Arc<Self>, index: usize, child: Arc<Node>) -> Arc<Self> {
        let mut children: Vec<Child> = self.children.to_vec();
        if index < children.len() {
            children[index] = Child::Node(child);
        }
        Arc::new(Node {
            tag: self.tag.clone(),
            attrs: Arc::clone(&self.attrs),
            children: Arc::from(children),
        })
    }

    /// Reserved key class writes go to: whichever the node already uses,
    /// `class` for nodes that have neither.
    fn class_key(&self) -> &str {
        CLASS_KEYS
            .iter()
            .copied()
            .find(|&key| self.attr(key).is_some())
            .unwrap_or(CLASS_KEYS[0])
    }
}

/// Fluent builder for nodes
#[derive(Debug)]
pub struct NodeBuilder {
    tag: Tag,
    attrs: Vec<(Arc<str>, Arc<str>)>,
    children: Vec<Child>,
}

impl NodeBuilder {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((Arc::from(name), Arc::from(value)));
        self
    }

    /// Set the class attribute
    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    /// Set the id attribute
    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    /// Append an element child
    pub fn child(mut self, child: impl Into<Arc<Node>>) -> Self {
        self.children.push(Child::Node(child.into()));
        self
    }

    /// Append a text leaf
    pub fn text(mut self, content: &str) -> Self {
        self.children.push(Child::Text(Arc::from(content)));
        self
    }

    /// Freeze into an immutable node
    pub fn build(self) -> Arc<Node> {
        Arc::new(Node {
            tag: self.tag,
            attrs: Arc::from(self.attrs),
            children: Arc::from(self.children),
        })
    }
}

impl From<NodeBuilder> for Arc<Node> {
    fn from(builder: NodeBuilder) -> Self {
        builder.build()
    }
}
