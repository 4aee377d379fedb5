//! Tagged renderable-node trees.
//!
//! A view layer hands widgets an opaque tree of renderable nodes; some
//! widgets need to pull out children carrying a marker tag (the modal
//! provider separates its dialog children from everything else). The
//! partition recurses into untagged composite nodes so tagged nodes are
//! lifted out from any depth, while the remaining tree keeps its shape.

use serde::{Deserialize, Serialize};

/// An opaque renderable node with an optional marker tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Marker tag used for partitioning
    pub tag: Option<String>,
    /// Render key, opaque to the widgets
    pub key: Option<String>,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create an untagged node.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            tag: None,
            key: Some(key.into()),
            children: Vec::new(),
        }
    }

    /// Create a tagged node.
    #[must_use]
    pub fn tagged(tag: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            key: Some(key.into()),
            children: Vec::new(),
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: Self) -> Self {
        self.children.push(node);
        self
    }

    /// Add multiple child nodes.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Whether this node carries one of the given tags.
    #[must_use]
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        self.tag.as_deref().is_some_and(|tag| tags.contains(&tag))
    }
}

/// Partition nodes into (matching, non-matching) by tag.
///
/// Matching nodes are collected as-is. Non-matching nodes with children
/// are recursed into: matching descendants are lifted into the first
/// list, and the node is kept in the second list with only its
/// non-matching descendants. Order is preserved in both lists.
#[must_use]
pub fn partition_by_tag(nodes: &[Node], tags: &[&str]) -> (Vec<Node>, Vec<Node>) {
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for node in nodes {
        if node.has_tag(tags) {
            matching.push(node.clone());
        } else if node.children.is_empty() {
            rest.push(node.clone());
        } else {
            let (inner_matching, inner_rest) = partition_by_tag(&node.children, tags);
            matching.extend(inner_matching);
            rest.push(Node {
                tag: node.tag.clone(),
                key: node.key.clone(),
                children: inner_rest,
            });
        }
    }
    (matching, rest)
}
