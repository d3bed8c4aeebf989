//! The story tree produced by one generation.

use serde::Serialize;

/// A node of a generated story.
///
/// Serializes as a bare string for leaves and as
/// `{"label": ..., "children": [...]}` for branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoryNode {
    /// Literal text.
    Leaf(String),
    /// A generated table and everything it produced.
    Branch {
        /// The table name.
        label: String,
        /// Results in generation order.
        children: Vec<StoryNode>,
    },
}

impl StoryNode {
    /// A leaf node.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// A branch node.
    pub fn branch(label: impl Into<String>, children: Vec<StoryNode>) -> Self {
        Self::Branch {
            label: label.into(),
            children,
        }
    }

    /// The node's text or table name.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(text) => text,
            Self::Branch { label, .. } => label,
        }
    }

    /// Child nodes; always empty for leaves.
    pub fn children(&self) -> &[StoryNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { children, .. } => children,
        }
    }

    /// Returns true for literal text.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Total nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Longest path from this node to a descendant (0 for a lone node).
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Direct children with the given label.
    pub fn children_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a StoryNode> {
        self.children().iter().filter(move |c| c.label() == label)
    }
}
