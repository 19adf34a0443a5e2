//! Traversal domain types

use serde::Serialize;

use crate::shared::models::{DesignNode, MalformedNode};

/// One emitted node, in document order
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    pub node: &'a DesignNode,
    pub depth: usize,
    /// Index of the parent's visit in the same outcome; `None` for roots
    pub parent: Option<usize>,
    /// Position among the parent's children (or among the roots)
    pub sibling_index: usize,
    /// Ancestor names, root first
    pub path: Vec<String>,
    /// Child indices from the root down to this node, root index first
    pub index_path: Vec<usize>,
}

impl Visit<'_> {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Structural guard that cut the walk short
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Truncation {
    /// Children existed below `max_depth`
    Depth { max_depth: usize },
    /// More than `max_nodes` nodes were reachable
    NodeCount { max_nodes: usize },
}

impl Truncation {
    pub fn message(&self) -> String {
        match self {
            Truncation::Depth { max_depth } => {
                format!("traversal truncated: nodes deeper than {max_depth} levels were not visited")
            }
            Truncation::NodeCount { max_nodes } => {
                format!("traversal truncated: node limit of {max_nodes} reached")
            }
        }
    }
}

/// A node excluded with its subtree because it could not be read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedNode {
    pub id: String,
    pub name: String,
    pub reason: String,
}

impl SkippedNode {
    pub fn new(node: &DesignNode, err: &MalformedNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            reason: err.to_string(),
        }
    }
}

/// Result of walking one or more roots
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome<'a> {
    pub visits: Vec<Visit<'a>>,
    pub truncations: Vec<Truncation>,
    pub skipped: Vec<SkippedNode>,
    /// Hidden nodes excluded (subtree roots only)
    pub hidden: usize,
}

impl<'a> WalkOutcome<'a> {
    pub fn is_truncated(&self) -> bool {
        !self.truncations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &'a DesignNode> + '_ {
        self.visits.iter().map(|v| v.node)
    }

    pub fn max_depth(&self) -> usize {
        self.visits.iter().map(|v| v.depth).max().unwrap_or(0)
    }

    /// Indices of the direct children of visit `index`
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.visits
            .iter()
            .enumerate()
            .filter(move |(_, v)| v.parent == Some(index))
            .map(|(i, _)| i)
    }
}
