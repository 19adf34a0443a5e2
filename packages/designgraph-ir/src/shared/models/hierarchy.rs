//! Hierarchy output model

use serde::Serialize;
use std::collections::BTreeMap;

use super::node::NodeKind;
use super::tokens::TokenCategory;

/// Resolved style of a single node: category -> display values
pub type StyleMap = BTreeMap<TokenCategory, Vec<String>>;

/// Mirror of one scene-graph node with its own resolved styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    /// Ancestor names, root first, excluding this node
    pub path: Vec<String>,
    /// `{sanitized_path}_{salt}`, unique within a session
    pub identifier: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: StyleMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Pre-order iterator over this node and its descendants
    pub fn iter(&self) -> HierarchyIter<'_> {
        HierarchyIter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including self
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    pub fn find(&self, id: &str) -> Option<&HierarchyNode> {
        self.iter().find(|n| n.id == id)
    }
}

pub struct HierarchyIter<'a> {
    stack: Vec<&'a HierarchyNode>,
}

impl<'a> Iterator for HierarchyIter<'a> {
    type Item = &'a HierarchyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> HierarchyNode {
        HierarchyNode {
            id: id.to_string(),
            name: id.to_string(),
            kind: NodeKind::Rectangle,
            depth: 1,
            path: vec!["root".to_string()],
            identifier: format!("root_{id}_00000000"),
            styles: StyleMap::new(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_preorder_iteration() {
        let root = HierarchyNode {
            id: "root".to_string(),
            name: "root".to_string(),
            kind: NodeKind::Frame,
            depth: 0,
            path: Vec::new(),
            identifier: "root_00000000".to_string(),
            styles: StyleMap::new(),
            children: vec![leaf("a"), leaf("b")],
        };

        let ids: Vec<&str> = root.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "a", "b"]);
        assert_eq!(root.size(), 3);
        assert!(root.find("b").is_some());
        assert!(root.find("c").is_none());
    }
}
