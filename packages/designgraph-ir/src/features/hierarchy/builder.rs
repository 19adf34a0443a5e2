//! Hierarchy Builder
//!
//! Mirrors a walked unit into [`HierarchyNode`]s.
//!
//! # Algorithm
//! 1. Forward pass over the visits: identifiers are generated in document
//!    order so collision suffixes are deterministic
//! 2. Reverse pass: each node takes its pending children and is handed to its
//!    parent's pending list (or becomes a root)
//!
//! Every visit becomes exactly one node; instanced substructures are plain
//! copies and are never revisited.

use tracing::debug;

use crate::features::style_extraction::ExtractorRegistry;
use crate::features::traversal::WalkOutcome;
use crate::shared::models::HierarchyNode;
use crate::shared::utils::{IdentifierContext, IdentifierGenerator};

pub struct HierarchyBuilder<'r> {
    registry: &'r ExtractorRegistry,
}

impl<'r> HierarchyBuilder<'r> {
    pub fn new(registry: &'r ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Build the trees of one unit; `ids` is the session's identifier set
    pub fn build(
        &self,
        unit: &str,
        outcome: &WalkOutcome<'_>,
        ids: &mut IdentifierGenerator,
    ) -> Vec<HierarchyNode> {
        let visits = &outcome.visits;

        let identifiers: Vec<String> = visits
            .iter()
            .map(|visit| {
                ids.generate(&IdentifierContext {
                    unit,
                    ancestors: &visit.path,
                    name: &visit.node.name,
                    index_path: &visit.index_path,
                    node_id: &visit.node.id,
                })
            })
            .collect();

        let mut pending: Vec<Vec<HierarchyNode>> = vec![Vec::new(); visits.len()];
        let mut roots = Vec::new();

        for (i, identifier) in identifiers.into_iter().enumerate().rev() {
            let visit = &visits[i];
            let mut children = std::mem::take(&mut pending[i]);
            children.reverse();

            let node = HierarchyNode {
                id: visit.node.id.clone(),
                name: visit.node.name.clone(),
                kind: visit.node.kind,
                depth: visit.depth,
                path: visit.path.clone(),
                identifier,
                styles: self.registry.resolve_style_map(visit.node),
                children,
            };

            match visit.parent {
                Some(parent) => pending[parent].push(node),
                None => roots.push(node),
            }
        }
        roots.reverse();

        debug!(
            "build_hierarchy: unit '{}' -> {} roots, {} nodes",
            unit,
            roots.len(),
            visits.len()
        );
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::features::traversal::SceneWalker;
    use crate::shared::models::{Color, DesignNode, NodeKind, Paint, TokenCategory};

    fn build(root: &DesignNode) -> Vec<HierarchyNode> {
        let config = ExtractionConfig::default();
        let registry = ExtractorRegistry::new(&config);
        let outcome = SceneWalker::new(&config.traversal).walk_unit(root);
        let mut ids = IdentifierGenerator::new();
        HierarchyBuilder::new(&registry).build(&root.name, &outcome, &mut ids)
    }

    #[test]
    fn test_tree_mirrors_document() {
        let root = DesignNode::new("1", "Home", NodeKind::Frame)
            .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
            .with_child(
                DesignNode::new("2", "Header", NodeKind::Frame)
                    .with_child(DesignNode::new("3", "Logo", NodeKind::Vector)),
            )
            .with_child(DesignNode::new("4", "Footer", NodeKind::Frame));

        let roots = build(&root);
        assert_eq!(roots.len(), 1);
        let home = &roots[0];
        assert_eq!(home.size(), 4);
        let ids: Vec<&str> = home.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);

        let logo = home.find("3").unwrap();
        assert_eq!(logo.depth, 2);
        assert_eq!(logo.path, vec!["Home".to_string(), "Header".to_string()]);
        assert!(logo.identifier.starts_with("home_header_logo_"));

        assert_eq!(home.styles[&TokenCategory::Color], vec!["#FFFFFF".to_string()]);
        assert!(home.children[0].styles.is_empty());
    }

    #[test]
    fn test_repeated_sibling_names_have_unique_identifiers() {
        let root = DesignNode::new("1", "List", NodeKind::Frame).with_children(
            (0..5).map(|i| DesignNode::new(format!("item-{i}"), "Item", NodeKind::Frame)),
        );
        let roots = build(&root);
        let mut identifiers: Vec<&str> = roots[0].iter().map(|n| n.identifier.as_str()).collect();
        let total = identifiers.len();
        identifiers.sort_unstable();
        identifiers.dedup();
        assert_eq!(identifiers.len(), total);
    }
}
