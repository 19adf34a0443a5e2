//! Scene Graph Walker
//!
//! Bounded pre-order traversal over the document tree.
//!
//! # Algorithm
//! 1. Push roots (reversed) onto an explicit work stack
//! 2. Pop a frame; drop it with its subtree if hidden or unreadable
//! 3. Emit a [`Visit`] unless the node budget is spent
//! 4. Push container children (reversed) unless the depth limit is reached
//!
//! Output order always equals input child order. Guards never raise; they
//! leave a [`Truncation`] on the outcome.

use tracing::{debug, trace, warn};

use crate::config::TraversalConfig;
use crate::features::traversal::domain::{SkippedNode, Truncation, Visit, WalkOutcome};
use crate::shared::models::DesignNode;

struct Frame<'a> {
    node: &'a DesignNode,
    depth: usize,
    parent: Option<usize>,
    sibling_index: usize,
    path: Vec<String>,
    index_path: Vec<usize>,
}

/// Walker configured with depth/count limits
#[derive(Debug, Clone)]
pub struct SceneWalker {
    max_depth: usize,
    max_nodes: usize,
    include_hidden: bool,
}

impl SceneWalker {
    pub fn new(config: &TraversalConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_nodes: config.max_nodes,
            include_hidden: config.include_hidden,
        }
    }

    /// Walk a single unit root
    pub fn walk_unit<'a>(&self, root: &'a DesignNode) -> WalkOutcome<'a> {
        self.walk(std::slice::from_ref(root))
    }

    /// Walk all roots in order, sharing one node budget
    pub fn walk<'a>(&self, roots: &'a [DesignNode]) -> WalkOutcome<'a> {
        let mut outcome = WalkOutcome::default();
        let mut stack: Vec<Frame<'a>> = roots
            .iter()
            .enumerate()
            .rev()
            .map(|(i, node)| Frame {
                node,
                depth: 0,
                parent: None,
                sibling_index: i,
                path: Vec::new(),
                index_path: vec![i],
            })
            .collect();

        while let Some(frame) = stack.pop() {
            let node = frame.node;

            if !node.visible && !self.include_hidden {
                trace!("walk: skipping hidden node {}", node.id);
                outcome.hidden += 1;
                continue;
            }

            if let Err(err) = node.check() {
                warn!("walk: skipping unreadable node '{}': {}", node.name, err);
                outcome.skipped.push(SkippedNode::new(node, &err));
                continue;
            }

            if outcome.visits.len() >= self.max_nodes {
                Self::note(&mut outcome, Truncation::NodeCount {
                    max_nodes: self.max_nodes,
                });
                break;
            }

            let index = outcome.visits.len();
            let descend = node.kind.is_container() && !node.children.is_empty();

            if descend {
                if frame.depth >= self.max_depth {
                    Self::note(&mut outcome, Truncation::Depth {
                        max_depth: self.max_depth,
                    });
                } else {
                    let mut child_path = frame.path.clone();
                    child_path.push(node.name.clone());
                    for (i, child) in node.children.iter().enumerate().rev() {
                        let mut index_path = frame.index_path.clone();
                        index_path.push(i);
                        stack.push(Frame {
                            node: child,
                            depth: frame.depth + 1,
                            parent: Some(index),
                            sibling_index: i,
                            path: child_path.clone(),
                            index_path,
                        });
                    }
                }
            }

            outcome.visits.push(Visit {
                node,
                depth: frame.depth,
                parent: frame.parent,
                sibling_index: frame.sibling_index,
                path: frame.path,
                index_path: frame.index_path,
            });
        }

        debug!(
            "walk: visited {} nodes (max depth {}, {} skipped, {} hidden)",
            outcome.visits.len(),
            outcome.max_depth(),
            outcome.skipped.len(),
            outcome.hidden
        );

        outcome
    }

    fn note(outcome: &mut WalkOutcome<'_>, truncation: Truncation) {
        if !outcome.truncations.contains(&truncation) {
            warn!("walk: {}", truncation.message());
            outcome.truncations.push(truncation);
        }
    }
}
