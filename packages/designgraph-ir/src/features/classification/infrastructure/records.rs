//! Component records for one walked unit

use tracing::debug;

use super::{build_snapshot, infer_variant, SemanticClassifier};
use crate::features::style_extraction::ExtractorRegistry;
use crate::features::traversal::WalkOutcome;
use crate::shared::models::ComponentRecord;

impl SemanticClassifier {
    /// One record per classified node, in document order
    pub fn collect_records(
        &self,
        outcome: &WalkOutcome<'_>,
        unit: &str,
        registry: &ExtractorRegistry,
    ) -> Vec<ComponentRecord> {
        let records: Vec<ComponentRecord> = outcome
            .nodes()
            .filter_map(|node| {
                let classification = self.classify(node);
                if !classification.is_classified() {
                    return None;
                }
                Some(ComponentRecord {
                    role: classification.role,
                    node_id: node.id.clone(),
                    node_name: node.name.clone(),
                    unit: unit.to_string(),
                    snapshot: build_snapshot(node, registry),
                    variant: infer_variant(&node.name),
                })
            })
            .collect();

        debug!(
            "collect_records: {} components in unit '{}'",
            records.len(),
            unit
        );
        records
    }
}
