//! Session-scoped accumulators
//!
//! Every run allocates one [`ExtractionSession`]; nothing outlives it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use uuid::Uuid;

use crate::features::style_extraction::ExtractionStats;
use crate::features::traversal::{SkippedNode, WalkOutcome};
use crate::shared::models::{ComponentRecord, ExtractedTokenSet, HierarchyNode};
use crate::shared::utils::IdentifierGenerator;

/// Run statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    /// Wall-clock time of the whole run
    #[serde(rename = "total_ms", serialize_with = "as_millis")]
    pub total_duration: Duration,

    /// Stage name -> duration; per-unit stages accumulate
    #[serde(rename = "stage_ms", serialize_with = "map_as_millis")]
    pub stage_durations: BTreeMap<String, Duration>,

    pub units_total: usize,
    pub units_extracted: usize,
    pub units_analyzed: usize,
    pub nodes_visited: usize,
    pub nodes_hidden: usize,
    pub nodes_skipped: usize,

    /// Accepted / rejected reads per category
    pub values: ExtractionStats,
}

impl PipelineStats {
    pub fn record_stage(&mut self, stage_name: impl Into<String>, duration: Duration) {
        *self.stage_durations.entry(stage_name.into()).or_default() += duration;
    }

    pub fn stage(&self, stage_name: &str) -> Option<Duration> {
        self.stage_durations.get(stage_name).copied()
    }
}

fn as_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

fn map_as_millis<S: serde::Serializer>(
    durations: &BTreeMap<String, Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(durations.len()))?;
    for (stage, duration) in durations {
        map.serialize_entry(stage, &(duration.as_millis() as u64))?;
    }
    map.end()
}

/// Fresh accumulator state of one invocation
#[derive(Debug)]
pub struct ExtractionSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub tokens: ExtractedTokenSet,
    pub records: Vec<ComponentRecord>,
    pub hierarchy: Vec<HierarchyNode>,
    pub identifiers: IdentifierGenerator,
    pub warnings: Vec<String>,
    pub truncated: bool,
    pub skipped: Vec<SkippedNode>,
    pub stats: PipelineStats,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            tokens: ExtractedTokenSet::new(),
            records: Vec::new(),
            hierarchy: Vec::new(),
            identifiers: IdentifierGenerator::new(),
            warnings: Vec::new(),
            truncated: false,
            skipped: Vec::new(),
            stats: PipelineStats::default(),
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Fold the structural findings of one walked unit into the session
    pub fn absorb_walk(&mut self, unit: &str, outcome: &WalkOutcome<'_>) {
        self.stats.nodes_visited += outcome.len();
        self.stats.nodes_hidden += outcome.hidden;
        self.stats.nodes_skipped += outcome.skipped.len();
        self.skipped.extend(outcome.skipped.iter().cloned());

        if outcome.is_truncated() {
            self.truncated = true;
        }
        for truncation in &outcome.truncations {
            self.warnings
                .push(format!("unit '{}': {}", unit, truncation.message()));
        }
        for skipped in &outcome.skipped {
            self.warnings.push(format!(
                "unit '{}': skipped node {} ({})",
                unit, skipped.id, skipped.reason
            ));
        }
    }
}

impl Default for ExtractionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraversalConfig;
    use crate::features::traversal::SceneWalker;
    use crate::shared::models::{DesignNode, NodeKind};

    #[test]
    fn test_sessions_are_independent() {
        let a = ExtractionSession::new();
        let b = ExtractionSession::new();
        assert_ne!(a.id, b.id);
        assert!(a.tokens.is_empty());
        assert!(a.identifiers.is_empty());
    }

    #[test]
    fn test_record_stage_accumulates() {
        let mut stats = PipelineStats::default();
        stats.record_stage("walk", Duration::from_millis(3));
        stats.record_stage("walk", Duration::from_millis(4));
        assert_eq!(stats.stage("walk"), Some(Duration::from_millis(7)));
        assert_eq!(stats.stage("aggregate"), None);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["stage_ms"]["walk"], 7);
    }

    #[test]
    fn test_absorb_walk_collects_warnings() {
        let mut node = DesignNode::new("leaf", "Leaf", NodeKind::Frame);
        for i in 0..4 {
            node = DesignNode::new(format!("n{i}"), "Level", NodeKind::Frame).with_child(node);
        }
        let root = node.with_child(DesignNode::new("", "Broken", NodeKind::Rectangle));
        let config = TraversalConfig::default().max_depth(2);
        let outcome = SceneWalker::new(&config).walk_unit(&root);

        let mut session = ExtractionSession::new();
        session.absorb_walk("Home", &outcome);
        assert!(session.truncated);
        assert_eq!(session.skipped.len(), 1);
        assert_eq!(session.stats.nodes_skipped, 1);
        assert_eq!(session.warnings.len(), 2);
        assert!(session.warnings.iter().all(|w| w.starts_with("unit 'Home'")));
    }
}
