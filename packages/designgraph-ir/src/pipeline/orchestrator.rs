//! Extraction Pipeline
//!
//! Wires walker, extractors, classifier, aggregator, hierarchy builder and
//! analyzer into one synchronous run.
//!
//! # Phases
//! 1. Raw extraction, per unit: walk, read tokens, collect component records
//! 2. Aggregation: scales, palette, component library
//! 3. Analysis, per unit: hierarchy trees
//! 4. Consistency report over everything extracted
//!
//! Cancellation and the deadline are checked before each unit of phases 1
//! and 3. An early exit skips the remaining units but still aggregates and
//! reports what was collected.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::cancellation::CancellationToken;
use super::output::{Completion, ExtractionOutput};
use super::progress::{
    unit_checkpoint, NoopProgress, ProgressSink, ProgressTracker, AGGREGATION_DONE,
    ANALYSIS_DONE, COMPLETE, EXTRACTION_DONE, EXTRACTION_START, START,
};
use super::session::ExtractionSession;
use crate::config::{ExtractionConfig, ValidatedConfig};
use crate::errors::{DesignGraphError, Result};
use crate::features::aggregation::{build_scales, PaletteBuilder, VariantAggregator};
use crate::features::classification::SemanticClassifier;
use crate::features::consistency::ConsistencyAnalyzer;
use crate::features::hierarchy::HierarchyBuilder;
use crate::features::style_extraction::ExtractorRegistry;
use crate::features::traversal::{SceneWalker, WalkOutcome};
use crate::shared::models::{DesignDocument, DesignNode};

/// Stage names used in [`super::PipelineStats::stage_durations`]
pub mod stages {
    pub const WALK: &str = "walk";
    pub const EXTRACT: &str = "extract";
    pub const CLASSIFY: &str = "classify";
    pub const AGGREGATE: &str = "aggregate";
    pub const HIERARCHY: &str = "hierarchy";
    pub const CONSISTENCY: &str = "consistency";
}

pub struct ExtractionPipeline {
    config: ValidatedConfig,
    walker: SceneWalker,
    registry: ExtractorRegistry,
    classifier: SemanticClassifier,
    palette: PaletteBuilder,
    variants: VariantAggregator,
    analyzer: ConsistencyAnalyzer,
}

impl ExtractionPipeline {
    pub fn new(config: ValidatedConfig) -> Self {
        Self {
            walker: SceneWalker::new(&config.traversal),
            registry: ExtractorRegistry::new(&config),
            classifier: SemanticClassifier::new(&config.classification),
            palette: PaletteBuilder::new(&config.palette),
            variants: VariantAggregator::new(),
            analyzer: ConsistencyAnalyzer::new(),
            config,
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        self.config.as_inner()
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Run without progress reporting or cancellation
    pub fn extract(&self, document: &DesignDocument) -> Result<ExtractionOutput> {
        self.run(document, &mut NoopProgress, &CancellationToken::new())
    }

    /// Run with the configured wall-clock budget
    pub fn run(
        &self,
        document: &DesignDocument,
        progress: &mut dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<ExtractionOutput> {
        let deadline = self.config.timeout().map(|budget| Instant::now() + budget);
        self.run_until(document, progress, cancel, deadline)
    }

    /// Run with an explicit deadline (`None` = unlimited)
    pub fn run_until(
        &self,
        document: &DesignDocument,
        progress: &mut dyn ProgressSink,
        cancel: &CancellationToken,
        deadline: Option<Instant>,
    ) -> Result<ExtractionOutput> {
        let total_start = Instant::now();

        if document.roots.is_empty() {
            return Err(DesignGraphError::host_access(format!(
                "document '{}' has no top-level units to extract",
                document.name
            )));
        }

        let mut session = ExtractionSession::new();
        let mut tracker = ProgressTracker::new(progress);
        let unit_count = document.roots.len();
        session.stats.units_total = unit_count;

        info!(
            "run: session {} over {} units of '{}' ({})",
            session.id,
            unit_count,
            document.name,
            self.config.describe()
        );
        tracker.emit(START, "start");

        // Phase 1: raw extraction
        let mut completion = Completion::Complete;
        let mut walked: Vec<(&str, WalkOutcome<'_>)> = Vec::with_capacity(unit_count);

        for (i, root) in document.roots.iter().enumerate() {
            if let Some(stop) = Self::interruption(cancel, deadline) {
                completion = stop;
                break;
            }
            let unit = unit_name(root);
            tracker.emit(
                unit_checkpoint(EXTRACTION_START, EXTRACTION_DONE, i, unit_count),
                format!("extracting {unit}"),
            );
            let outcome = self.extract_unit(unit, root, &mut session);
            walked.push((unit, outcome));
        }
        tracker.emit(EXTRACTION_DONE, "raw extraction done");

        // Phase 2: aggregation
        let start = Instant::now();
        let scales = build_scales(&session.tokens);
        let palette = self.palette.build(&session.tokens.colors);
        let components = self.variants.aggregate(&session.records);
        session.stats.record_stage(stages::AGGREGATE, start.elapsed());
        debug!(
            "run: aggregated {} tokens, {} palette colors, {} component roles",
            session.tokens.len(),
            palette.len(),
            components.roles.len()
        );
        tracker.emit(AGGREGATION_DONE, "aggregation done");

        // Phase 3: per-unit analysis
        if completion == Completion::Complete {
            let builder = HierarchyBuilder::new(&self.registry);
            let walked_count = walked.len();
            for (i, (unit, outcome)) in walked.iter().enumerate() {
                if let Some(stop) = Self::interruption(cancel, deadline) {
                    completion = stop;
                    break;
                }
                let start = Instant::now();
                let roots = builder.build(unit, outcome, &mut session.identifiers);
                session.hierarchy.extend(roots);
                session.stats.record_stage(stages::HIERARCHY, start.elapsed());
                session.stats.units_analyzed += 1;
                tracker.emit(
                    unit_checkpoint(AGGREGATION_DONE, ANALYSIS_DONE, i + 1, walked_count),
                    format!("analyzing {unit}"),
                );
            }
        }

        // Phase 4: consistency
        let start = Instant::now();
        let report = self.analyzer.analyze(
            &session.tokens,
            &session.records,
            session.stats.units_extracted,
        );
        session.stats.record_stage(stages::CONSISTENCY, start.elapsed());

        if completion.is_partial() {
            let message = format!(
                "extraction {} after {} of {} units",
                completion, session.stats.units_extracted, unit_count
            );
            warn!("run: {}", message);
            session.warn(message);
        }

        session.stats.total_duration = total_start.elapsed();
        tracker.emit(COMPLETE, completion.as_str());
        info!(
            "run: session {} {} in {:?} ({} tokens, {} components, score {})",
            session.id,
            completion,
            session.stats.total_duration,
            session.tokens.len(),
            session.records.len(),
            report.score
        );

        Ok(ExtractionOutput {
            session_id: session.id.to_string(),
            document: document.name.clone(),
            started_at: session.started_at,
            completion,
            tokens: session.tokens,
            scales,
            palette,
            components,
            records: session.records,
            hierarchy: session.hierarchy,
            report,
            warnings: session.warnings,
            truncated: session.truncated,
            skipped: session.skipped,
            stats: session.stats,
        })
    }

    /// Walk one unit, read its tokens and collect its component records
    fn extract_unit<'a>(
        &self,
        unit: &str,
        root: &'a DesignNode,
        session: &mut ExtractionSession,
    ) -> WalkOutcome<'a> {
        let start = Instant::now();
        let outcome = self.walker.walk_unit(root);
        session.stats.record_stage(stages::WALK, start.elapsed());
        session.absorb_walk(unit, &outcome);

        let start = Instant::now();
        for node in outcome.nodes() {
            self.registry
                .extract_into(node, &mut session.tokens, &mut session.stats.values);
        }
        session.stats.record_stage(stages::EXTRACT, start.elapsed());

        let start = Instant::now();
        let records = self
            .classifier
            .collect_records(&outcome, unit, &self.registry);
        session.records.extend(records);
        session.stats.record_stage(stages::CLASSIFY, start.elapsed());

        session.stats.units_extracted += 1;
        debug!(
            "extract_unit: '{}' -> {} nodes, {} tokens so far",
            unit,
            outcome.len(),
            session.tokens.len()
        );
        outcome
    }

    fn interruption(cancel: &CancellationToken, deadline: Option<Instant>) -> Option<Completion> {
        if cancel.is_cancelled() {
            return Some(Completion::Cancelled);
        }
        match deadline {
            Some(deadline) if Instant::now() >= deadline => Some(Completion::TimedOut),
            _ => None,
        }
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(ValidatedConfig::default())
    }
}

/// Unit label: the root's name, or its id when unnamed
fn unit_name(root: &DesignNode) -> &str {
    if root.name.trim().is_empty() {
        &root.id
    } else {
        &root.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RecordingProgress;
    use crate::shared::models::{Color, NodeKind, Paint};

    fn screen(id: &str, name: &str) -> DesignNode {
        DesignNode::new(id, name, NodeKind::Frame)
            .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
            .with_child(
                DesignNode::new(format!("{id}-b"), "Primary Button", NodeKind::Frame)
                    .with_size(120.0, 44.0)
                    .with_corner_radius(8.0)
                    .with_fill(Paint::solid(Color::rgb(0.0, 0.0, 0.0))),
            )
    }

    #[test]
    fn test_empty_document_is_host_access_error() {
        let err = ExtractionPipeline::default()
            .extract(&DesignDocument::new("Empty", Vec::new()))
            .unwrap_err();
        assert!(err.is_host_access());
    }

    #[test]
    fn test_stage_timings_recorded() {
        let doc = DesignDocument::new("App", vec![screen("1", "Home")]);
        let output = ExtractionPipeline::default().extract(&doc).unwrap();
        assert!(output.is_complete());
        for stage in [
            stages::WALK,
            stages::EXTRACT,
            stages::CLASSIFY,
            stages::AGGREGATE,
            stages::HIERARCHY,
            stages::CONSISTENCY,
        ] {
            assert!(output.stats.stage(stage).is_some(), "missing stage {stage}");
        }
        assert_eq!(output.stats.units_extracted, 1);
        assert_eq!(output.stats.units_analyzed, 1);
        assert_eq!(output.stats.nodes_visited, 2);
    }

    #[test]
    fn test_expired_deadline_times_out_before_first_unit() {
        let doc = DesignDocument::new("App", vec![screen("1", "Home"), screen("2", "Settings")]);
        let mut progress = RecordingProgress::new();
        let output = ExtractionPipeline::default()
            .run_until(&doc, &mut progress, &CancellationToken::new(), Some(Instant::now()))
            .unwrap();
        assert_eq!(output.completion, Completion::TimedOut);
        assert!(output.tokens.is_empty());
        assert_eq!(progress.last().map(|u| u.percent), Some(COMPLETE));
    }

    #[test]
    fn test_unnamed_unit_uses_id() {
        let root = DesignNode::new("42:7", "  ", NodeKind::Frame);
        assert_eq!(unit_name(&root), "42:7");
    }
}
