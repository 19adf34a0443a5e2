/*
 * Designgraph IR - design token extraction engine
 *
 * Feature-First Architecture:
 * - shared/      : Document model, tokens, scales, components, hierarchy, report
 * - features/    : Vertical slices (traversal → style_extraction → classification
 *                  → aggregation → hierarchy → consistency)
 * - pipeline/    : Session-scoped orchestration, progress, cancellation
 * - config/      : Presets, validated bounds, YAML v1 I/O
 *
 * Execution model:
 * - single-threaded, synchronous, one fresh session per run
 * - per-node failures absorbed, only an unreadable document is fatal
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (walker, extractors, classifier, aggregator, hierarchy, analyzer)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ExtractionConfig, Preset, ValidatedConfig};
pub use errors::{DesignGraphError, Result};
pub use pipeline::{
    CancellationToken, Completion, ExtractionOutput, ExtractionPipeline, ProgressSink,
    ProgressUpdate,
};
pub use shared::models::{
    DesignDocument, DesignNode, ExtractedTokenSet, MixedValue, NodeKind, SemanticRole,
    TokenCategory,
};

/// Validate `config` and run one extraction over `document`
pub fn extract_document(
    document: &DesignDocument,
    config: ExtractionConfig,
) -> Result<ExtractionOutput> {
    let pipeline = ExtractionPipeline::new(config.build()?);
    pipeline.extract(document)
}
