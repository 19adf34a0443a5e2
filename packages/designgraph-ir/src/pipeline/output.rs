//! Pipeline output

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::session::PipelineStats;
use crate::errors::Result;
use crate::features::aggregation::ColorPalette;
use crate::features::traversal::SkippedNode;
use crate::shared::models::{
    ComponentLibrary, ComponentRecord, ConsistencyReport, ExtractedTokenSet, HierarchyNode,
    ScaleSet,
};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    Complete,
    /// The cancellation token fired; results cover the units seen so far
    Cancelled,
    /// The wall-clock budget ran out; results cover the units seen so far
    TimedOut,
}

impl Completion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Completion::Complete => "complete",
            Completion::Cancelled => "cancelled",
            Completion::TimedOut => "timed_out",
        }
    }

    pub fn is_partial(&self) -> bool {
        !matches!(self, Completion::Complete)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one run produced
///
/// ```text
/// ExtractionOutput
/// ├── tokens      raw validated values per category
/// ├── scales      named buckets (font size, spacing, radius, shadow, opacity)
/// ├── palette     semantic / grayscale / accent colors + named scale
/// ├── components  role -> variants
/// ├── records     one per classified node
/// ├── hierarchy   unit trees with style maps
/// └── report      consistency score and advice
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutput {
    pub session_id: String,
    pub document: String,
    pub started_at: DateTime<Utc>,
    pub completion: Completion,

    pub tokens: ExtractedTokenSet,
    pub scales: ScaleSet,
    pub palette: ColorPalette,
    pub components: ComponentLibrary,
    pub records: Vec<ComponentRecord>,
    pub hierarchy: Vec<HierarchyNode>,
    pub report: ConsistencyReport,

    /// Advisory messages (truncation, skipped nodes, early exit)
    pub warnings: Vec<String>,
    pub truncated: bool,
    pub skipped: Vec<SkippedNode>,
    pub stats: PipelineStats,
}

impl ExtractionOutput {
    pub fn is_complete(&self) -> bool {
        self.completion == Completion::Complete
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
