//! Consistency report

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Raw figures the score was computed from
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConsistencyMetrics {
    pub color_count: usize,
    pub font_size_count: usize,
    pub font_weight_count: usize,
    pub font_family_count: usize,
    /// Consecutive font-size ratios outside the modular band
    pub off_scale_ratios: usize,
    pub units_analyzed: usize,
    pub component_types: usize,
    pub shared_component_types: usize,
    /// shared / total component types, 0 when there are none
    pub reuse_ratio: f64,
}

/// Advisory quality score for one extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    /// 0..=100
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub metrics: ConsistencyMetrics,
    pub generated_at: DateTime<Utc>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
