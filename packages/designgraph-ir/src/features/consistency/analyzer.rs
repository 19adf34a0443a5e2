//! Consistency Analyzer
//!
//! Scores aggregated tokens and component records. Advisory only.
//!
//! # Scoring
//! - start at 100
//! - -15 when more than one consecutive font-size ratio falls outside
//!   `[1.1, 1.6]` among more than 3 sizes
//! - -10 per exceeded count threshold (colors, font sizes, weights, families)
//! - -round(20 * (1 - reuse)) when more than one unit was analyzed and at
//!   least one component type exists
//! - clamp to `0..=100`

use chrono::Utc;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use tracing::debug;

use crate::shared::models::{
    ComponentRecord, ConsistencyMetrics, ConsistencyReport, ExtractedTokenSet, SemanticRole,
};

const MODULAR_RATIO_MIN: f64 = 1.1;
const MODULAR_RATIO_MAX: f64 = 1.6;
const MODULAR_PENALTY: i32 = 15;
const COUNT_PENALTY: i32 = 10;
const REUSE_WEIGHT: f64 = 20.0;

/// Count limits above which a category is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLimits {
    pub colors: usize,
    pub font_sizes: usize,
    pub font_weights: usize,
    pub font_families: usize,
}

impl Default for CountLimits {
    fn default() -> Self {
        Self {
            colors: 16,
            font_sizes: 8,
            font_weights: 4,
            font_families: 2,
        }
    }
}

/// Consecutive ratios of ascending sizes outside the modular band
pub fn off_scale_ratios(sizes: &BTreeSet<u32>) -> usize {
    let sizes: Vec<f64> = sizes.iter().map(|s| f64::from(*s)).collect();
    sizes
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| w[1] / w[0])
        .filter(|ratio| !(MODULAR_RATIO_MIN..=MODULAR_RATIO_MAX).contains(ratio))
        .count()
}

/// (distinct role count, roles seen in more than one unit)
pub fn component_reuse(records: &[ComponentRecord]) -> (usize, usize) {
    let mut units_per_role: FxHashMap<SemanticRole, FxHashSet<&str>> = FxHashMap::default();
    for record in records.iter().filter(|r| r.role.is_classified()) {
        units_per_role
            .entry(record.role)
            .or_default()
            .insert(record.unit.as_str());
    }
    let shared = units_per_role.values().filter(|units| units.len() > 1).count();
    (units_per_role.len(), shared)
}

#[derive(Debug, Clone, Default)]
pub struct ConsistencyAnalyzer {
    limits: CountLimits,
}

impl ConsistencyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: CountLimits) -> Self {
        Self { limits }
    }

    pub fn analyze(
        &self,
        tokens: &ExtractedTokenSet,
        records: &[ComponentRecord],
        units_analyzed: usize,
    ) -> ConsistencyReport {
        let mut score: i32 = 100;
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        let off_scale = off_scale_ratios(&tokens.font_sizes);
        if tokens.font_sizes.len() > 3 && off_scale > 1 {
            score -= MODULAR_PENALTY;
            issues.push(format!(
                "Font sizes do not follow a modular scale: {off_scale} consecutive ratios fall outside {MODULAR_RATIO_MIN}-{MODULAR_RATIO_MAX}"
            ));
            recommendations.push(
                "Derive font sizes from a single ratio (for example 1.25) applied to a base size"
                    .to_string(),
            );
        }

        let counts = [
            (
                tokens.colors.len(),
                self.limits.colors,
                "colors",
                "Consolidate colors into a smaller palette of brand, neutral and accent shades",
            ),
            (
                tokens.font_sizes.len(),
                self.limits.font_sizes,
                "font sizes",
                "Reduce font sizes to a fixed type scale",
            ),
            (
                tokens.font_weights.len(),
                self.limits.font_weights,
                "font weights",
                "Limit typography to regular, medium and bold weights",
            ),
            (
                tokens.font_families.len(),
                self.limits.font_families,
                "font families",
                "Use at most one display and one body font family",
            ),
        ];
        for (count, limit, what, advice) in counts {
            if count > limit {
                score -= COUNT_PENALTY;
                issues.push(format!("{count} distinct {what} found (more than {limit})"));
                recommendations.push(advice.to_string());
            }
        }

        let (component_types, shared_component_types) = component_reuse(records);
        let reuse_ratio = if component_types == 0 {
            0.0
        } else {
            shared_component_types as f64 / component_types as f64
        };
        if units_analyzed > 1 && component_types > 0 {
            let penalty = (REUSE_WEIGHT * (1.0 - reuse_ratio)).round() as i32;
            score -= penalty;
            if reuse_ratio < 0.5 {
                issues.push(format!(
                    "Only {shared_component_types} of {component_types} component types are reused across units"
                ));
                recommendations.push(
                    "Build shared components for elements repeated across screens".to_string(),
                );
            }
        }

        let score = score.clamp(0, 100) as u8;
        debug!(
            "analyze: score {} with {} issues over {} units",
            score,
            issues.len(),
            units_analyzed
        );

        ConsistencyReport {
            score,
            issues,
            recommendations,
            metrics: ConsistencyMetrics {
                color_count: tokens.colors.len(),
                font_size_count: tokens.font_sizes.len(),
                font_weight_count: tokens.font_weights.len(),
                font_family_count: tokens.font_families.len(),
                off_scale_ratios: off_scale,
                units_analyzed,
                component_types,
                shared_component_types,
                reuse_ratio,
            },
            generated_at: Utc::now(),
        }
    }
}
