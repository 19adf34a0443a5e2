//! Scale Builder
//!
//! Buckets ascending raw values into canonical named scales.
//!
//! # Algorithm
//! 1. Walk values in ascending key order
//! 2. Each value lands in the first bucket with `key <= upper` (the top
//!    bucket is unbounded); a later value in the same bucket replaces the
//!    earlier one
//! 3. Every bucket left empty takes its documented default

use tracing::debug;

use crate::features::aggregation::domain::{
    BucketSpec, FONT_SIZE_BUCKETS, OPACITY_BUCKETS, RADIUS_BUCKETS, SHADOW_BUCKETS,
    SPACING_BUCKETS,
};
use crate::shared::models::{
    ExtractedTokenSet, ScaleEntry, ScaleOrigin, ScaleSet, SemanticScale, TokenCategory,
};

/// Bucket `(key, value)` pairs; input must be sorted by key ascending
pub fn build_scale<V: Clone>(
    category: TokenCategory,
    buckets: &[BucketSpec<V>],
    sorted: impl IntoIterator<Item = (f64, V)>,
) -> SemanticScale<V> {
    let mut slots: Vec<Option<V>> = vec![None; buckets.len()];

    for (key, value) in sorted {
        if let Some(i) = buckets.iter().position(|b| b.accepts(key)) {
            slots[i] = Some(value);
        }
    }

    let entries: Vec<ScaleEntry<V>> = buckets
        .iter()
        .zip(slots)
        .map(|(bucket, slot)| match slot {
            Some(value) => ScaleEntry {
                name: bucket.name,
                value,
                origin: ScaleOrigin::Derived,
            },
            None => ScaleEntry {
                name: bucket.name,
                value: bucket.default.clone(),
                origin: ScaleOrigin::Default,
            },
        })
        .collect();

    let scale = SemanticScale::new(category, entries);
    debug!(
        "build_scale: {} -> {} derived, {} defaulted",
        category,
        scale.derived_count(),
        scale.len() - scale.derived_count()
    );
    scale
}

pub fn font_size_scale(tokens: &ExtractedTokenSet) -> SemanticScale<u32> {
    build_scale(
        TokenCategory::FontSize,
        &FONT_SIZE_BUCKETS,
        tokens.font_sizes.iter().map(|v| (f64::from(*v), *v)),
    )
}

pub fn spacing_scale(tokens: &ExtractedTokenSet) -> SemanticScale<u32> {
    build_scale(
        TokenCategory::Spacing,
        &SPACING_BUCKETS,
        tokens.spacing.iter().map(|v| (f64::from(*v), *v)),
    )
}

pub fn radius_scale(tokens: &ExtractedTokenSet) -> SemanticScale<u32> {
    build_scale(
        TokenCategory::Radius,
        &RADIUS_BUCKETS,
        tokens.radii.iter().map(|v| (f64::from(*v), *v)),
    )
}

/// Shadows are keyed by blur radius; the set is already ordered by it
pub fn shadow_scale(tokens: &ExtractedTokenSet) -> SemanticScale<String> {
    build_scale(
        TokenCategory::Shadow,
        SHADOW_BUCKETS.as_slice(),
        tokens
            .shadows
            .iter()
            .map(|s| (s.radius(), s.descriptor().to_string())),
    )
}

pub fn opacity_scale(tokens: &ExtractedTokenSet) -> SemanticScale<f64> {
    build_scale(
        TokenCategory::Opacity,
        &OPACITY_BUCKETS,
        tokens.opacities.iter().map(|o| (o.value(), o.value())),
    )
}

/// Build every numeric/descriptor scale from one token set
pub fn build_scales(tokens: &ExtractedTokenSet) -> ScaleSet {
    ScaleSet {
        font_size: font_size_scale(tokens),
        spacing: spacing_scale(tokens),
        radius: radius_scale(tokens),
        shadow: shadow_scale(tokens),
        opacity: opacity_scale(tokens),
    }
}
