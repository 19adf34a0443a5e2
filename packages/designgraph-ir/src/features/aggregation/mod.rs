//! Token Aggregator / Scale Builder
//!
//! Turns the deduplicated token set into canonical named scales, a
//! partitioned color palette, and per-role component variants.

pub mod domain;
pub mod infrastructure;

pub use domain::{BucketSpec, ColorPalette};
pub use infrastructure::{build_scale, build_scales, PaletteBuilder, VariantAggregator};
