//! Style Value Extractors
//!
//! One pure reader per category (color, typography, spacing, radius, shadow,
//! opacity). Every candidate value is returned as `Result<TokenValue,
//! Rejection>`; rejections are counted by the caller and never surfaced.

pub mod domain;
pub mod infrastructure;

pub use domain::{ExtractionStats, ReadResult, Reading, Rejection, StyleExtractor};
pub use infrastructure::{
    to_hex, to_rgba, weight_from_style, ColorExtractor, ExtractorRegistry, OpacityExtractor,
    RadiusExtractor, ShadowExtractor, SpacingExtractor, TypographyExtractor,
};
