//! Extraction configuration
//!
//! Two levels:
//! - Preset: traversal limits and timeout in one word (`fast`, `balanced`, `thorough`)
//! - Section overrides: per-category numeric bounds, walker guards, palette cap,
//!   classifier thresholds, through closures or a YAML v1 file
//!
//! Every section validates its own ranges; [`ExtractionConfig::build`] returns a
//! [`ValidatedConfig`], which is what the pipeline accepts.

pub mod error;
pub mod extraction_config;
pub mod io;
pub mod preset;
pub mod section_configs;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use extraction_config::{ExtractionConfig, ValidatedConfig};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use section_configs::{
    ClassificationConfig, ColorBounds, OpacityBounds, PaletteConfig, RadiusBounds, ShadowBounds,
    SpacingBounds, TraversalConfig, TypographyBounds,
};
pub use validation::Validatable;
