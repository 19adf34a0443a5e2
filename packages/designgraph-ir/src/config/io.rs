//! Configuration I/O schema (YAML v1)
//!
//! Defines the serialized shape only. Loading and export live on
//! [`ExtractionConfig`](super::ExtractionConfig).

use super::section_configs::*;
use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Section overrides; a present section replaces the preset's section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<RadiusBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<OpacityBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traversal: Option<TraversalConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}
