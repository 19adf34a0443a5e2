//! Top-level extraction configuration
//!
//! ```rust,ignore
//! use designgraph_ir::config::{ExtractionConfig, Preset};
//!
//! // Preset only
//! let config = ExtractionConfig::preset(Preset::Fast).build()?;
//!
//! // Preset plus section overrides
//! let config = ExtractionConfig::preset(Preset::Balanced)
//!     .traversal(|t| t.max_depth(30))
//!     .palette(|p| p.max_palette_size(12))
//!     .build()?;
//!
//! // YAML v1 file
//! let config = ExtractionConfig::from_yaml("tokens.yaml")?;
//! ```

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides};
use super::preset::Preset;
use super::section_configs::*;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest allowed wall-clock budget (one hour)
const MAX_TIMEOUT_MS: u64 = 3_600_000;

/// Complete configuration of one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub preset: Preset,
    pub color: ColorBounds,
    pub typography: TypographyBounds,
    pub spacing: SpacingBounds,
    pub radius: RadiusBounds,
    pub shadow: ShadowBounds,
    pub opacity: OpacityBounds,
    pub traversal: TraversalConfig,
    pub palette: PaletteConfig,
    pub classification: ClassificationConfig,
    /// Wall-clock budget for the whole run (0 = unlimited)
    pub timeout_ms: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl ExtractionConfig {
    /// Create from preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            color: ColorBounds::default(),
            typography: TypographyBounds::default(),
            spacing: SpacingBounds::default(),
            radius: RadiusBounds::default(),
            shadow: ShadowBounds::default(),
            opacity: OpacityBounds::default(),
            traversal: TraversalConfig::from_preset(preset),
            palette: PaletteConfig::default(),
            classification: ClassificationConfig::default(),
            timeout_ms: preset.timeout_ms(),
        }
    }

    pub fn color<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ColorBounds) -> ColorBounds,
    {
        self.color = f(self.color);
        self
    }

    pub fn typography<F>(mut self, f: F) -> Self
    where
        F: FnOnce(TypographyBounds) -> TypographyBounds,
    {
        self.typography = f(self.typography);
        self
    }

    pub fn spacing<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SpacingBounds) -> SpacingBounds,
    {
        self.spacing = f(self.spacing);
        self
    }

    pub fn radius<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RadiusBounds) -> RadiusBounds,
    {
        self.radius = f(self.radius);
        self
    }

    pub fn opacity<F>(mut self, f: F) -> Self
    where
        F: FnOnce(OpacityBounds) -> OpacityBounds,
    {
        self.opacity = f(self.opacity);
        self
    }

    pub fn traversal<F>(mut self, f: F) -> Self
    where
        F: FnOnce(TraversalConfig) -> TraversalConfig,
    {
        self.traversal = f(self.traversal);
        self
    }

    pub fn palette<F>(mut self, f: F) -> Self
    where
        F: FnOnce(PaletteConfig) -> PaletteConfig,
    {
        self.palette = f(self.palette);
        self
    }

    pub fn classification<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ClassificationConfig) -> ClassificationConfig,
    {
        self.classification = f(self.classification);
        self
    }

    pub fn timeout_ms(mut self, value: u64) -> Self {
        self.timeout_ms = value;
        self
    }

    /// Wall-clock budget, `None` when unlimited
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        self.color.validate()?;
        self.typography.validate()?;
        self.spacing.validate()?;
        self.radius.validate()?;
        self.shadow.validate()?;
        self.opacity.validate()?;
        self.traversal.validate()?;
        self.palette.validate()?;
        self.classification.validate()?;

        if self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::range_with_hint(
                "timeout_ms",
                self.timeout_ms,
                0,
                MAX_TIMEOUT_MS,
                "Extraction timeout should be at most 1 hour",
            ));
        }

        Ok(())
    }

    /// Build and validate
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        self.validate()?;
        Ok(ValidatedConfig(self))
    }

    /// Load from a YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if export.version != 1 {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: vec![1],
            });
        }

        let preset: Preset = export.preset.parse()?;
        let mut config = Self::preset(preset);

        if let Some(overrides) = export.overrides {
            config.apply_overrides(overrides);
        }

        config.build()
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(color) = overrides.color {
            self.color = color;
        }
        if let Some(typography) = overrides.typography {
            self.typography = typography;
        }
        if let Some(spacing) = overrides.spacing {
            self.spacing = spacing;
        }
        if let Some(radius) = overrides.radius {
            self.radius = radius;
        }
        if let Some(shadow) = overrides.shadow {
            self.shadow = shadow;
        }
        if let Some(opacity) = overrides.opacity {
            self.opacity = opacity;
        }
        if let Some(traversal) = overrides.traversal {
            self.traversal = traversal;
        }
        if let Some(palette) = overrides.palette {
            self.palette = palette;
        }
        if let Some(classification) = overrides.classification {
            self.classification = classification;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
    }

    /// Export to YAML (v1 schema, every section written out)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                color: Some(self.color.clone()),
                typography: Some(self.typography.clone()),
                spacing: Some(self.spacing.clone()),
                radius: Some(self.radius.clone()),
                shadow: Some(self.shadow.clone()),
                opacity: Some(self.opacity.clone()),
                traversal: Some(self.traversal.clone()),
                palette: Some(self.palette.clone()),
                classification: Some(self.classification.clone()),
                timeout_ms: Some(self.timeout_ms),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// One-line human readable summary
    pub fn describe(&self) -> String {
        format!(
            "preset={} max_depth={} max_nodes={} palette={} timeout_ms={}",
            self.preset,
            self.traversal.max_depth,
            self.traversal.max_nodes,
            self.palette.max_palette_size,
            self.timeout_ms
        )
    }
}

/// Configuration that passed [`ExtractionConfig::validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig(ExtractionConfig);

impl ValidatedConfig {
    pub fn into_inner(self) -> ExtractionConfig {
        self.0
    }

    pub fn as_inner(&self) -> &ExtractionConfig {
        &self.0
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        ValidatedConfig(ExtractionConfig::default())
    }
}

impl std::ops::Deref for ValidatedConfig {
    type Target = ExtractionConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
