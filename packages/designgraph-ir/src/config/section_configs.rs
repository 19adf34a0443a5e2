//! Per-section configuration types
//!
//! Each extractor category, the walker, the palette builder and the classifier
//! own one configuration struct. All of them implement [`Validatable`].

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::{check_f64_range, check_ordered, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color
// ============================================================================

/// Bounds for the color extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorBounds {
    /// Fill paints at or below this opacity are ignored (0.0..=1.0, exclusive floor)
    pub min_fill_opacity: f64,
}

impl Default for ColorBounds {
    fn default() -> Self {
        Self {
            min_fill_opacity: 0.1,
        }
    }
}

impl ColorBounds {
    pub fn min_fill_opacity(mut self, value: f64) -> Self {
        self.min_fill_opacity = value;
        self
    }
}

impl Validatable for ColorBounds {
    fn validate(&self) -> ConfigResult<()> {
        check_f64_range(
            "color.min_fill_opacity",
            self.min_fill_opacity,
            0.0,
            1.0,
            "Paint opacity is a fraction",
        )
    }

    fn config_name(&self) -> &'static str {
        "ColorBounds"
    }
}

// ============================================================================
// Typography
// ============================================================================

/// Accepted font size range (inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyBounds {
    pub min_font_size: f64,
    pub max_font_size: f64,
}

impl Default for TypographyBounds {
    fn default() -> Self {
        Self {
            min_font_size: 8.0,
            max_font_size: 72.0,
        }
    }
}

impl TypographyBounds {
    pub fn font_size_range(mut self, min: f64, max: f64) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }
}

impl Validatable for TypographyBounds {
    fn validate(&self) -> ConfigResult<()> {
        check_f64_range(
            "typography.min_font_size",
            self.min_font_size,
            1.0,
            1000.0,
            "Font sizes are positive pixel values",
        )?;
        check_f64_range(
            "typography.max_font_size",
            self.max_font_size,
            1.0,
            1000.0,
            "Font sizes are positive pixel values",
        )?;
        check_ordered(
            "typography",
            "min_font_size",
            self.min_font_size,
            "max_font_size",
            self.max_font_size,
        )
    }

    fn config_name(&self) -> &'static str {
        "TypographyBounds"
    }
}

// ============================================================================
// Spacing
// ============================================================================

/// Accepted padding / item spacing range (inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingBounds {
    pub min_spacing: f64,
    pub max_spacing: f64,
}

impl Default for SpacingBounds {
    fn default() -> Self {
        Self {
            min_spacing: 0.0,
            max_spacing: 200.0,
        }
    }
}

impl SpacingBounds {
    pub fn spacing_range(mut self, min: f64, max: f64) -> Self {
        self.min_spacing = min;
        self.max_spacing = max;
        self
    }
}

impl Validatable for SpacingBounds {
    fn validate(&self) -> ConfigResult<()> {
        check_f64_range(
            "spacing.min_spacing",
            self.min_spacing,
            0.0,
            10_000.0,
            "Spacing tokens are non-negative",
        )?;
        check_f64_range(
            "spacing.max_spacing",
            self.max_spacing,
            0.0,
            10_000.0,
            "Spacing tokens are non-negative",
        )?;
        check_ordered(
            "spacing",
            "min_spacing",
            self.min_spacing,
            "max_spacing",
            self.max_spacing,
        )
    }

    fn config_name(&self) -> &'static str {
        "SpacingBounds"
    }
}

// ============================================================================
// Border radius
// ============================================================================

/// Accepted corner radius range (inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RadiusBounds {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for RadiusBounds {
    fn default() -> Self {
        Self {
            min_radius: 0.0,
            max_radius: 100.0,
        }
    }
}

impl RadiusBounds {
    pub fn radius_range(mut self, min: f64, max: f64) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }
}

impl Validatable for RadiusBounds {
    fn validate(&self) -> ConfigResult<()> {
        check_f64_range(
            "radius.min_radius",
            self.min_radius,
            0.0,
            10_000.0,
            "Radius tokens are non-negative",
        )?;
        check_f64_range(
            "radius.max_radius",
            self.max_radius,
            0.0,
            10_000.0,
            "Radius tokens are non-negative",
        )?;
        check_ordered(
            "radius",
            "min_radius",
            self.min_radius,
            "max_radius",
            self.max_radius,
        )
    }

    fn config_name(&self) -> &'static str {
        "RadiusBounds"
    }
}

// ============================================================================
// Shadow
// ============================================================================

/// Shadow effects need a blur radius strictly above this floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowBounds {
    pub min_shadow_radius: f64,
}

impl Default for ShadowBounds {
    fn default() -> Self {
        Self {
            min_shadow_radius: 0.0,
        }
    }
}

impl Validatable for ShadowBounds {
    fn validate(&self) -> ConfigResult<()> {
        check_f64_range(
            "shadow.min_shadow_radius",
            self.min_shadow_radius,
            0.0,
            1_000.0,
            "Shadow radius floor is a non-negative pixel value",
        )
    }

    fn config_name(&self) -> &'static str {
        "ShadowBounds"
    }
}

// ============================================================================
// Opacity
// ============================================================================

/// Node opacity must lie strictly between the two bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpacityBounds {
    pub min_opacity: f64,
    pub max_opacity: f64,
}

impl Default for OpacityBounds {
    fn default() -> Self {
        Self {
            min_opacity: 0.1,
            max_opacity: 1.0,
        }
    }
}

impl OpacityBounds {
    pub fn opacity_range(mut self, min: f64, max: f64) -> Self {
        self.min_opacity = min;
        self.max_opacity = max;
        self
    }
}

impl Validatable for OpacityBounds {
    fn validate(&self) -> ConfigResult<()> {
        check_f64_range(
            "opacity.min_opacity",
            self.min_opacity,
            0.0,
            1.0,
            "Opacity is a fraction",
        )?;
        check_f64_range(
            "opacity.max_opacity",
            self.max_opacity,
            0.0,
            1.0,
            "Opacity is a fraction",
        )?;
        check_ordered(
            "opacity",
            "min_opacity",
            self.min_opacity,
            "max_opacity",
            self.max_opacity,
        )
    }

    fn config_name(&self) -> &'static str {
        "OpacityBounds"
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Walker guards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalConfig {
    /// Deepest depth that is still emitted; roots are depth 0 (1..=1000)
    pub max_depth: usize,

    /// Maximum nodes emitted per walk (1..=1000000)
    pub max_nodes: usize,

    /// Visit nodes whose visibility flag is off
    pub include_hidden: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl TraversalConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            max_depth: preset.max_depth(),
            max_nodes: preset.max_nodes(),
            include_hidden: false,
        }
    }

    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    pub fn max_nodes(mut self, value: usize) -> Self {
        self.max_nodes = value;
        self
    }

    pub fn include_hidden(mut self, value: bool) -> Self {
        self.include_hidden = value;
        self
    }
}

impl Validatable for TraversalConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > 1000 {
            return Err(ConfigError::range_with_hint(
                "traversal.max_depth",
                self.max_depth,
                1,
                1000,
                "Traversal depth must be at least 1",
            ));
        }

        if self.max_nodes == 0 || self.max_nodes > 1_000_000 {
            return Err(ConfigError::range_with_hint(
                "traversal.max_nodes",
                self.max_nodes,
                1,
                1_000_000,
                "Node budget must be finite and non-zero",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "TraversalConfig"
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Palette cap applied after color partitioning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    /// Total colors kept (semantic colors are never dropped)
    pub max_palette_size: usize,

    /// Grays kept before accents fill the remainder
    pub max_gray_shades: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            max_palette_size: 24,
            max_gray_shades: 8,
        }
    }
}

impl PaletteConfig {
    pub fn max_palette_size(mut self, value: usize) -> Self {
        self.max_palette_size = value;
        self
    }

    pub fn max_gray_shades(mut self, value: usize) -> Self {
        self.max_gray_shades = value;
        self
    }
}

impl Validatable for PaletteConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_palette_size == 0 || self.max_palette_size > 1024 {
            return Err(ConfigError::range_with_hint(
                "palette.max_palette_size",
                self.max_palette_size,
                1,
                1024,
                "A palette needs at least one color",
            ));
        }
        check_ordered(
            "palette",
            "max_gray_shades",
            self.max_gray_shades,
            "max_palette_size",
            self.max_palette_size,
        )
    }

    fn config_name(&self) -> &'static str {
        "PaletteConfig"
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Structural thresholds used when a node name carries no role keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationConfig {
    pub button_min_width: f64,
    pub button_min_height: f64,
    pub button_max_height: f64,
    pub input_min_width: f64,
    pub input_min_height: f64,
    pub input_max_height: f64,
    pub card_min_width: f64,
    pub card_min_height: f64,
    /// A card needs strictly more children than this
    pub card_min_children: usize,
    /// Text at or above this size reads as a heading
    pub heading_min_font_size: f64,
    /// Text at or below this size reads as a label
    pub label_max_font_size: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            button_min_width: 60.0,
            button_min_height: 30.0,
            button_max_height: 80.0,
            input_min_width: 100.0,
            input_min_height: 30.0,
            input_max_height: 60.0,
            card_min_width: 200.0,
            card_min_height: 100.0,
            card_min_children: 1,
            heading_min_font_size: 24.0,
            label_max_font_size: 14.0,
        }
    }
}

impl Validatable for ClassificationConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_ordered(
            "classification",
            "button_min_height",
            self.button_min_height,
            "button_max_height",
            self.button_max_height,
        )?;
        check_ordered(
            "classification",
            "input_min_height",
            self.input_min_height,
            "input_max_height",
            self.input_max_height,
        )?;
        if self.label_max_font_size >= self.heading_min_font_size {
            return Err(ConfigError::Validation(format!(
                "label_max_font_size ({}) must stay below heading_min_font_size ({})",
                self.label_max_font_size, self.heading_min_font_size
            )));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ClassificationConfig"
    }
}
