//! Raw token accumulator
//!
//! Every set is ordered, so the same document produces the same output no
//! matter in which order its nodes were visited.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Token categories, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Color,
    FontSize,
    FontFamily,
    FontStyle,
    FontWeight,
    Spacing,
    Radius,
    Shadow,
    Opacity,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Color,
        TokenCategory::FontSize,
        TokenCategory::FontFamily,
        TokenCategory::FontStyle,
        TokenCategory::FontWeight,
        TokenCategory::Spacing,
        TokenCategory::Radius,
        TokenCategory::Shadow,
        TokenCategory::Opacity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::FontSize => "font_size",
            TokenCategory::FontFamily => "font_family",
            TokenCategory::FontStyle => "font_style",
            TokenCategory::FontWeight => "font_weight",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Opacity => "opacity",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized shadow descriptor, ordered by blur radius first
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShadowToken {
    /// Blur radius in hundredths of a pixel
    radius_centi: u32,
    descriptor: String,
}

impl ShadowToken {
    pub fn new(descriptor: impl Into<String>, radius: f64) -> Self {
        Self {
            radius_centi: (radius.max(0.0) * 100.0).round() as u32,
            descriptor: descriptor.into(),
        }
    }

    pub fn radius(&self) -> f64 {
        f64::from(self.radius_centi) / 100.0
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn is_inset(&self) -> bool {
        self.descriptor.starts_with("inset ")
    }
}

impl fmt::Display for ShadowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

impl Serialize for ShadowToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.descriptor)
    }
}

/// Opacity rounded to two decimals, stored as hundredths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpacityToken(u32);

impl OpacityToken {
    pub fn from_fraction(value: f64) -> Self {
        OpacityToken((value.clamp(0.0, 1.0) * 100.0).round() as u32)
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn hundredths(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OpacityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for OpacityToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// One validated value produced by an extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Color(String),
    FontSize(u32),
    FontFamily(String),
    FontStyle(String),
    FontWeight(u16),
    Spacing(u32),
    Radius(u32),
    Shadow(ShadowToken),
    Opacity(OpacityToken),
}

impl TokenValue {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenValue::Color(_) => TokenCategory::Color,
            TokenValue::FontSize(_) => TokenCategory::FontSize,
            TokenValue::FontFamily(_) => TokenCategory::FontFamily,
            TokenValue::FontStyle(_) => TokenCategory::FontStyle,
            TokenValue::FontWeight(_) => TokenCategory::FontWeight,
            TokenValue::Spacing(_) => TokenCategory::Spacing,
            TokenValue::Radius(_) => TokenCategory::Radius,
            TokenValue::Shadow(_) => TokenCategory::Shadow,
            TokenValue::Opacity(_) => TokenCategory::Opacity,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(v) | TokenValue::FontFamily(v) | TokenValue::FontStyle(v) => {
                f.write_str(v)
            }
            TokenValue::FontSize(v) | TokenValue::Spacing(v) | TokenValue::Radius(v) => {
                write!(f, "{v}")
            }
            TokenValue::FontWeight(v) => write!(f, "{v}"),
            TokenValue::Shadow(v) => write!(f, "{v}"),
            TokenValue::Opacity(v) => write!(f, "{v}"),
        }
    }
}

/// Deduplicated, validated raw values per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedTokenSet {
    /// `#RRGGBB`, uppercase
    pub colors: BTreeSet<String>,
    pub font_sizes: BTreeSet<u32>,
    pub font_families: BTreeSet<String>,
    pub font_styles: BTreeSet<String>,
    /// 100..=900, derived from font style names
    pub font_weights: BTreeSet<u16>,
    pub spacing: BTreeSet<u32>,
    pub radii: BTreeSet<u32>,
    pub shadows: BTreeSet<ShadowToken>,
    pub opacities: BTreeSet<OpacityToken>,
}

impl ExtractedTokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value; returns false if it was already present
    pub fn insert(&mut self, value: TokenValue) -> bool {
        match value {
            TokenValue::Color(v) => self.colors.insert(v),
            TokenValue::FontSize(v) => self.font_sizes.insert(v),
            TokenValue::FontFamily(v) => self.font_families.insert(v),
            TokenValue::FontStyle(v) => self.font_styles.insert(v),
            TokenValue::FontWeight(v) => self.font_weights.insert(v),
            TokenValue::Spacing(v) => self.spacing.insert(v),
            TokenValue::Radius(v) => self.radii.insert(v),
            TokenValue::Shadow(v) => self.shadows.insert(v),
            TokenValue::Opacity(v) => self.opacities.insert(v),
        }
    }

    /// Union another set into this one
    pub fn merge(&mut self, other: ExtractedTokenSet) {
        self.colors.extend(other.colors);
        self.font_sizes.extend(other.font_sizes);
        self.font_families.extend(other.font_families);
        self.font_styles.extend(other.font_styles);
        self.font_weights.extend(other.font_weights);
        self.spacing.extend(other.spacing);
        self.radii.extend(other.radii);
        self.shadows.extend(other.shadows);
        self.opacities.extend(other.opacities);
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        match category {
            TokenCategory::Color => self.colors.len(),
            TokenCategory::FontSize => self.font_sizes.len(),
            TokenCategory::FontFamily => self.font_families.len(),
            TokenCategory::FontStyle => self.font_styles.len(),
            TokenCategory::FontWeight => self.font_weights.len(),
            TokenCategory::Spacing => self.spacing.len(),
            TokenCategory::Radius => self.radii.len(),
            TokenCategory::Shadow => self.shadows.len(),
            TokenCategory::Opacity => self.opacities.len(),
        }
    }

    /// Total number of distinct values across all categories
    pub fn len(&self) -> usize {
        TokenCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
