//! Color palette model and brand table

use serde::Serialize;

use crate::shared::models::SemanticScale;

/// Names of the canonical color scale, in output order
pub const NAMED_COLORS: [&str; 8] = [
    "primary",
    "secondary",
    "success",
    "warning",
    "error",
    "info",
    "background",
    "foreground",
];

/// Fallback for each named color
pub const NAMED_COLOR_DEFAULTS: [(&str, &str); 8] = [
    ("primary", "#3B82F6"),
    ("secondary", "#8B5CF6"),
    ("success", "#10B981"),
    ("warning", "#F59E0B"),
    ("error", "#EF4444"),
    ("info", "#0EA5E9"),
    ("background", "#FFFFFF"),
    ("foreground", "#111827"),
];

/// Well-known brand/system colors and the named slot they fill
pub const BRAND_COLORS: &[(&str, &str)] = &[
    ("#007AFF", "primary"),
    ("#0D99FF", "primary"),
    ("#2563EB", "primary"),
    ("#3B82F6", "primary"),
    ("#5856D6", "secondary"),
    ("#7C3AED", "secondary"),
    ("#8B5CF6", "secondary"),
    ("#10B981", "success"),
    ("#22C55E", "success"),
    ("#34C759", "success"),
    ("#EAB308", "warning"),
    ("#F59E0B", "warning"),
    ("#FF9500", "warning"),
    ("#DC2626", "error"),
    ("#EF4444", "error"),
    ("#FF3B30", "error"),
    ("#06B6D4", "info"),
    ("#0EA5E9", "info"),
    ("#5AC8FA", "info"),
];

/// Named slot of a brand color, if it is one
pub fn brand_slot(hex: &str) -> Option<&'static str> {
    BRAND_COLORS
        .iter()
        .find(|(brand, _)| brand.eq_ignore_ascii_case(hex))
        .map(|(_, slot)| *slot)
}

/// Partitioned, capped palette plus the canonical named scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorPalette {
    /// Brand-table matches, ascending
    pub semantic: Vec<String>,
    /// Near-neutral colors, darkest first
    pub grayscale: Vec<String>,
    /// Everything else, ascending
    pub accent: Vec<String>,
    /// Colors left out by the palette cap
    pub dropped: usize,
    pub named: SemanticScale<String>,
}

impl ColorPalette {
    pub fn len(&self) -> usize {
        self.semantic.len() + self.grayscale.len() + self.accent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All kept colors: semantic, then grays, then accents
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.semantic
            .iter()
            .chain(&self.grayscale)
            .chain(&self.accent)
            .map(String::as_str)
    }
}
