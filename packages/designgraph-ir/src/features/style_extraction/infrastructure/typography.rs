//! Typography extractor
//!
//! Text nodes only. Font size must be concrete and inside the configured
//! bounds; family and style are taken only when concrete. A style name also
//! yields a numeric weight.

use crate::config::TypographyBounds;
use crate::features::style_extraction::domain::{ReadResult, Reading, Rejection, StyleExtractor};
use crate::shared::models::{DesignNode, MixedValue, TextStyle, TokenCategory, TokenValue};

/// Style-name fragments and their weights, longest fragments first
const WEIGHT_NAMES: &[(&str, u16)] = &[
    ("extralight", 200),
    ("ultralight", 200),
    ("semibold", 600),
    ("demibold", 600),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("hairline", 100),
    ("thin", 100),
    ("light", 300),
    ("regular", 400),
    ("normal", 400),
    ("book", 400),
    ("medium", 500),
    ("bold", 700),
    ("heavy", 800),
    ("black", 900),
];

const DEFAULT_WEIGHT: u16 = 400;

/// Numeric weight for a font style name (`"Semi Bold Italic"` -> 600)
pub fn weight_from_style(style: &str) -> u16 {
    let compact: String = style
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if let Ok(numeric) = compact.parse::<u16>() {
        if (100..=900).contains(&numeric) && numeric % 100 == 0 {
            return numeric;
        }
    }

    WEIGHT_NAMES
        .iter()
        .find(|(fragment, _)| compact.contains(fragment))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

#[derive(Debug, Clone)]
pub struct TypographyExtractor {
    min_font_size: f64,
    max_font_size: f64,
}

impl TypographyExtractor {
    pub fn new(bounds: &TypographyBounds) -> Self {
        Self {
            min_font_size: bounds.min_font_size,
            max_font_size: bounds.max_font_size,
        }
    }

    pub fn read_font_size(&self, text: &TextStyle) -> ReadResult<u32> {
        let size = concrete(&text.font_size, "font size")?;
        if !(self.min_font_size..=self.max_font_size).contains(&size) {
            return Err(Rejection::out_of_range(
                "font size",
                size,
                self.min_font_size,
                self.max_font_size,
            ));
        }
        Ok(size.round() as u32)
    }

    pub fn read_family(&self, text: &TextStyle) -> ReadResult<String> {
        non_empty(&text.font_family, "font family")
    }

    pub fn read_style(&self, text: &TextStyle) -> ReadResult<String> {
        non_empty(&text.font_style, "font style")
    }
}

fn concrete<T: Copy>(value: &MixedValue<T>, field: &'static str) -> ReadResult<T> {
    match value {
        MixedValue::Concrete(v) => Ok(*v),
        MixedValue::Mixed => Err(Rejection::Mixed { field }),
        MixedValue::Absent => Err(Rejection::Missing { field }),
    }
}

fn non_empty(value: &MixedValue<String>, field: &'static str) -> ReadResult<String> {
    match value {
        MixedValue::Concrete(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        MixedValue::Concrete(_) | MixedValue::Absent => Err(Rejection::Missing { field }),
        MixedValue::Mixed => Err(Rejection::Mixed { field }),
    }
}

impl StyleExtractor for TypographyExtractor {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn applies_to(&self, node: &DesignNode) -> bool {
        node.kind.is_text() && node.text.is_some()
    }

    fn read(&self, node: &DesignNode) -> Reading {
        let mut reading = Reading::new();
        let Some(text) = node.text.as_ref().filter(|_| node.kind.is_text()) else {
            return reading;
        };

        if !text.font_size.is_absent() {
            reading.push((
                TokenCategory::FontSize,
                self.read_font_size(text).map(TokenValue::FontSize),
            ));
        }
        if !text.font_family.is_absent() {
            reading.push((
                TokenCategory::FontFamily,
                self.read_family(text).map(TokenValue::FontFamily),
            ));
        }
        if !text.font_style.is_absent() {
            let style = self.read_style(text);
            reading.push((
                TokenCategory::FontWeight,
                style
                    .as_ref()
                    .map(|s| TokenValue::FontWeight(weight_from_style(s)))
                    .map_err(Clone::clone),
            ));
            reading.push((TokenCategory::FontStyle, style.map(TokenValue::FontStyle)));
        }
        reading
    }
}
