//! Color extractor
//!
//! Reads visible solid fills above the opacity floor and any visible solid
//! stroke. Channels must already be in `[0, 1]`; nothing is clamped.

use crate::config::ColorBounds;
use crate::features::style_extraction::domain::{ReadResult, Reading, Rejection, StyleExtractor};
use crate::shared::models::{Color, DesignNode, MixedValue, Paint, PaintKind, TokenCategory, TokenValue};
use crate::shared::utils::numeric::{is_unit, to_channel};

/// `#RRGGBB` (uppercase) from unit-range channels
pub fn to_hex(color: &Color) -> ReadResult<String> {
    for (field, value) in [("red channel", color.r), ("green channel", color.g), ("blue channel", color.b)] {
        if !is_unit(value) {
            return Err(Rejection::out_of_range(field, value, 0.0, 1.0));
        }
    }
    Ok(format!(
        "#{:02X}{:02X}{:02X}",
        to_channel(color.r),
        to_channel(color.g),
        to_channel(color.b)
    ))
}

#[derive(Debug, Clone)]
pub struct ColorExtractor {
    min_fill_opacity: f64,
}

impl ColorExtractor {
    pub fn new(bounds: &ColorBounds) -> Self {
        Self {
            min_fill_opacity: bounds.min_fill_opacity,
        }
    }

    pub fn read_fill(&self, paint: &Paint) -> ReadResult<String> {
        let color = solid_color(paint, "fill")?;
        if paint.opacity <= self.min_fill_opacity {
            return Err(Rejection::below("fill opacity", paint.opacity, self.min_fill_opacity));
        }
        to_hex(&color)
    }

    pub fn read_stroke(&self, paint: &Paint) -> ReadResult<String> {
        to_hex(&solid_color(paint, "stroke")?)
    }

    /// First accepted fill color, in paint order
    pub fn first_fill(&self, node: &DesignNode) -> Option<String> {
        node.fill_list().iter().find_map(|p| self.read_fill(p).ok())
    }

    /// First accepted stroke color, in paint order
    pub fn first_stroke(&self, node: &DesignNode) -> Option<String> {
        node.strokes.iter().find_map(|p| self.read_stroke(p).ok())
    }
}

fn solid_color(paint: &Paint, field: &'static str) -> ReadResult<Color> {
    if !paint.visible {
        return Err(Rejection::Hidden { field });
    }
    if paint.kind != PaintKind::Solid {
        return Err(Rejection::NotSolid { field });
    }
    paint.color.ok_or(Rejection::Missing { field })
}

impl StyleExtractor for ColorExtractor {
    fn name(&self) -> &'static str {
        "color"
    }

    fn applies_to(&self, node: &DesignNode) -> bool {
        !node.fills.is_absent() || !node.strokes.is_empty()
    }

    fn read(&self, node: &DesignNode) -> Reading {
        let mut reading = Reading::new();
        match &node.fills {
            MixedValue::Concrete(fills) => {
                for paint in fills {
                    reading.push((TokenCategory::Color, self.read_fill(paint).map(TokenValue::Color)));
                }
            }
            MixedValue::Mixed => {
                reading.push((TokenCategory::Color, Err(Rejection::Mixed { field: "fills" })));
            }
            MixedValue::Absent => {}
        }
        for paint in &node.strokes {
            reading.push((TokenCategory::Color, self.read_stroke(paint).map(TokenValue::Color)));
        }
        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::NodeKind;

    fn extractor() -> ColorExtractor {
        ColorExtractor::new(&ColorBounds::default())
    }

    fn accepted(reading: Reading) -> Vec<String> {
        reading
            .into_iter()
            .filter_map(|(_, r)| r.ok())
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn test_hex_normalization() {
        assert_eq!(to_hex(&Color::rgb(1.0, 1.0, 1.0)).unwrap(), "#FFFFFF");
        assert_eq!(to_hex(&Color::rgb(0.0, 0.0, 0.0)).unwrap(), "#000000");
        assert_eq!(to_hex(&Color::rgb(0.2, 0.4, 0.6)).unwrap(), "#336699");
    }

    #[test]
    fn test_out_of_range_channel_rejected() {
        let node = DesignNode::new("1", "Box", NodeKind::Rectangle)
            .with_fill(Paint::solid(Color::rgb(1.4, 0.0, 0.0)));
        let reading = extractor().read(&node);
        assert_eq!(reading.len(), 1);
        assert!(matches!(reading[0].1, Err(Rejection::OutOfRange { .. })));
    }

    #[test]
    fn test_fill_opacity_floor_and_visibility() {
        let node = DesignNode::new("1", "Box", NodeKind::Rectangle)
            .with_fill(Paint::solid(Color::rgb(1.0, 0.0, 0.0)).with_opacity(0.1))
            .with_fill(Paint::solid(Color::rgb(0.0, 1.0, 0.0)).hidden())
            .with_fill(Paint::solid(Color::rgb(0.0, 0.0, 1.0)).with_opacity(0.5));
        assert_eq!(accepted(extractor().read(&node)), vec!["#0000FF"]);
    }

    #[test]
    fn test_strokes_ignore_opacity_floor() {
        let node = DesignNode::new("1", "Field", NodeKind::Frame)
            .with_stroke(Paint::solid(Color::rgb(0.0, 0.0, 0.0)).with_opacity(0.05));
        let ex = extractor();
        assert_eq!(accepted(ex.read(&node)), vec!["#000000"]);
        assert_eq!(ex.first_stroke(&node).as_deref(), Some("#000000"));
        assert_eq!(ex.first_fill(&node), None);
    }

    #[test]
    fn test_mixed_fills_never_defaulted() {
        let mut node = DesignNode::new("1", "Text", NodeKind::Text);
        node.fills = MixedValue::Mixed;
        let reading = extractor().read(&node);
        assert!(accepted(reading.clone()).is_empty());
        assert!(matches!(reading[0].1, Err(Rejection::Mixed { .. })));
    }
}
