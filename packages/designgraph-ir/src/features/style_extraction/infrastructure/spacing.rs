//! Spacing extractor: auto-layout padding and item spacing

use crate::config::SpacingBounds;
use crate::features::style_extraction::domain::{ReadResult, Reading, Rejection, StyleExtractor};
use crate::shared::models::{DesignNode, MixedValue, TokenCategory, TokenValue};

const PADDING_FIELDS: [&str; 4] = ["padding top", "padding right", "padding bottom", "padding left"];

#[derive(Debug, Clone)]
pub struct SpacingExtractor {
    min_spacing: f64,
    max_spacing: f64,
}

impl SpacingExtractor {
    pub fn new(bounds: &SpacingBounds) -> Self {
        Self {
            min_spacing: bounds.min_spacing,
            max_spacing: bounds.max_spacing,
        }
    }

    pub fn read_value(&self, value: &MixedValue<f64>, field: &'static str) -> ReadResult<u32> {
        let v = match value {
            MixedValue::Concrete(v) => *v,
            MixedValue::Mixed => return Err(Rejection::Mixed { field }),
            MixedValue::Absent => return Err(Rejection::Missing { field }),
        };
        if !(self.min_spacing..=self.max_spacing).contains(&v) {
            return Err(Rejection::out_of_range(field, v, self.min_spacing, self.max_spacing));
        }
        Ok(v.round() as u32)
    }
}

impl StyleExtractor for SpacingExtractor {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn applies_to(&self, node: &DesignNode) -> bool {
        node.kind.supports_auto_layout() && node.layout.has_auto_layout()
    }

    fn read(&self, node: &DesignNode) -> Reading {
        if !self.applies_to(node) {
            return Reading::new();
        }

        let layout = &node.layout;
        layout
            .padding_sides()
            .into_iter()
            .zip(PADDING_FIELDS)
            .chain(std::iter::once((&layout.item_spacing, "item spacing")))
            .filter(|(value, _)| !value.is_absent())
            .map(|(value, field)| {
                (
                    TokenCategory::Spacing,
                    self.read_value(value, field).map(TokenValue::Spacing),
                )
            })
            .collect()
    }
}
