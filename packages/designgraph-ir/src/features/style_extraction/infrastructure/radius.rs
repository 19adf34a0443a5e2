//! Corner radius extractor

use crate::config::RadiusBounds;
use crate::features::style_extraction::domain::{ReadResult, Reading, Rejection, StyleExtractor};
use crate::shared::models::{DesignNode, MixedValue, TokenCategory, TokenValue};

#[derive(Debug, Clone)]
pub struct RadiusExtractor {
    min_radius: f64,
    max_radius: f64,
}

impl RadiusExtractor {
    pub fn new(bounds: &RadiusBounds) -> Self {
        Self {
            min_radius: bounds.min_radius,
            max_radius: bounds.max_radius,
        }
    }

    pub fn read_radius(&self, node: &DesignNode) -> ReadResult<u32> {
        let field = "corner radius";
        let radius = match node.layout.corner_radius {
            MixedValue::Concrete(v) => v,
            MixedValue::Mixed => return Err(Rejection::Mixed { field }),
            MixedValue::Absent => return Err(Rejection::Missing { field }),
        };
        if !(self.min_radius..=self.max_radius).contains(&radius) {
            return Err(Rejection::out_of_range(field, radius, self.min_radius, self.max_radius));
        }
        Ok(radius.round() as u32)
    }
}

impl StyleExtractor for RadiusExtractor {
    fn name(&self) -> &'static str {
        "radius"
    }

    fn applies_to(&self, node: &DesignNode) -> bool {
        node.kind.supports_corner_radius() && !node.layout.corner_radius.is_absent()
    }

    fn read(&self, node: &DesignNode) -> Reading {
        if !self.applies_to(node) {
            return Reading::new();
        }
        vec![(TokenCategory::Radius, self.read_radius(node).map(TokenValue::Radius))]
    }
}
