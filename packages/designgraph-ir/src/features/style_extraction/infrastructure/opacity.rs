//! Layer opacity extractor

use crate::config::OpacityBounds;
use crate::features::style_extraction::domain::{ReadResult, Reading, Rejection, StyleExtractor};
use crate::shared::models::{DesignNode, MixedValue, OpacityToken, TokenCategory, TokenValue};

#[derive(Debug, Clone)]
pub struct OpacityExtractor {
    min_opacity: f64,
    max_opacity: f64,
}

impl OpacityExtractor {
    pub fn new(bounds: &OpacityBounds) -> Self {
        Self {
            min_opacity: bounds.min_opacity,
            max_opacity: bounds.max_opacity,
        }
    }

    /// Accepts values strictly between the bounds, before and after rounding
    pub fn read_opacity(&self, value: f64) -> ReadResult<OpacityToken> {
        let reject = || Rejection::out_of_range("opacity", value, self.min_opacity, self.max_opacity);
        if !(value > self.min_opacity && value < self.max_opacity) {
            return Err(reject());
        }
        let token = OpacityToken::from_fraction(value);
        if token.value() <= self.min_opacity || token.value() >= self.max_opacity {
            return Err(reject());
        }
        Ok(token)
    }
}

impl StyleExtractor for OpacityExtractor {
    fn name(&self) -> &'static str {
        "opacity"
    }

    /// Fully opaque layers carry no opacity token
    fn applies_to(&self, node: &DesignNode) -> bool {
        match node.opacity {
            MixedValue::Concrete(v) => v != 1.0,
            MixedValue::Mixed => true,
            MixedValue::Absent => false,
        }
    }

    fn read(&self, node: &DesignNode) -> Reading {
        if !self.applies_to(node) {
            return Reading::new();
        }
        let result = match node.opacity {
            MixedValue::Concrete(v) => self.read_opacity(v).map(TokenValue::Opacity),
            _ => Err(Rejection::Mixed { field: "opacity" }),
        };
        vec![(TokenCategory::Opacity, result)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::NodeKind;

    fn extractor() -> OpacityExtractor {
        OpacityExtractor::new(&OpacityBounds::default())
    }

    #[test]
    fn test_exclusive_bounds() {
        let ex = extractor();
        assert!(ex.read_opacity(0.1).is_err());
        assert!(ex.read_opacity(1.0).is_err());
        assert_eq!(ex.read_opacity(0.456).unwrap().value(), 0.46);
        assert_eq!(ex.read_opacity(0.11).unwrap().value(), 0.11);
    }

    #[test]
    fn test_values_rounding_onto_a_bound_rejected() {
        let ex = extractor();
        assert!(ex.read_opacity(0.999).is_err());
        assert!(ex.read_opacity(0.104).is_err());
        assert_eq!(ex.read_opacity(0.994).unwrap().value(), 0.99);
        assert_eq!(ex.read_opacity(0.106).unwrap().value(), 0.11);

        let node = DesignNode::new("n", "Almost", NodeKind::Frame).with_opacity(0.999);
        let reading = ex.read(&node);
        assert_eq!(reading.len(), 1);
        assert!(reading[0].1.is_err());
    }

    #[test]
    fn test_mixed_opacity_yields_no_token() {
        let node =
            DesignNode::new("n", "Group", NodeKind::Frame).with_opacity(MixedValue::<f64>::Mixed);
        let reading = extractor().read(&node);
        assert_eq!(reading.len(), 1);
        assert_eq!(reading[0].1, Err(Rejection::Mixed { field: "opacity" }));
    }

    #[test]
    fn test_opaque_and_absent_nodes_skipped() {
        let ex = extractor();
        let opaque = DesignNode::new("n", "Solid", NodeKind::Frame).with_opacity(1.0);
        assert!(ex.read(&opaque).is_empty());
        let plain = DesignNode::new("n", "Plain", NodeKind::Frame);
        assert!(ex.read(&plain).is_empty());

        let faded = DesignNode::new("n", "Faded", NodeKind::Frame).with_opacity(0.5);
        let reading = ex.read(&faded);
        assert_eq!(reading.len(), 1);
        assert!(reading[0].1.is_ok());
    }
}
