//! Shadow extractor
//!
//! Serializes visible drop and inner shadows as
//! `"{x}px {y}px {radius}px rgba(r, g, b, a)"`, prefixed with `inset ` for
//! inner shadows.

use crate::config::ShadowBounds;
use crate::features::style_extraction::domain::{ReadResult, Reading, Rejection, StyleExtractor};
use crate::shared::models::{Color, DesignNode, Effect, EffectKind, ShadowToken, TokenCategory, TokenValue};
use crate::shared::utils::numeric::{format_number, is_unit, round_to, to_channel};

/// `rgba(r, g, b, a)` with 8-bit channels and alpha rounded to 2 decimals
pub fn to_rgba(color: &Color) -> ReadResult<String> {
    for (field, value) in [
        ("shadow red channel", color.r),
        ("shadow green channel", color.g),
        ("shadow blue channel", color.b),
        ("shadow alpha", color.a),
    ] {
        if !is_unit(value) {
            return Err(Rejection::out_of_range(field, value, 0.0, 1.0));
        }
    }
    Ok(format!(
        "rgba({}, {}, {}, {})",
        to_channel(color.r),
        to_channel(color.g),
        to_channel(color.b),
        format_number(round_to(color.a, 2))
    ))
}

#[derive(Debug, Clone)]
pub struct ShadowExtractor {
    min_shadow_radius: f64,
}

impl ShadowExtractor {
    pub fn new(bounds: &ShadowBounds) -> Self {
        Self {
            min_shadow_radius: bounds.min_shadow_radius,
        }
    }

    pub fn read_effect(&self, effect: &Effect) -> ReadResult<ShadowToken> {
        let field = "shadow";
        if !effect.visible {
            return Err(Rejection::Hidden { field });
        }
        if !effect.radius.is_finite() || effect.radius <= self.min_shadow_radius {
            return Err(Rejection::below("shadow radius", effect.radius, self.min_shadow_radius));
        }
        let offsets = [("shadow offset x", effect.offset.x), ("shadow offset y", effect.offset.y)];
        for (field, value) in offsets {
            if !value.is_finite() {
                return Err(Rejection::out_of_range(field, value, f64::MIN, f64::MAX));
            }
        }
        let color = effect.color.ok_or(Rejection::Missing {
            field: "shadow color",
        })?;
        let rgba = to_rgba(&color)?;

        let prefix = if effect.kind == EffectKind::InnerShadow {
            "inset "
        } else {
            ""
        };
        let descriptor = format!(
            "{prefix}{}px {}px {}px {rgba}",
            format_number(effect.offset.x),
            format_number(effect.offset.y),
            format_number(effect.radius),
        );
        Ok(ShadowToken::new(descriptor, effect.radius))
    }

    /// First accepted shadow descriptor, in effect order
    pub fn first_shadow(&self, node: &DesignNode) -> Option<String> {
        node.effects
            .iter()
            .filter(|e| e.kind.is_shadow())
            .find_map(|e| self.read_effect(e).ok())
            .map(|token| token.descriptor().to_string())
    }
}

impl StyleExtractor for ShadowExtractor {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn applies_to(&self, node: &DesignNode) -> bool {
        node.effects.iter().any(|e| e.kind.is_shadow())
    }

    fn read(&self, node: &DesignNode) -> Reading {
        node.effects
            .iter()
            .filter(|e| e.kind.is_shadow())
            .map(|e| (TokenCategory::Shadow, self.read_effect(e).map(TokenValue::Shadow)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::NodeKind;

    fn extractor() -> ShadowExtractor {
        ShadowExtractor::new(&ShadowBounds::default())
    }

    #[test]
    fn test_drop_shadow_descriptor() {
        let effect = Effect::drop_shadow(0.0, 4.0, 6.0, Color::rgba(0.0, 0.0, 0.0, 0.1));
        let token = extractor().read_effect(&effect).unwrap();
        assert_eq!(token.descriptor(), "0px 4px 6px rgba(0, 0, 0, 0.1)");
        assert_eq!(token.radius(), 6.0);
        assert!(!token.is_inset());
    }

    #[test]
    fn test_inner_shadow_fractional_numbers() {
        let effect = Effect::inner_shadow(1.5, -2.0, 3.25, Color::rgba(1.0, 0.0, 0.0, 0.256));
        let token = extractor().read_effect(&effect).unwrap();
        assert_eq!(token.descriptor(), "inset 1.5px -2px 3.25px rgba(255, 0, 0, 0.26)");
        assert!(token.is_inset());
    }

    #[test]
    fn test_non_finite_offset_rejected() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let effect = Effect::drop_shadow(f64::NAN, 4.0, 6.0, black);
        assert!(matches!(
            extractor().read_effect(&effect),
            Err(Rejection::OutOfRange { field: "shadow offset x", .. })
        ));
        let effect = Effect::inner_shadow(0.0, f64::INFINITY, 6.0, black);
        assert!(matches!(
            extractor().read_effect(&effect),
            Err(Rejection::OutOfRange { field: "shadow offset y", .. })
        ));

        let node = DesignNode::new("c", "Card", NodeKind::Frame)
            .with_effect(Effect::drop_shadow(f64::NAN, f64::INFINITY, 6.0, black));
        assert_eq!(extractor().first_shadow(&node), None);
    }

    #[test]
    fn test_zero_radius_and_blur_ignored() {
        let node = DesignNode::new("c", "Card", NodeKind::Frame)
            .with_effect(Effect::drop_shadow(0.0, 1.0, 0.0, Color::rgb(0.0, 0.0, 0.0)))
            .with_effect(Effect::layer_blur(8.0));
        let reading = extractor().read(&node);
        assert_eq!(reading.len(), 1);
        assert!(reading[0].1.is_err());
        assert_eq!(extractor().first_shadow(&node), None);
    }
}
