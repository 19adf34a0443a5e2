//! Style snapshot of a classified node
//!
//! Built from the same extractors as the token set, so snapshot values obey
//! the same validity bounds. Text attributes come from the node itself when
//! it is a text node, otherwise from its first direct text child.

use crate::features::style_extraction::ExtractorRegistry;
use crate::shared::models::{DesignNode, MixedValue, Padding, StyleSnapshot};

pub fn build_snapshot(node: &DesignNode, registry: &ExtractorRegistry) -> StyleSnapshot {
    let text_source = if node.kind.is_text() {
        Some(node)
    } else {
        node.children.iter().find(|c| c.kind.is_text() && c.visible)
    };
    let text_style = text_source.and_then(|n| n.text.as_ref());
    let typography = registry.typography();

    StyleSnapshot {
        background_color: if node.kind.is_text() {
            None
        } else {
            registry.color().first_fill(node)
        },
        border_color: registry.color().first_stroke(node),
        text_color: text_source.and_then(|n| registry.color().first_fill(n)),
        corner_radius: node
            .kind
            .supports_corner_radius()
            .then(|| registry.radius().read_radius(node).ok())
            .flatten(),
        width: node.geometry.width.round() as u32,
        height: node.geometry.height.round() as u32,
        padding: padding(node),
        font_size: text_style.and_then(|t| typography.read_font_size(t).ok()),
        font_family: text_style.and_then(|t| typography.read_family(t).ok()),
        font_style: text_style.and_then(|t| typography.read_style(t).ok()),
        shadow: registry.shadow().first_shadow(node),
    }
}

/// Concrete auto-layout padding; mixed or missing sides read as 0
fn padding(node: &DesignNode) -> Option<Padding> {
    if !node.layout.has_auto_layout() {
        return None;
    }
    let side = |value: &MixedValue<f64>| {
        value
            .get()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u32)
            .unwrap_or(0)
    };
    let [top, right, bottom, left] = node.layout.padding_sides();
    Some(Padding {
        top: side(top),
        right: side(right),
        bottom: side(bottom),
        left: side(left),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::shared::models::{Color, LayoutMode, LayoutStyle, NodeKind, Paint, TextStyle};

    #[test]
    fn test_button_snapshot() {
        let label = DesignNode::new("l", "Label", NodeKind::Text)
            .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
            .with_text(TextStyle::new("Go").font_size(14.0).font("Inter", "Semi Bold"));
        let button = DesignNode::new("b", "Primary Button", NodeKind::Component)
            .with_size(119.6, 44.0)
            .with_corner_radius(8.0)
            .with_fill(Paint::solid(Color::rgb(0.0, 0.4, 1.0)))
            .with_layout(LayoutStyle::auto_layout(LayoutMode::Horizontal).padding(12.0, 24.0, 12.0, 24.0))
            .with_child(label);

        let registry = ExtractorRegistry::new(&ExtractionConfig::default());
        let snapshot = build_snapshot(&button, &registry);

        assert_eq!(snapshot.background_color.as_deref(), Some("#0066FF"));
        assert_eq!(snapshot.text_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(snapshot.corner_radius, Some(8));
        assert_eq!((snapshot.width, snapshot.height), (120, 44));
        assert_eq!(
            snapshot.padding,
            Some(Padding {
                top: 12,
                right: 24,
                bottom: 12,
                left: 24
            })
        );
        assert_eq!(snapshot.font_size, Some(14));
        assert_eq!(snapshot.font_family.as_deref(), Some("Inter"));
        assert_eq!(snapshot.border_color, None);
        assert_eq!(snapshot.shadow, None);
    }
}
