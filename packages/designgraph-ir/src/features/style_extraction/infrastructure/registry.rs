//! Extractor registry
//!
//! Runs the six category extractors over one node. Used in two ways:
//! - [`ExtractorRegistry::extract_into`] feeds the session token set
//! - [`ExtractorRegistry::resolve_style_map`] resolves a single node's styles
//!   for the hierarchy, never merged with siblings

use tracing::trace;

use super::{
    ColorExtractor, OpacityExtractor, RadiusExtractor, ShadowExtractor, SpacingExtractor,
    TypographyExtractor,
};
use crate::config::ExtractionConfig;
use crate::features::style_extraction::domain::{ExtractionStats, StyleExtractor};
use crate::shared::models::{DesignNode, ExtractedTokenSet, StyleMap};

#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    color: ColorExtractor,
    typography: TypographyExtractor,
    spacing: SpacingExtractor,
    radius: RadiusExtractor,
    shadow: ShadowExtractor,
    opacity: OpacityExtractor,
}

impl ExtractorRegistry {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            color: ColorExtractor::new(&config.color),
            typography: TypographyExtractor::new(&config.typography),
            spacing: SpacingExtractor::new(&config.spacing),
            radius: RadiusExtractor::new(&config.radius),
            shadow: ShadowExtractor::new(&config.shadow),
            opacity: OpacityExtractor::new(&config.opacity),
        }
    }

    /// All extractors in category order
    pub fn extractors(&self) -> [&dyn StyleExtractor; 6] {
        [
            &self.color,
            &self.typography,
            &self.spacing,
            &self.radius,
            &self.shadow,
            &self.opacity,
        ]
    }

    pub fn color(&self) -> &ColorExtractor {
        &self.color
    }

    pub fn typography(&self) -> &TypographyExtractor {
        &self.typography
    }

    pub fn spacing(&self) -> &SpacingExtractor {
        &self.spacing
    }

    pub fn radius(&self) -> &RadiusExtractor {
        &self.radius
    }

    pub fn shadow(&self) -> &ShadowExtractor {
        &self.shadow
    }

    /// Add every accepted value of `node` to `tokens`, counting rejections
    pub fn extract_into(
        &self,
        node: &DesignNode,
        tokens: &mut ExtractedTokenSet,
        stats: &mut ExtractionStats,
    ) {
        for extractor in self.extractors() {
            for (category, result) in extractor.read(node) {
                match result {
                    Ok(value) => {
                        stats.accept(category);
                        tokens.insert(value);
                    }
                    Err(rejection) => {
                        trace!(
                            "{}: rejected value on node {}: {}",
                            extractor.name(),
                            node.id,
                            rejection
                        );
                        stats.reject(category);
                    }
                }
            }
        }
    }

    /// Category -> display values for this node alone, in read order
    pub fn resolve_style_map(&self, node: &DesignNode) -> StyleMap {
        let mut styles = StyleMap::new();
        for extractor in self.extractors() {
            for (category, result) in extractor.read(node) {
                if let Ok(value) = result {
                    let values = styles.entry(category).or_default();
                    let display = value.to_string();
                    if !values.contains(&display) {
                        values.push(display);
                    }
                }
            }
        }
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{
        Color, Effect, LayoutMode, LayoutStyle, NodeKind, Paint, TextStyle, TokenCategory,
    };

    fn registry() -> ExtractorRegistry {
        ExtractorRegistry::new(&ExtractionConfig::default())
    }

    #[test]
    fn test_extract_into_collects_all_categories() {
        let card = DesignNode::new("c", "Card", NodeKind::Frame)
            .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
            .with_fill(Paint::solid(Color::rgb(1.4, 0.0, 0.0)))
            .with_effect(Effect::drop_shadow(0.0, 2.0, 4.0, Color::rgba(0.0, 0.0, 0.0, 0.2)))
            .with_layout(LayoutStyle::auto_layout(LayoutMode::Vertical).item_spacing(12.0))
            .with_corner_radius(12.0)
            .with_opacity(0.8);
        let mut tokens = ExtractedTokenSet::new();
        let mut stats = ExtractionStats::default();
        registry().extract_into(&card, &mut tokens, &mut stats);

        assert_eq!(tokens.colors.iter().collect::<Vec<_>>(), vec!["#FFFFFF"]);
        assert!(tokens.radii.contains(&12));
        assert!(tokens.spacing.contains(&12));
        assert_eq!(tokens.shadows.len(), 1);
        assert_eq!(tokens.opacities.len(), 1);
        assert_eq!(stats.rejected_in(TokenCategory::Color), 1);
    }

    #[test]
    fn test_style_map_is_per_node() {
        let title = DesignNode::new("t", "Title", NodeKind::Text)
            .with_fill(Paint::solid(Color::rgb(0.0, 0.0, 0.0)))
            .with_text(TextStyle::new("Hi").font_size(24.0).font("Inter", "Bold"));
        let styles = registry().resolve_style_map(&title);

        assert_eq!(styles[&TokenCategory::Color], vec!["#000000".to_string()]);
        assert_eq!(styles[&TokenCategory::FontSize], vec!["24".to_string()]);
        assert_eq!(styles[&TokenCategory::FontWeight], vec!["700".to_string()]);
        assert!(!styles.contains_key(&TokenCategory::Radius));
    }
}
