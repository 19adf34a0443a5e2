//! Semantic Classifier
//!
//! Assigns at most one role per node.
//!
//! # Algorithm
//! 1. Keyword pass over the lower-cased name, roles in priority order
//!    (button > input > heading > label > card > navigation)
//! 2. Structural pass for stylable containers (button > input > card)
//! 3. Text nodes: concrete font size >= 24 is a heading, <= 14 a label
//!
//! The first match wins. Classification never affects token extraction.

use tracing::trace;

use crate::config::ClassificationConfig;
use crate::features::classification::domain::{Classification, Signal, ROLE_KEYWORDS};
use crate::shared::models::{DesignNode, MixedValue, SemanticRole};

#[derive(Debug, Clone, Default)]
pub struct SemanticClassifier {
    config: ClassificationConfig,
}

impl SemanticClassifier {
    pub fn new(config: &ClassificationConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn classify(&self, node: &DesignNode) -> Classification {
        self.classify_named(node, &node.name.to_lowercase())
    }

    /// Classify with a caller-supplied lower-cased name
    pub fn classify_named(&self, node: &DesignNode, lower_name: &str) -> Classification {
        if let Some(hit) = Self::keyword_match(lower_name) {
            trace!("classify: {} -> {} (keyword)", node.id, hit.role);
            return hit;
        }

        if node.kind.is_stylable_container() {
            if let Some(role) = self.structural_match(node) {
                trace!("classify: {} -> {} (structure)", node.id, role);
                return Classification::new(role, Signal::Structure);
            }
        }

        if node.kind.is_text() {
            if let Some(role) = self.text_size_match(node) {
                return Classification::new(role, Signal::TextSize);
            }
        }

        Classification::UNCLASSIFIED
    }

    fn keyword_match(lower_name: &str) -> Option<Classification> {
        ROLE_KEYWORDS.iter().find_map(|(role, keywords)| {
            keywords
                .iter()
                .find(|k| lower_name.contains(*k))
                .map(|k| Classification::new(*role, Signal::Keyword(*k)))
        })
    }

    fn structural_match(&self, node: &DesignNode) -> Option<SemanticRole> {
        let c = &self.config;
        let width = node.geometry.width;
        let height = node.geometry.height;
        let has_radius = matches!(node.layout.corner_radius, MixedValue::Concrete(r) if r > 0.0);

        let is_button = has_radius
            && !node.fill_list().is_empty()
            && width > c.button_min_width
            && height > c.button_min_height
            && height < c.button_max_height;
        if is_button {
            return Some(SemanticRole::Button);
        }

        let is_input = width > c.input_min_width
            && height > c.input_min_height
            && height < c.input_max_height
            && !node.strokes.is_empty();
        if is_input {
            return Some(SemanticRole::Input);
        }

        let is_card = width > c.card_min_width
            && height > c.card_min_height
            && node.children.len() > c.card_min_children
            && (has_radius || !node.effects.is_empty());
        if is_card {
            return Some(SemanticRole::Card);
        }

        None
    }

    fn text_size_match(&self, node: &DesignNode) -> Option<SemanticRole> {
        let size = node.text.as_ref()?.font_size.get()?;
        if size >= self.config.heading_min_font_size {
            Some(SemanticRole::Heading)
        } else if size <= self.config.label_max_font_size {
            Some(SemanticRole::Label)
        } else {
            None
        }
    }
}
