//! Custom assertions for extraction outputs

use designgraph_ir::pipeline::RecordingProgress;
use designgraph_ir::shared::models::{ExtractedTokenSet, HierarchyNode, SemanticScale};
use std::collections::HashSet;

/// `#RRGGBB`, upper-case
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

/// Every value satisfies its category predicate under default bounds
pub fn assert_valid_tokens(tokens: &ExtractedTokenSet) {
    for color in &tokens.colors {
        assert!(is_hex_color(color), "invalid color token {color}");
    }
    for size in &tokens.font_sizes {
        assert!((8..=72).contains(size), "font size {size} out of bounds");
    }
    for weight in &tokens.font_weights {
        assert!(
            (100..=900).contains(weight) && weight % 100 == 0,
            "font weight {weight} is not a CSS weight"
        );
    }
    for spacing in &tokens.spacing {
        assert!(*spacing <= 200, "spacing {spacing} out of bounds");
    }
    for radius in &tokens.radii {
        assert!(*radius <= 100, "radius {radius} out of bounds");
    }
    for opacity in &tokens.opacities {
        let value = opacity.value();
        assert!(value > 0.1 && value < 1.0, "opacity {value} out of bounds");
    }
}

/// Percentages never decrease and the last one is 100
pub fn assert_progress_monotonic(progress: &RecordingProgress) {
    let percents = progress.percents();
    assert!(!percents.is_empty(), "no progress reported");
    assert!(
        percents.windows(2).all(|w| w[0] <= w[1]),
        "progress went backwards: {percents:?}"
    );
    assert_eq!(percents.first(), Some(&0), "progress must start at 0");
    assert_eq!(percents.last(), Some(&100), "progress must end at 100");
}

/// Hierarchy identifiers are unique across all trees
pub fn assert_unique_identifiers(roots: &[HierarchyNode]) {
    let mut seen = HashSet::new();
    for node in roots.iter().flat_map(|root| root.iter()) {
        assert!(
            seen.insert(node.identifier.as_str()),
            "duplicate identifier {}",
            node.identifier
        );
    }
}

/// Scale lists exactly `names`, in order
pub fn assert_bucket_names<V>(scale: &SemanticScale<V>, names: &[&str]) {
    let actual: Vec<&str> = scale.names().collect();
    assert_eq!(actual, names, "bucket names of {}", scale.category);
}
