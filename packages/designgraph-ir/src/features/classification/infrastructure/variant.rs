//! Variant label inference from node names
//!
//! First match wins:
//! 1. `variant=<value>` or `type=<value>` property segment
//! 2. last `/`-separated path segment
//! 3. a known variant keyword as a whole word
//!
//! Labels are lower-cased. `None` means the aggregator falls back to a
//! positional label.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::classification::domain::VARIANT_KEYWORDS;

static PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:variant|type)\s*=\s*([^,/]+)").expect("valid regex"));

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({})\b", VARIANT_KEYWORDS.join("|"))).expect("valid regex")
});

pub fn infer_variant(name: &str) -> Option<String> {
    if let Some(caps) = PROPERTY.captures(name) {
        if let Some(label) = caps.get(1).and_then(|m| normalize(m.as_str())) {
            return Some(label);
        }
    }

    if name.contains('/') {
        if let Some(label) = name.rsplit('/').next().and_then(normalize) {
            return Some(label);
        }
    }

    let lower = name.to_lowercase();
    KEYWORD
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn normalize(raw: &str) -> Option<String> {
    let label = raw.trim().to_lowercase();
    (!label.is_empty()).then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_segment() {
        assert_eq!(infer_variant("Variant=Primary, Size=Large").as_deref(), Some("primary"));
        assert_eq!(infer_variant("Button, type = Ghost").as_deref(), Some("ghost"));
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(infer_variant("Button/Secondary").as_deref(), Some("secondary"));
        assert_eq!(infer_variant("Inputs/Text Field/Error").as_deref(), Some("error"));
        assert_eq!(infer_variant("Button/ ").as_deref(), None);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(infer_variant("Danger Button").as_deref(), Some("danger"));
        assert_eq!(infer_variant("Large card").as_deref(), Some("large"));
        assert_eq!(infer_variant("Hyperlinked label"), None);
        assert_eq!(infer_variant("Button"), None);
    }
}
