//! Named semantic scales

use serde::Serialize;

use super::tokens::TokenCategory;

/// Where a scale entry's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleOrigin {
    /// Bucketed from an extracted token
    Derived,
    /// Documented fallback for an empty bucket
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleEntry<V> {
    pub name: &'static str,
    pub value: V,
    pub origin: ScaleOrigin,
}

impl<V> ScaleEntry<V> {
    pub fn is_default(&self) -> bool {
        self.origin == ScaleOrigin::Default
    }
}

/// Bucket name -> value mapping, in ascending bucket order
///
/// Every canonical bucket of the category is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticScale<V> {
    pub category: TokenCategory,
    entries: Vec<ScaleEntry<V>>,
}

impl<V> SemanticScale<V> {
    pub fn new(category: TokenCategory, entries: Vec<ScaleEntry<V>>) -> Self {
        Self { category, entries }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entry(name).map(|e| &e.value)
    }

    pub fn entry(&self, name: &str) -> Option<&ScaleEntry<V>> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn entries(&self) -> &[ScaleEntry<V>] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn derived_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_default()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The five numeric/descriptor scales built from one token set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleSet {
    pub font_size: SemanticScale<u32>,
    pub spacing: SemanticScale<u32>,
    pub radius: SemanticScale<u32>,
    pub shadow: SemanticScale<String>,
    pub opacity: SemanticScale<f64>,
}
