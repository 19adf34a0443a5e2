//! Component variant aggregation
//!
//! Groups records per role by variant label. Records without an inferable
//! label each form their own `variant-{n}` group, numbered by position. The
//! first record of a group is its representative. A role with no records
//! gets one synthetic `default` variant.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::shared::models::{
    ComponentLibrary, ComponentRecord, ComponentVariant, SemanticRole, StyleSnapshot,
};

pub const DEFAULT_VARIANT: &str = "default";

#[derive(Debug, Clone, Copy, Default)]
pub struct VariantAggregator;

impl VariantAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, records: &[ComponentRecord]) -> ComponentLibrary {
        let mut library = ComponentLibrary::default();

        for role in SemanticRole::PRIORITY {
            let variants = Self::group_role(records.iter().filter(|r| r.role == role));
            debug!("aggregate: {} -> {} variants", role, variants.len());
            library.roles.insert(role, variants);
        }

        library
    }

    fn group_role<'a>(records: impl Iterator<Item = &'a ComponentRecord>) -> Vec<ComponentVariant> {
        let mut variants: Vec<ComponentVariant> = Vec::new();
        let mut by_label: FxHashMap<String, usize> = FxHashMap::default();
        let mut unlabeled = 0usize;

        for record in records {
            let label = match &record.variant {
                Some(label) => label.clone(),
                None => {
                    unlabeled += 1;
                    format!("variant-{unlabeled}")
                }
            };

            match by_label.get(&label).copied() {
                Some(i) => variants[i].members += 1,
                None => {
                    by_label.insert(label.clone(), variants.len());
                    variants.push(ComponentVariant {
                        label,
                        snapshot: record.snapshot.clone(),
                        members: 1,
                        source_node_id: Some(record.node_id.clone()),
                    });
                }
            }
        }

        if variants.is_empty() {
            variants.push(ComponentVariant {
                label: DEFAULT_VARIANT.to_string(),
                snapshot: StyleSnapshot::default(),
                members: 0,
                source_node_id: None,
            });
        }
        variants
    }
}
