//! Semantic Classifier
//!
//! Infers one functional role per node (button, input, heading, label, card,
//! navigation) from name keywords, structure and text size, and turns
//! classified nodes into [`ComponentRecord`](crate::shared::models::ComponentRecord)s.

pub mod domain;
pub mod infrastructure;

pub use domain::{Classification, Signal, ROLE_KEYWORDS, VARIANT_KEYWORDS};
pub use infrastructure::{build_snapshot, infer_variant, SemanticClassifier};
