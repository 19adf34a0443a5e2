mod classifier;
mod records;
mod snapshot;
mod variant;

pub use classifier::SemanticClassifier;
pub use snapshot::build_snapshot;
pub use variant::infer_variant;
