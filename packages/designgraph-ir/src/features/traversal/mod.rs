//! Scene Graph Walker
//!
//! Bounded, order-preserving traversal over the design document. Feeds the
//! extractors, the classifier and the hierarchy builder.

pub mod domain;
pub mod infrastructure;

pub use domain::{SkippedNode, Truncation, Visit, WalkOutcome};
pub use infrastructure::SceneWalker;
