//! Hierarchy Builder
//!
//! Scene-graph mirror with stable identifiers and per-node style maps.

mod builder;

pub use builder::HierarchyBuilder;
