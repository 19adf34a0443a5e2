//! Consistency Analyzer

mod analyzer;

pub use analyzer::{component_reuse, off_scale_ratios, ConsistencyAnalyzer, CountLimits};
