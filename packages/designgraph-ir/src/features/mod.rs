//! Feature modules, leaves first

pub mod traversal;
pub mod style_extraction;
pub mod classification;
pub mod aggregation;
pub mod hierarchy;
pub mod consistency;
