//! Shared utilities

pub mod id_generator;
pub mod numeric;

pub use id_generator::{IdentifierContext, IdentifierGenerator};
pub use numeric::{format_number, round_to};
