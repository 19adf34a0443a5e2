//! Style extraction domain

mod rejection;

pub use rejection::{ExtractionStats, ReadResult, Rejection};

use crate::shared::models::{DesignNode, TokenCategory, TokenValue};

/// One reading of a node: every candidate value, accepted or rejected
pub type Reading = Vec<(TokenCategory, ReadResult<TokenValue>)>;

/// Pure per-node value reader for one style category
///
/// Implementations never mutate the node and never fail the caller; each
/// candidate value comes back as a value or a [`Rejection`].
pub trait StyleExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the extractor reads anything from nodes of this shape
    fn applies_to(&self, node: &DesignNode) -> bool;

    fn read(&self, node: &DesignNode) -> Reading;
}
