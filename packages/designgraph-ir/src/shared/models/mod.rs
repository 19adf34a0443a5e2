//! Shared data models

pub mod component;
pub mod hierarchy;
pub mod mixed;
pub mod node;
pub mod report;
pub mod scale;
pub mod tokens;

pub use component::{
    ComponentLibrary, ComponentRecord, ComponentVariant, Padding, SemanticRole, StyleSnapshot,
};
pub use hierarchy::{HierarchyNode, StyleMap};
pub use mixed::{MixedValue, MIXED_SENTINEL};
pub use node::{
    Color, DesignDocument, DesignNode, Effect, EffectKind, Geometry, LayoutMode, LayoutStyle,
    LineHeight, MalformedNode, NodeKind, Offset, Paint, PaintKind, TextAlign, TextStyle,
};
pub use report::{ConsistencyMetrics, ConsistencyReport};
pub use scale::{ScaleEntry, ScaleOrigin, ScaleSet, SemanticScale};
pub use tokens::{ExtractedTokenSet, OpacityToken, ShadowToken, TokenCategory, TokenValue};
