//! Design document model
//!
//! A read-only snapshot of the host scene graph, reduced to the attributes the
//! engine reads. Children are owned by their parent; there is no parent
//! pointer; ancestor paths are rebuilt from the traversal stack.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mixed::MixedValue;

/// Kind of scene-graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Page,
    Section,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    BooleanOperation,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    Text,
    Slice,
}

impl NodeKind {
    /// Kinds whose children the walker descends into
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Page
                | NodeKind::Section
                | NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Component
                | NodeKind::ComponentSet
                | NodeKind::Instance
                | NodeKind::BooleanOperation
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text)
    }

    /// Kinds that can carry auto-layout
    pub fn supports_auto_layout(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet | NodeKind::Instance
        )
    }

    /// Rectangle, frame and component kinds
    pub fn supports_corner_radius(&self) -> bool {
        matches!(
            self,
            NodeKind::Rectangle
                | NodeKind::Frame
                | NodeKind::Component
                | NodeKind::ComponentSet
                | NodeKind::Instance
        )
    }

    /// Kinds eligible for structural role detection
    pub fn is_stylable_container(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame
                | NodeKind::Component
                | NodeKind::ComponentSet
                | NodeKind::Instance
                | NodeKind::Rectangle
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Page => "page",
            NodeKind::Section => "section",
            NodeKind::Frame => "frame",
            NodeKind::Group => "group",
            NodeKind::Component => "component",
            NodeKind::ComponentSet => "component_set",
            NodeKind::Instance => "instance",
            NodeKind::BooleanOperation => "boolean_operation",
            NodeKind::Rectangle => "rectangle",
            NodeKind::Ellipse => "ellipse",
            NodeKind::Polygon => "polygon",
            NodeKind::Star => "star",
            NodeKind::Vector => "vector",
            NodeKind::Line => "line",
            NodeKind::Text => "text",
            NodeKind::Slice => "slice",
        }
    }
}

/// Position and size in the parent's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Color with channels nominally in `[0, 1]`
///
/// Channels are not clamped on input; the color extractor rejects values
/// outside the unit range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "one")]
    pub a: f64,
}

impl Color {
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
}

/// One fill or stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub kind: PaintKind,
    /// Only solid paints carry a color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "one")]
    pub opacity: f64,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
            visible: true,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
}

impl EffectKind {
    pub fn is_shadow(&self) -> bool {
        matches!(self, EffectKind::DropShadow | EffectKind::InnerShadow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Shadow or blur effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub offset: Offset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Effect {
    pub fn drop_shadow(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            kind: EffectKind::DropShadow,
            visible: true,
            radius,
            offset: Offset { x, y },
            color: Some(color),
        }
    }

    pub fn inner_shadow(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            kind: EffectKind::InnerShadow,
            ..Self::drop_shadow(x, y, radius, color)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.radius.is_finite()
            && self.offset.x.is_finite()
            && self.offset.y.is_finite()
            && self.color.map_or(true, |c| c.is_finite())
    }

    pub fn layer_blur(radius: f64) -> Self {
        Self {
            kind: EffectKind::LayerBlur,
            visible: true,
            radius,
            offset: Offset::default(),
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum LineHeight {
    Auto,
    Pixels(f64),
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
}

/// Text attributes, present only on text nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub characters: String,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub font_size: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub font_family: MixedValue<String>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub font_style: MixedValue<String>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub line_height: MixedValue<LineHeight>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub letter_spacing: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub text_align: MixedValue<TextAlign>,
}

impl TextStyle {
    pub fn new(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            ..Default::default()
        }
    }

    pub fn font_size(mut self, size: impl Into<MixedValue<f64>>) -> Self {
        self.font_size = size.into();
        self
    }

    pub fn font(mut self, family: &str, style: &str) -> Self {
        self.font_family = MixedValue::Concrete(family.to_string());
        self.font_style = MixedValue::Concrete(style.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Auto-layout and shape attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub mode: LayoutMode,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub padding_top: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub padding_right: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub padding_bottom: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub padding_left: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub item_spacing: MixedValue<f64>,
    #[serde(skip_serializing_if = "MixedValue::is_absent")]
    pub corner_radius: MixedValue<f64>,
}

impl LayoutStyle {
    pub fn auto_layout(mode: LayoutMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn padding(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.padding_top = top.into();
        self.padding_right = right.into();
        self.padding_bottom = bottom.into();
        self.padding_left = left.into();
        self
    }

    pub fn item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing.into();
        self
    }

    pub fn has_auto_layout(&self) -> bool {
        self.mode != LayoutMode::None
    }

    /// Padding sides in top, right, bottom, left order
    pub fn padding_sides(&self) -> [&MixedValue<f64>; 4] {
        [
            &self.padding_top,
            &self.padding_right,
            &self.padding_bottom,
            &self.padding_left,
        ]
    }
}

/// Reasons a node cannot be read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedNode {
    #[error("node '{name}' has an empty id")]
    MissingId { name: String },

    #[error("node {id} has non-finite geometry")]
    NonFiniteGeometry { id: String },

    #[error("node {id} has negative size {width}x{height}")]
    NegativeSize { id: String, width: f64, height: f64 },

    #[error("node {id} has a paint with non-finite channels")]
    NonFinitePaint { id: String },

    #[error("node {id} has an effect with non-finite radius, offset or color")]
    NonFiniteEffect { id: String },
}

/// One node of the scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "MixedValue::is_absent")]
    pub fills: MixedValue<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
    #[serde(default)]
    pub layout: LayoutStyle,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "MixedValue::is_absent")]
    pub opacity: MixedValue<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            geometry: Geometry::default(),
            fills: MixedValue::Absent,
            strokes: Vec::new(),
            effects: Vec::new(),
            text: None,
            layout: LayoutStyle::default(),
            visible: true,
            opacity: MixedValue::Absent,
            children: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    /// Append a fill; a Mixed fill list is replaced
    pub fn with_fill(mut self, paint: Paint) -> Self {
        match &mut self.fills {
            MixedValue::Concrete(fills) => fills.push(paint),
            _ => self.fills = MixedValue::Concrete(vec![paint]),
        }
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = Some(text);
        self
    }

    /// Replace the layout, keeping a radius already set on the node when
    /// `layout` has none
    pub fn with_layout(mut self, layout: LayoutStyle) -> Self {
        let radius = std::mem::take(&mut self.layout.corner_radius);
        self.layout = layout;
        if self.layout.corner_radius.is_absent() {
            self.layout.corner_radius = radius;
        }
        self
    }

    pub fn with_corner_radius(mut self, radius: impl Into<MixedValue<f64>>) -> Self {
        self.layout.corner_radius = radius.into();
        self
    }

    pub fn with_opacity(mut self, opacity: impl Into<MixedValue<f64>>) -> Self {
        self.opacity = opacity.into();
        self
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DesignNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Concrete fills, empty when absent or mixed
    pub fn fill_list(&self) -> &[Paint] {
        self.fills.concrete().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that the node can be read at all
    pub fn check(&self) -> Result<(), MalformedNode> {
        if self.id.trim().is_empty() {
            return Err(MalformedNode::MissingId {
                name: self.name.clone(),
            });
        }
        if !self.geometry.is_finite() {
            return Err(MalformedNode::NonFiniteGeometry {
                id: self.id.clone(),
            });
        }
        if self.geometry.width < 0.0 || self.geometry.height < 0.0 {
            return Err(MalformedNode::NegativeSize {
                id: self.id.clone(),
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }
        let paint_ok = |p: &Paint| p.opacity.is_finite() && p.color.map_or(true, |c| c.is_finite());
        if !self.fill_list().iter().all(paint_ok) || !self.strokes.iter().all(paint_ok) {
            return Err(MalformedNode::NonFinitePaint {
                id: self.id.clone(),
            });
        }
        if !self.effects.iter().all(Effect::is_finite) {
            return Err(MalformedNode::NonFiniteEffect {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Top-level input: a named document with one root per extraction unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roots: Vec<DesignNode>,
}

impl DesignDocument {
    pub fn new(name: impl Into<String>, roots: Vec<DesignNode>) -> Self {
        Self {
            name: name.into(),
            roots,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn default_true() -> bool {
    true
}

fn one() -> f64 {
    1.0
}
