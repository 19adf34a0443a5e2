//! Test data builders

use designgraph_ir::shared::models::{
    Color, DesignDocument, DesignNode, Effect, LayoutMode, LayoutStyle, NodeKind, Paint,
    TextStyle,
};

/// Builder for one top-level screen
#[derive(Debug)]
pub struct ScreenBuilder {
    name: String,
    children: Vec<DesignNode>,
    background: Option<Color>,
    next_id: usize,
}

impl ScreenBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            background: None,
            next_id: 0,
        }
    }

    fn id(&mut self) -> String {
        self.next_id += 1;
        format!("{}:{}", self.name.to_lowercase(), self.next_id)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Text node with a concrete size and font
    pub fn text(mut self, name: &str, size: f64, family: &str, style: &str) -> Self {
        let id = self.id();
        self.children.push(
            DesignNode::new(id, name, NodeKind::Text)
                .with_text(TextStyle::new(name).font_size(size).font(family, style))
                .with_fill(Paint::solid(Color::rgb(0.1, 0.1, 0.1))),
        );
        self
    }

    /// Rounded, filled, auto-layout frame named `name`
    pub fn button(mut self, name: &str, fill: Color, radius: f64) -> Self {
        let id = self.id();
        let label_id = self.id();
        self.children.push(
            DesignNode::new(id, name, NodeKind::Frame)
                .with_size(120.0, 44.0)
                .with_fill(Paint::solid(fill))
                .with_layout(
                    LayoutStyle::auto_layout(LayoutMode::Horizontal)
                        .padding(12.0, 24.0, 12.0, 24.0)
                        .item_spacing(8.0),
                )
                .with_corner_radius(radius)
                .with_child(
                    DesignNode::new(label_id, "Label", NodeKind::Text)
                        .with_text(
                            TextStyle::new("Continue")
                                .font_size(16.0)
                                .font("Inter", "Semi Bold"),
                        )
                        .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0))),
                ),
        );
        self
    }

    /// Stroked rectangle-like frame
    pub fn input(mut self, name: &str) -> Self {
        let id = self.id();
        self.children.push(
            DesignNode::new(id, name, NodeKind::Frame)
                .with_size(300.0, 48.0)
                .with_stroke(Paint::solid(Color::rgb(0.8, 0.8, 0.8)))
                .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0))),
        );
        self
    }

    /// Shadowed container holding `items` text rows
    pub fn card(mut self, name: &str, items: usize) -> Self {
        let id = self.id();
        let mut card = DesignNode::new(id, name, NodeKind::Frame)
            .with_size(320.0, 200.0)
            .with_corner_radius(12.0)
            .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
            .with_effect(Effect::drop_shadow(
                0.0,
                4.0,
                12.0,
                Color::rgba(0.0, 0.0, 0.0, 0.25),
            ));
        for _ in 0..items {
            let row_id = self.id();
            card = card.with_child(
                DesignNode::new(row_id, "Row", NodeKind::Text)
                    .with_text(TextStyle::new("Row").font_size(14.0).font("Inter", "Regular")),
            );
        }
        self.children.push(card);
        self
    }

    pub fn child(mut self, node: DesignNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn build(mut self) -> DesignNode {
        let id = self.id();
        let mut screen = DesignNode::new(id, self.name.as_str(), NodeKind::Frame)
            .with_size(375.0, 812.0)
            .with_children(self.children);
        if let Some(color) = self.background {
            screen = screen.with_fill(Paint::solid(color));
        }
        screen
    }
}

/// Builder for a whole document
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    name: String,
    roots: Vec<DesignNode>,
}

impl DocumentBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            roots: Vec::new(),
        }
    }

    pub fn with_screen(mut self, screen: DesignNode) -> Self {
        self.roots.push(screen);
        self
    }

    pub fn with_screens(mut self, screens: impl IntoIterator<Item = DesignNode>) -> Self {
        self.roots.extend(screens);
        self
    }

    pub fn build(self) -> DesignDocument {
        DesignDocument::new(self.name, self.roots)
    }
}
