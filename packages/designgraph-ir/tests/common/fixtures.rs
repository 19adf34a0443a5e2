//! Test fixture generators

use designgraph_ir::shared::models::{
    Color, DesignDocument, DesignNode, NodeKind, Paint, TextStyle,
};

use super::builders::{DocumentBuilder, ScreenBuilder};

/// Login screen: heading, two inputs, primary button, white background
pub fn fixture_login_screen(name: &str) -> DesignNode {
    ScreenBuilder::new(name)
        .background(Color::rgb(1.0, 1.0, 1.0))
        .text("Welcome back", 32.0, "Inter", "Bold")
        .input("Email Input")
        .input("Password Input")
        .button("Button/Primary", Color::rgb(0.231, 0.51, 0.965), 8.0)
        .text("Forgot password?", 12.0, "Inter", "Regular")
        .build()
}

/// Dashboard screen: heading, two cards, secondary button
pub fn fixture_dashboard_screen(name: &str) -> DesignNode {
    ScreenBuilder::new(name)
        .background(Color::rgb(0.976, 0.98, 0.984))
        .text("Dashboard", 24.0, "Inter", "Semi Bold")
        .card("Stats Card", 3)
        .card("Activity Card", 2)
        .button("Button/Secondary", Color::rgb(0.9, 0.9, 0.9), 8.0)
        .build()
}

/// Two-screen app sharing the button role
pub fn fixture_app() -> DesignDocument {
    DocumentBuilder::new("App")
        .with_screen(fixture_login_screen("Login"))
        .with_screen(fixture_dashboard_screen("Dashboard"))
        .build()
}

/// Chain of `depth` nested frames below the root (root at depth 0)
pub fn fixture_nested(depth: usize) -> DesignNode {
    let mut node = DesignNode::new(format!("n{depth}"), format!("Level {depth}"), NodeKind::Frame);
    for level in (0..depth).rev() {
        node = DesignNode::new(format!("n{level}"), format!("Level {level}"), NodeKind::Frame)
            .with_child(node);
    }
    node
}

/// Rectangle with one solid fill
pub fn fixture_filled(id: &str, color: Color) -> DesignNode {
    DesignNode::new(id, format!("Fill {id}"), NodeKind::Rectangle)
        .with_size(10.0, 10.0)
        .with_fill(Paint::solid(color))
}

/// Text node with one concrete font size
pub fn fixture_text(id: &str, size: f64) -> DesignNode {
    DesignNode::new(id, format!("Copy {id}"), NodeKind::Text)
        .with_text(TextStyle::new("copy").font_size(size).font("Inter", "Regular"))
}

/// Screen whose children all share one name
pub fn fixture_repeated_names(name: &str, count: usize) -> DesignNode {
    ScreenBuilder::new(name)
        .child(DesignNode::new("list", "List", NodeKind::Frame).with_children(
            (0..count).map(|i| DesignNode::new(format!("item-{i}"), "Item", NodeKind::Frame)),
        ))
        .build()
}

/// Host document as JSON, with Mixed sentinels
pub const FIXTURE_DOCUMENT_JSON: &str = r##"{
  "name": "Marketing",
  "roots": [
    {
      "id": "1:1",
      "name": "Landing",
      "kind": "frame",
      "geometry": { "x": 0, "y": 0, "width": 1440, "height": 900 },
      "fills": [ { "kind": "solid", "color": { "r": 1, "g": 1, "b": 1 } } ],
      "children": [
        {
          "id": "1:2",
          "name": "Hero Title",
          "kind": "text",
          "text": { "characters": "Ship faster", "font_size": 48, "font_family": "Inter", "font_style": "Bold" },
          "fills": [ { "kind": "solid", "color": { "r": 0, "g": 0, "b": 0 } } ]
        },
        {
          "id": "1:3",
          "name": "Rich paragraph",
          "kind": "text",
          "text": { "characters": "Mixed styles", "font_size": "__mixed__", "font_family": "Inter" },
          "fills": "__mixed__"
        }
      ]
    }
  ]
}"##;
