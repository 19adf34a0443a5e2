//! Semantic component records

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Functional role inferred for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    Button,
    Input,
    Heading,
    Label,
    Card,
    Navigation,
    #[serde(rename = "none")]
    Unclassified,
}

impl SemanticRole {
    /// Tie-break order: the first matching role wins
    pub const PRIORITY: [SemanticRole; 6] = [
        SemanticRole::Button,
        SemanticRole::Input,
        SemanticRole::Heading,
        SemanticRole::Label,
        SemanticRole::Card,
        SemanticRole::Navigation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticRole::Button => "button",
            SemanticRole::Input => "input",
            SemanticRole::Heading => "heading",
            SemanticRole::Label => "label",
            SemanticRole::Card => "card",
            SemanticRole::Navigation => "navigation",
            SemanticRole::Unclassified => "none",
        }
    }

    pub fn is_classified(&self) -> bool {
        !matches!(self, SemanticRole::Unclassified)
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Resolved style of one component node
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// First text color found among direct text children (or the node itself)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

/// One classified node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    pub role: SemanticRole,
    pub node_id: String,
    pub node_name: String,
    /// Name of the top-level unit the node was found in
    pub unit: String,
    pub snapshot: StyleSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Representative of one variant group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentVariant {
    pub label: String,
    pub snapshot: StyleSnapshot,
    /// Records folded into this variant; 0 for the synthetic default
    pub members: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_node_id: Option<String>,
}

impl ComponentVariant {
    pub fn is_synthetic(&self) -> bool {
        self.members == 0
    }
}

/// Variants per classified role; every role is present
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComponentLibrary {
    pub roles: BTreeMap<SemanticRole, Vec<ComponentVariant>>,
}

impl ComponentLibrary {
    pub fn variants(&self, role: SemanticRole) -> &[ComponentVariant] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn variant(&self, role: SemanticRole, label: &str) -> Option<&ComponentVariant> {
        self.variants(role).iter().find(|v| v.label == label)
    }
}
