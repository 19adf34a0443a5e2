//! Classification domain: keyword tables and signals

use crate::shared::models::SemanticRole;

/// Name fragments per role, checked as lower-case substrings
pub const ROLE_KEYWORDS: [(SemanticRole, &[&str]); 6] = [
    (SemanticRole::Button, &["button", "btn", "cta"]),
    (
        SemanticRole::Input,
        &["input", "textfield", "text field", "text-field", "textbox", "search"],
    ),
    (
        SemanticRole::Heading,
        &["heading", "headline", "title", "h1", "h2", "h3"],
    ),
    (SemanticRole::Label, &["label", "caption", "helper", "hint"]),
    (SemanticRole::Card, &["card", "tile", "panel"]),
    (
        SemanticRole::Navigation,
        &["nav", "menu", "tabbar", "tab bar", "sidebar", "breadcrumb", "header"],
    ),
];

/// Words that name a variant when no explicit property or path is present
pub const VARIANT_KEYWORDS: &[&str] = &[
    "primary",
    "secondary",
    "tertiary",
    "outline",
    "ghost",
    "danger",
    "destructive",
    "link",
    "disabled",
    "small",
    "large",
];

/// Which heuristic produced a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Keyword(&'static str),
    Structure,
    TextSize,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub role: SemanticRole,
    pub signal: Signal,
}

impl Classification {
    pub const UNCLASSIFIED: Classification = Classification {
        role: SemanticRole::Unclassified,
        signal: Signal::None,
    };

    pub fn new(role: SemanticRole, signal: Signal) -> Self {
        Self { role, signal }
    }

    pub fn is_classified(&self) -> bool {
        self.role.is_classified()
    }
}
