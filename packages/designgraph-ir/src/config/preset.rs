//! Preset configurations
//!
//! Presets only differ in how far the walker is allowed to go and how long a
//! run may take. Style bounds are the same for every preset.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Quick scan of the visible top levels
    ///
    /// - Traversal: max_depth=10, max_nodes=2000
    /// - Timeout: 5s
    Fast,

    /// Default extraction
    ///
    /// - Traversal: max_depth=20, max_nodes=10000
    /// - Timeout: 30s
    #[default]
    Balanced,

    /// Large design systems with deep component nesting
    ///
    /// - Traversal: max_depth=50, max_nodes=100000
    /// - Timeout: 120s
    Thorough,
}

impl Preset {
    /// Maximum traversal depth for this preset
    pub fn max_depth(&self) -> usize {
        match self {
            Self::Fast => 10,
            Self::Balanced => 20,
            Self::Thorough => 50,
        }
    }

    /// Maximum number of visited nodes for this preset
    pub fn max_nodes(&self) -> usize {
        match self {
            Self::Fast => 2_000,
            Self::Balanced => 10_000,
            Self::Thorough => 100_000,
        }
    }

    /// Wall-clock budget in milliseconds
    pub fn timeout_ms(&self) -> u64 {
        match self {
            Self::Fast => 5_000,
            Self::Balanced => 30_000,
            Self::Thorough => 120_000,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Thorough => "thorough",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "thorough" => Ok(Self::Thorough),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!("fast".parse::<Preset>().unwrap(), Preset::Fast);
        assert_eq!("FAST".parse::<Preset>().unwrap(), Preset::Fast);
        assert_eq!("balanced".parse::<Preset>().unwrap(), Preset::Balanced);
        assert_eq!("thorough".parse::<Preset>().unwrap(), Preset::Thorough);
        assert!("custom".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Fast.to_string(), "fast");
        assert_eq!(Preset::Balanced.to_string(), "balanced");
        assert_eq!(Preset::Thorough.to_string(), "thorough");
    }

    #[test]
    fn test_presets_are_monotonic() {
        assert!(Preset::Fast.max_depth() < Preset::Balanced.max_depth());
        assert!(Preset::Balanced.max_depth() < Preset::Thorough.max_depth());
        assert!(Preset::Fast.max_nodes() < Preset::Thorough.max_nodes());
        assert!(Preset::Fast.timeout_ms() < Preset::Thorough.timeout_ms());
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Balanced);
    }
}
