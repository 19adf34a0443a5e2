//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Lower bound above upper bound
    #[error("Inverted bounds in '{section}': {min_field} ({min}) exceeds {max_field} ({max})")]
    InvertedBounds {
        section: String,
        min_field: String,
        max_field: String,
        min: String,
        max: String,
    },

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: fast, balanced, thorough")]
    UnknownPreset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    /// Create an inverted-bounds error
    pub fn inverted(
        section: impl Into<String>,
        min_field: impl Into<String>,
        min: impl ToString,
        max_field: impl Into<String>,
        max: impl ToString,
    ) -> Self {
        Self::InvertedBounds {
            section: section.into(),
            min_field: min_field.into(),
            max_field: max_field.into(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting() {
        let err = ConfigError::range_with_hint(
            "max_depth",
            0,
            1,
            1000,
            "Traversal depth must be at least 1",
        );

        let msg = err.to_string();
        assert!(msg.contains("max_depth"));
        assert!(msg.contains("1..=1000"));
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn test_inverted_bounds_formatting() {
        let err = ConfigError::inverted("typography", "min_font_size", 80, "max_font_size", 72);
        assert_eq!(
            err.to_string(),
            "Inverted bounds in 'typography': min_font_size (80) exceeds max_font_size (72)"
        );
    }

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1],
        };
        assert!(err.to_string().contains("Supported versions: 1"));
    }
}
