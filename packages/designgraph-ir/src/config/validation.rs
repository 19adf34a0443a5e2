//! Configuration validation
//!
//! Every configuration section implements [`Validatable`]; the top-level
//! [`ExtractionConfig`](super::ExtractionConfig) validates all of them in
//! `build()`.

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Check that `value` is finite and inside `min..=max`
pub(crate) fn check_f64_range(
    field: &str,
    value: f64,
    min: f64,
    max: f64,
    hint: &str,
) -> ConfigResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::range_with_hint(field, value, min, max, hint));
    }
    Ok(())
}

/// Check that a `(min, max)` pair is ordered
pub(crate) fn check_ordered<T: PartialOrd + ToString>(
    section: &str,
    min_field: &str,
    min: T,
    max_field: &str,
    max: T,
) -> ConfigResult<()> {
    if min > max {
        return Err(ConfigError::inverted(
            section, min_field, min, max_field, max,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_f64_range_rejects_nan() {
        assert!(check_f64_range("min_opacity", f64::NAN, 0.0, 1.0, "").is_err());
        assert!(check_f64_range("min_opacity", 0.5, 0.0, 1.0, "").is_ok());
    }

    #[test]
    fn test_check_ordered() {
        assert!(check_ordered("spacing", "min_spacing", 0.0, "max_spacing", 200.0).is_ok());
        assert!(check_ordered("spacing", "min_spacing", 10.0, "max_spacing", 5.0).is_err());
    }
}
