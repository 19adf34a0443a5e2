//! Value-or-skip results of extractor reads

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::shared::models::TokenCategory;

/// Why a single value did not become a token
///
/// Rejections are absorbed by the caller and only counted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("{field} is mixed")]
    Mixed { field: &'static str },

    #[error("{field} is missing")]
    Missing { field: &'static str },

    #[error("{field} is hidden")]
    Hidden { field: &'static str },

    #[error("{field} is not a solid paint")]
    NotSolid { field: &'static str },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be greater than {min}, got {value}")]
    BelowThreshold {
        field: &'static str,
        value: f64,
        min: f64,
    },
}

impl Rejection {
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Rejection::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    pub fn below(field: &'static str, value: f64, min: f64) -> Self {
        Rejection::BelowThreshold { field, value, min }
    }
}

pub type ReadResult<T> = std::result::Result<T, Rejection>;

/// Accepted/rejected counters per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub accepted: BTreeMap<TokenCategory, usize>,
    pub rejected: BTreeMap<TokenCategory, usize>,
}

impl ExtractionStats {
    pub fn accept(&mut self, category: TokenCategory) {
        *self.accepted.entry(category).or_default() += 1;
    }

    pub fn reject(&mut self, category: TokenCategory) {
        *self.rejected.entry(category).or_default() += 1;
    }

    pub fn total_accepted(&self) -> usize {
        self.accepted.values().sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn rejected_in(&self, category: TokenCategory) -> usize {
        self.rejected.get(&category).copied().unwrap_or(0)
    }

    pub fn merge(&mut self, other: &ExtractionStats) {
        for (category, n) in &other.accepted {
            *self.accepted.entry(*category).or_default() += n;
        }
        for (category, n) in &other.rejected {
            *self.rejected.entry(*category).or_default() += n;
        }
    }
}
