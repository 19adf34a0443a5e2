//! Canonical bucket definitions
//!
//! A value goes to the first bucket (ascending) with `value <= upper`; the
//! last bucket has no upper bound. Empty buckets take the listed default.

use once_cell::sync::Lazy;

/// One named bucket of a canonical scale
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec<V> {
    pub name: &'static str,
    /// Inclusive upper bound; `None` for the top bucket
    pub upper: Option<f64>,
    pub default: V,
}

impl<V> BucketSpec<V> {
    pub const fn new(name: &'static str, upper: Option<f64>, default: V) -> Self {
        Self {
            name,
            upper,
            default,
        }
    }

    pub fn accepts(&self, key: f64) -> bool {
        self.upper.map_or(true, |upper| key <= upper)
    }
}

pub const FONT_SIZE_BUCKETS: [BucketSpec<u32>; 5] = [
    BucketSpec::new("xs", Some(12.0), 12),
    BucketSpec::new("sm", Some(14.0), 14),
    BucketSpec::new("base", Some(16.0), 16),
    BucketSpec::new("lg", Some(18.0), 18),
    BucketSpec::new("xl", None, 20),
];

pub const SPACING_BUCKETS: [BucketSpec<u32>; 6] = [
    BucketSpec::new("xs", Some(4.0), 4),
    BucketSpec::new("sm", Some(8.0), 8),
    BucketSpec::new("md", Some(16.0), 16),
    BucketSpec::new("lg", Some(24.0), 24),
    BucketSpec::new("xl", Some(32.0), 32),
    BucketSpec::new("2xl", None, 48),
];

pub const RADIUS_BUCKETS: [BucketSpec<u32>; 6] = [
    BucketSpec::new("none", Some(0.0), 0),
    BucketSpec::new("sm", Some(4.0), 4),
    BucketSpec::new("md", Some(8.0), 8),
    BucketSpec::new("lg", Some(16.0), 16),
    BucketSpec::new("xl", Some(24.0), 24),
    BucketSpec::new("full", None, 100),
];

pub const OPACITY_BUCKETS: [BucketSpec<f64>; 4] = [
    BucketSpec::new("subtle", Some(0.25), 0.2),
    BucketSpec::new("muted", Some(0.5), 0.4),
    BucketSpec::new("medium", Some(0.75), 0.6),
    BucketSpec::new("strong", None, 0.9),
];

/// Shadow buckets, keyed by blur radius
pub static SHADOW_BUCKETS: Lazy<[BucketSpec<String>; 4]> = Lazy::new(|| {
    [
        BucketSpec::new("sm", Some(4.0), "0px 1px 2px rgba(0, 0, 0, 0.05)".to_string()),
        BucketSpec::new("md", Some(10.0), "0px 4px 6px rgba(0, 0, 0, 0.1)".to_string()),
        BucketSpec::new("lg", Some(20.0), "0px 10px 15px rgba(0, 0, 0, 0.1)".to_string()),
        BucketSpec::new("xl", None, "0px 20px 25px rgba(0, 0, 0, 0.15)".to_string()),
    ]
});
