mod buckets;
mod palette;

pub use buckets::{
    BucketSpec, FONT_SIZE_BUCKETS, OPACITY_BUCKETS, RADIUS_BUCKETS, SHADOW_BUCKETS,
    SPACING_BUCKETS,
};
pub use palette::{
    brand_slot, ColorPalette, BRAND_COLORS, NAMED_COLORS, NAMED_COLOR_DEFAULTS,
};
