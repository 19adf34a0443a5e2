mod palette_builder;
mod scale_builder;
mod variants;

pub use palette_builder::{is_gray, luminance, PaletteBuilder, GRAY_TOLERANCE};
pub use scale_builder::{
    build_scale, build_scales, font_size_scale, opacity_scale, radius_scale, shadow_scale,
    spacing_scale,
};
pub use variants::{VariantAggregator, DEFAULT_VARIANT};
