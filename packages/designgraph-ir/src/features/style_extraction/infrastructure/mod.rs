mod color;
mod opacity;
mod radius;
mod registry;
mod shadow;
mod spacing;
mod typography;

pub use color::{to_hex, ColorExtractor};
pub use opacity::OpacityExtractor;
pub use radius::RadiusExtractor;
pub use registry::ExtractorRegistry;
pub use shadow::{to_rgba, ShadowExtractor};
pub use spacing::SpacingExtractor;
pub use typography::{weight_from_style, TypographyExtractor};
