//! Color palette aggregation
//!
//! # Algorithm
//! 1. Partition colors, in this order: semantic (brand table), grayscale
//!    (8-bit channel spread <= 10), accent (everything else)
//! 2. Cap: all semantic colors, then up to `max_gray_shades` grays sampled
//!    evenly from dark to light, then accents in ascending order, stopping at
//!    `max_palette_size`
//! 3. Named scale: brand matches first, then primary/secondary from accents,
//!    background from the lightest gray, foreground from the darkest gray,
//!    defaults for the rest

use std::collections::BTreeSet;
use tracing::debug;

use crate::config::PaletteConfig;
use crate::features::aggregation::domain::{
    brand_slot, ColorPalette, NAMED_COLORS, NAMED_COLOR_DEFAULTS,
};
use crate::shared::models::{ScaleEntry, ScaleOrigin, SemanticScale, TokenCategory};

/// Maximum 8-bit channel spread for a color to count as gray
pub const GRAY_TOLERANCE: u8 = 10;

fn channels(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

pub fn is_gray(hex: &str) -> bool {
    channels(hex).map_or(false, |rgb| {
        let max = rgb.iter().copied().max().unwrap_or(0);
        let min = rgb.iter().copied().min().unwrap_or(0);
        max - min <= GRAY_TOLERANCE
    })
}

/// Relative luminance on 8-bit channels
pub fn luminance(hex: &str) -> f64 {
    channels(hex).map_or(0.0, |[r, g, b]| {
        0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
    })
}

/// `n` items spread evenly over `items`, keeping both ends
fn sample_evenly(items: &[String], n: usize) -> Vec<String> {
    if n >= items.len() {
        return items.to_vec();
    }
    match n {
        0 => Vec::new(),
        1 => vec![items[0].clone()],
        _ => (0..n)
            .map(|i| items[i * (items.len() - 1) / (n - 1)].clone())
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    max_palette_size: usize,
    max_gray_shades: usize,
}

impl PaletteBuilder {
    pub fn new(config: &PaletteConfig) -> Self {
        Self {
            max_palette_size: config.max_palette_size,
            max_gray_shades: config.max_gray_shades,
        }
    }

    pub fn build(&self, colors: &BTreeSet<String>) -> ColorPalette {
        let mut semantic = Vec::new();
        let mut grays = Vec::new();
        let mut accents = Vec::new();
        for color in colors {
            if brand_slot(color).is_some() {
                semantic.push(color.clone());
            } else if is_gray(color) {
                grays.push(color.clone());
            } else {
                accents.push(color.clone());
            }
        }
        grays.sort_by(|a, b| luminance(a).total_cmp(&luminance(b)).then_with(|| a.cmp(b)));

        let room = self.max_palette_size.saturating_sub(semantic.len());
        let grayscale = sample_evenly(&grays, self.max_gray_shades.min(room));
        let room = room - grayscale.len();
        let accent: Vec<String> = accents.iter().take(room).cloned().collect();

        let dropped = colors.len() - semantic.len() - grayscale.len() - accent.len();
        if dropped > 0 {
            debug!("build_palette: cap dropped {} of {} colors", dropped, colors.len());
        }

        let named = Self::named_scale(&semantic, &grayscale, &accent);
        ColorPalette {
            semantic,
            grayscale,
            accent,
            dropped,
            named,
        }
    }

    fn named_scale(
        semantic: &[String],
        grayscale: &[String],
        accent: &[String],
    ) -> SemanticScale<String> {
        let mut slots: Vec<Option<String>> = vec![None; NAMED_COLORS.len()];
        let slot_index = |name: &str| NAMED_COLORS.iter().position(|n| *n == name);

        for color in semantic {
            if let Some(i) = brand_slot(color).and_then(slot_index) {
                slots[i].get_or_insert_with(|| color.clone());
            }
        }

        let mut spare_accents = accent.iter();
        for name in ["primary", "secondary"] {
            if let Some(i) = slot_index(name) {
                if slots[i].is_none() {
                    slots[i] = spare_accents.next().cloned();
                }
            }
        }

        if let Some(i) = slot_index("background") {
            if slots[i].is_none() {
                slots[i] = grayscale.last().cloned();
            }
        }
        if let Some(i) = slot_index("foreground") {
            // a single gray already went to background
            if slots[i].is_none() && grayscale.len() > 1 {
                slots[i] = grayscale.first().cloned();
            }
        }

        let entries = NAMED_COLOR_DEFAULTS
            .iter()
            .zip(slots)
            .map(|((name, default), slot)| match slot {
                Some(value) => ScaleEntry {
                    name: *name,
                    value,
                    origin: ScaleOrigin::Derived,
                },
                None => ScaleEntry {
                    name: *name,
                    value: (*default).to_string(),
                    origin: ScaleOrigin::Default,
                },
            })
            .collect();
        SemanticScale::new(TokenCategory::Color, entries)
    }
}
