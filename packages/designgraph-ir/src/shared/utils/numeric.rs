//! Numeric formatting helpers

/// Round to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Print with at most two decimals and no trailing zeros (`4`, `0.5`, `1.25`)
pub fn format_number(value: f64) -> String {
    let rounded = round_to(value, 2);
    // -0.0 prints as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

/// Unit-range channel to 8 bits
pub fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Whether `value` lies in `[0, 1]`
pub fn is_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
