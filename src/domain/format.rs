// Display formatting for interpolated values
use super::calibration::AxisScale;

const SIGNIFICANT_DIGITS: i32 = 4;
const PERCENT_DECIMALS: usize = 2;
/// Precision for values with no usable magnitude (zero)
const FALLBACK_DECIMALS: usize = 3;

/// Formats a value read off an axis.
///
/// Linear axes keep about four significant digits and never go below
/// zero decimals. Percent axes carry fractions and render as `12.34%`.
pub fn format_value(value: f64, scale: AxisScale) -> String {
    // Avoid printing "-0.000"
    let value = if value == 0.0 { 0.0 } else { value };

    match scale {
        AxisScale::Linear => format!("{:.*}", decimals_for(value), value),
        AxisScale::Percent => format!("{:.*}%", PERCENT_DECIMALS, value * 100.0),
    }
}

fn decimals_for(value: f64) -> usize {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return FALLBACK_DECIMALS;
    }

    let integer_digits = magnitude.log10().floor() as i32 + 1;
    (SIGNIFICANT_DIGITS - integer_digits).max(0) as usize
}
