// Number formatting utilities

/// Digits after the decimal point in scientific output.
pub const EXP_PRECISION: usize = 6;

/// Format a float the way C's `%e` does: six fractional digits, an explicit
/// exponent sign, and at least two exponent digits (`2.500000e-01`).
///
/// Non-finite values render as `nan`, `inf` and `-inf`.
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        };
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    let raw = format!("{:.*e}", EXP_PRECISION, value);
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    format!("{mantissa}e{}", pad_exponent(exponent))
}

/// Single-precision convenience wrapper around [`format_scientific`].
#[inline]
pub fn format_scientific_f32(value: f32) -> String {
    format_scientific(f64::from(value))
}

fn pad_exponent(input: &str) -> String {
    let (sign, digits) = match input.as_bytes().first() {
        Some(b'-') => ('-', &input[1..]),
        Some(b'+') => ('+', &input[1..]),
        _ => ('+', input),
    };
    format!("{sign}{digits:0>2}")
}
