//! Digit generation for integer bases and float notations.
//!
//! Shared by the default render implementations. Integer digits go through
//! a fixed buffer; float notations follow the usual printf conventions
//! (six fractional digits when no precision is given, two exponent digits,
//! the `%g` significant-digit rule for the general notation).

use crate::sink::{Base, FIELD_LIMIT, FloatStyle};

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Renders `value` in `base`. The caller handles signs; hexadecimal and
/// octal callers pass two's-complement magnitudes.
pub(crate) fn int_digits(value: u128, base: Base, uppercase: bool) -> String {
    let radix = match base {
        Base::Dec => 10u128,
        Base::Oct => 8,
        Base::Hex => 16,
    };
    let table = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };
    if value == 0 {
        return "0".to_string();
    }
    // 43 octal digits cover u128, the widest rendering of any base
    let mut buf = [0u8; 43];
    let mut pos = buf.len();
    let mut rest = value;
    while rest > 0 {
        pos -= 1;
        buf[pos] = table[(rest % radix) as usize];
        rest /= radix;
    }
    buf[pos..].iter().map(|&b| char::from(b)).collect()
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

/// Fractional digits used when a notation needs a precision and none was
/// given.
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Renders `value` under `style`.
///
/// `precision` counts fractional digits for fixed and scientific notation
/// and significant digits for the general one; 0 means unspecified, which
/// selects six fractional digits for fixed/scientific and the shortest
/// round-tripping form for general. Precision is honored up to
/// [`FIELD_LIMIT`].
pub(crate) fn float_to_string(
    value: f64,
    style: FloatStyle,
    precision: usize,
    uppercase: bool,
) -> String {
    // Bounded: a scanned precision can be arbitrarily large.
    let precision = precision.min(FIELD_LIMIT);
    if value.is_nan() {
        return (if uppercase { "NAN" } else { "nan" }).to_string();
    }
    if value.is_infinite() {
        let text = match (value.is_sign_negative(), uppercase) {
            (true, true) => "-INF",
            (true, false) => "-inf",
            (false, true) => "INF",
            (false, false) => "inf",
        };
        return text.to_string();
    }
    match style {
        FloatStyle::Fixed => {
            let prec = if precision == 0 {
                DEFAULT_FLOAT_PRECISION
            } else {
                precision
            };
            format!("{value:.prec$}")
        }
        FloatStyle::Scientific => {
            let prec = if precision == 0 {
                DEFAULT_FLOAT_PRECISION
            } else {
                precision
            };
            format_scientific(value, prec, uppercase)
        }
        FloatStyle::General => {
            if precision == 0 {
                display_with_case(value.to_string(), uppercase)
            } else {
                format_general(value, precision, uppercase)
            }
        }
    }
}

/// `%e`-style notation with `precision` fractional digits and a two-digit
/// exponent.
fn format_scientific(value: f64, precision: usize, uppercase: bool) -> String {
    let marker = if uppercase { 'E' } else { 'e' };
    if value == 0.0 {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}{:.precision$}{marker}+00", 0f64);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let (mut mantissa, mut exponent) = normalize(value.abs());
    let mut digits = format!("{mantissa:.precision$}");
    // rounding at the requested precision can carry into a second integer
    // digit (9.99 -> "10.0"); renormalize so one digit stays before the dot
    if integer_digits(&digits) > 1 {
        mantissa /= 10.0;
        exponent += 1;
        digits = format!("{mantissa:.precision$}");
    }
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{digits}{marker}{exp_sign}{:02}", exponent.abs())
}

/// `%g`-style notation with `precision` significant digits: fixed-point
/// while the decimal exponent lies in `[-4, precision)`, scientific
/// otherwise, trailing zeros stripped either way.
fn format_general(value: f64, precision: usize, uppercase: bool) -> String {
    let sig = precision.max(1);
    if value == 0.0 {
        return (if value.is_sign_negative() { "-0" } else { "0" }).to_string();
    }
    let (_, exponent) = normalize(value.abs());
    if exponent >= -4 && exponent < sig as i32 {
        let frac = (sig as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.frac$}"))
    } else {
        strip_exponent_zeros(&format_scientific(value, sig - 1, uppercase))
    }
}

/// Fixes up the exponent letter of a `Display`-produced float string when
/// uppercase rendering was requested. `e` only ever appears as the exponent
/// marker in that output.
pub(crate) fn display_with_case(text: String, uppercase: bool) -> String {
    if uppercase { text.replace('e', "E") } else { text }
}

/// Scales a finite, positive value into `[1, 10)`, returning the mantissa
/// and the decimal exponent.
fn normalize(value: f64) -> (f64, i32) {
    let mut mantissa = value;
    let mut exponent = 0i32;
    while mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    while mantissa < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    (mantissa, exponent)
}

fn integer_digits(digits: &str) -> usize {
    digits.find('.').unwrap_or(digits.len())
}

/// Drops trailing fractional zeros, and the decimal point itself when
/// nothing remains behind it.
fn strip_trailing_zeros(digits: &str) -> String {
    if !digits.contains('.') {
        return digits.to_string();
    }
    digits.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// [`strip_trailing_zeros`] applied to the mantissa of a scientific-form
/// string.
fn strip_exponent_zeros(digits: &str) -> String {
    match digits.find(['e', 'E']) {
        Some(pos) => {
            let (mantissa, exponent) = digits.split_at(pos);
            format!("{}{exponent}", strip_trailing_zeros(mantissa))
        }
        None => strip_trailing_zeros(digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_digits_zero() {
        assert_eq!(int_digits(0, Base::Hex, false), "0");
    }

    #[test]
    fn test_int_digits_bases() {
        assert_eq!(int_digits(42, Base::Dec, false), "42");
        assert_eq!(int_digits(42, Base::Oct, false), "52");
        assert_eq!(int_digits(42, Base::Hex, false), "2a");
        assert_eq!(int_digits(42, Base::Hex, true), "2A");
    }

    #[test]
    fn test_int_digits_u128_extremes() {
        assert_eq!(
            int_digits(u128::MAX, Base::Hex, false),
            "ffffffffffffffffffffffffffffffff"
        );
        assert_eq!(int_digits(u128::MAX, Base::Oct, false).len(), 43);
    }

    #[test]
    fn test_precision_is_bounded_at_field_limit() {
        let out = float_to_string(1.5, FloatStyle::Fixed, usize::MAX, false);
        assert_eq!(out.len(), FIELD_LIMIT + 2);
        assert!(out.starts_with("1.5"));
        assert!(out.ends_with('0'));
    }

    #[test]
    fn test_fixed_default_precision() {
        assert_eq!(
            float_to_string(1500.0, FloatStyle::Fixed, 0, false),
            "1500.000000"
        );
    }

    #[test]
    fn test_fixed_explicit_precision() {
        assert_eq!(float_to_string(3.14159, FloatStyle::Fixed, 2, false), "3.14");
    }

    #[test]
    fn test_scientific_default_precision() {
        assert_eq!(
            float_to_string(1500.0, FloatStyle::Scientific, 0, false),
            "1.500000e+03"
        );
    }

    #[test]
    fn test_scientific_uppercase_marker() {
        assert_eq!(
            float_to_string(1500.0, FloatStyle::Scientific, 2, true),
            "1.50E+03"
        );
    }

    #[test]
    fn test_scientific_negative_exponent() {
        assert_eq!(
            float_to_string(0.00125, FloatStyle::Scientific, 2, false),
            "1.25e-03"
        );
    }

    #[test]
    fn test_scientific_rounding_renormalizes() {
        assert_eq!(
            float_to_string(9.999, FloatStyle::Scientific, 2, false),
            "1.00e+01"
        );
    }

    #[test]
    fn test_scientific_zero() {
        assert_eq!(
            float_to_string(0.0, FloatStyle::Scientific, 2, false),
            "0.00e+00"
        );
    }

    #[test]
    fn test_general_shortest_when_unspecified() {
        assert_eq!(float_to_string(3.25, FloatStyle::General, 0, false), "3.25");
        assert_eq!(float_to_string(10.0, FloatStyle::General, 0, false), "10");
    }

    #[test]
    fn test_general_shortest_exponent_follows_case() {
        assert_eq!(float_to_string(1e300, FloatStyle::General, 0, false), "1e300");
        assert_eq!(float_to_string(1e300, FloatStyle::General, 0, true), "1E300");
    }

    #[test]
    fn test_general_significant_digits() {
        assert_eq!(
            float_to_string(1234.5, FloatStyle::General, 3, false),
            "1.23e+03"
        );
        assert_eq!(float_to_string(12.34, FloatStyle::General, 3, false), "12.3");
    }

    #[test]
    fn test_general_strips_trailing_zeros() {
        assert_eq!(float_to_string(1.5, FloatStyle::General, 4, false), "1.5");
        assert_eq!(float_to_string(100.0, FloatStyle::General, 5, false), "100");
    }

    #[test]
    fn test_general_small_magnitude_goes_scientific() {
        assert_eq!(
            float_to_string(0.00001, FloatStyle::General, 3, false),
            "1e-05"
        );
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(float_to_string(f64::NAN, FloatStyle::General, 0, false), "nan");
        assert_eq!(float_to_string(f64::NAN, FloatStyle::General, 0, true), "NAN");
        assert_eq!(
            float_to_string(f64::INFINITY, FloatStyle::Fixed, 2, true),
            "INF"
        );
        assert_eq!(
            float_to_string(f64::NEG_INFINITY, FloatStyle::Scientific, 0, false),
            "-inf"
        );
    }
}
