//! Rendering of the numeric part of a formatted size.
//!
//! Fixed-point rendering follows the classic "to fixed" rule: the exact binary
//! value is rounded to the nearest decimal with the requested digits, exact
//! ties round away from zero, and magnitudes of 1e21 or more fall back to the
//! shortest exponent form.

use regex::Regex;
use std::sync::LazyLock;

/// Magnitude from which fixed-point rendering switches to exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Above this many places no `f64` can sit exactly on a rounding tie.
const MAX_TIE_PLACES: usize = 1074;

/// Trailing zeros after the point: either an all-zero fraction, or a run of
/// non-zero characters followed by zeros. Any other fraction is left alone.
#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static TRAILING_ZEROS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\.0*|(\.[^0]+)0+)$").expect("valid regex"));

/// Render `value` with exactly `places` digits after the point.
pub(crate) fn to_fixed(value: f64, places: usize) -> String {
    let magnitude = value.abs();
    if magnitude >= EXPONENT_THRESHOLD {
        return exponent_form(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = if is_exact_tie(magnitude, places) {
        next_up(magnitude)
    } else {
        magnitude
    };
    format!("{sign}{magnitude:.places$}")
}

/// Strip insignificant trailing zeros ("1.00" -> "1", "1.50" -> "1.5").
pub(crate) fn strip_trailing_zeros(numeral: &str) -> String {
    TRAILING_ZEROS.replace(numeral, "$1").into_owned()
}

/// Insert `separator` between groups of three digits of the integer part.
pub(crate) fn group_thousands(numeral: &str, separator: &str) -> String {
    let (sign, unsigned) = match numeral.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeral),
    };
    let int_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (int_part, rest) = unsigned.split_at(int_len);

    let mut out = String::with_capacity(numeral.len() + separator.len() * (int_len / 3));
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out.push_str(rest);
    out
}

/// Whether `magnitude` lies exactly halfway between two `places`-digit decimals.
///
/// A tie needs at most `places + 1` fractional bits, in which case the decimal
/// expansion printed with `places + 1` digits is exact and ends in `5`.
fn is_exact_tie(magnitude: f64, places: usize) -> bool {
    if magnitude == 0.0 || places >= MAX_TIE_PLACES {
        return false;
    }
    let digits = places + 1;
    let scaled = magnitude * 2f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    if scaled.fract() != 0.0 {
        return false;
    }
    format!("{magnitude:.digits$}").ends_with('5')
}

/// Smallest `f64` above a positive finite `value`.
fn next_up(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

/// Shortest round-trip exponent form with an explicit exponent sign (`1e+21`).
fn exponent_form(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}
