//! Human-readable size → byte count.
//!
//! Parsing is permissive: anything without a recognised unit suffix is read as
//! a leading integer number of bytes, and only input without any usable digits
//! yields `None`.

use crate::options::ParseOptions;
use crate::units::{CapacityBase, Unit};
use regex::Regex;
use std::sync::LazyLock;

/// A signed numeral (scientific notation allowed after a decimal point)
/// followed by a unit suffix, matched ASCII case-insensitively.
#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static SIZE_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?[0-9]+(?:\.[0-9]*[Ee+-]*[0-9]+)?)((?i-u:kb|mb|gb|tb|pb|eb|zb))$")
        .expect("valid regex")
});

/// Longest prefix that reads as a decimal literal.
#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]*)?(?:[Ee][-+]?[0-9]+)?").expect("valid regex")
});

/// Leading signed integer.
#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static INTEGER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+").expect("valid regex"));

/// Parse a size string into a byte count.
///
/// The result is always integral (floored toward negative infinity) but is
/// returned as `f64`: zettabyte-scale inputs do not fit a machine integer.
///
/// # Example
///
/// ```
/// use bytefmt_core::{parse, CapacityBase, ParseOptions};
///
/// assert_eq!(parse("10MiB", &ParseOptions::default()), Some(10_485_760.0));
///
/// let decimal = ParseOptions::new()
///     .with_capacity_base(CapacityBase::Decimal)
///     .with_convert(false);
/// assert_eq!(parse("10MB", &decimal), Some(10_000_000.0));
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Option<f64> {
    let normalized = normalize(text);
    let (mut magnitude, unit) = read_quantity(&normalized)?;

    let base = options.capacity_base;
    if base == CapacityBase::Decimal && options.convert {
        magnitude = (magnitude * CapacityBase::Binary.magnitude(unit))
            / CapacityBase::Decimal.magnitude(unit);
    }
    Some((base.magnitude(unit) * magnitude).floor())
}

/// Drop every space, then the first `i` wherever it occurs ("10 MiB" -> "10MB").
fn normalize(text: &str) -> String {
    text.replace(' ', "").replacen('i', "", 1)
}

fn read_quantity(normalized: &str) -> Option<(f64, Unit)> {
    if let Some(caps) = SIZE_WITH_UNIT.captures(normalized) {
        let unit = Unit::from_suffix(&caps[2])?;
        let magnitude = leading_decimal(&caps[1])?;
        return Some((magnitude, unit));
    }

    tracing::debug!(input = normalized, "no unit suffix, reading as plain bytes");
    match leading_integer(normalized) {
        Some(magnitude) => Some((magnitude, Unit::B)),
        None => {
            tracing::debug!(input = normalized, "no digits to read");
            None
        }
    }
}

fn leading_decimal(numeral: &str) -> Option<f64> {
    DECIMAL_PREFIX
        .find(numeral)
        .and_then(|m| m.as_str().parse().ok())
}

fn leading_integer(text: &str) -> Option<f64> {
    INTEGER_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}
