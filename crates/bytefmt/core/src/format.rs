//! Byte count → human-readable size.

use crate::numeral;
use crate::options::FormatOptions;
use crate::units::{CapacityBase, Unit};
use serde::Serialize;
use std::fmt;

/// Largest accepted `decimal_places`; more yields `None`.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Output of [`format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Formatted {
    /// Number, unit separator and label joined (`"1.5 MiB"`).
    Joined(String),
    /// `[number, label]`, produced when `split_unit` is set.
    Split([String; 2]),
}

impl Formatted {
    /// The joined string, if this is not a split result.
    pub fn as_joined(&self) -> Option<&str> {
        match self {
            Self::Joined(s) => Some(s.as_str()),
            Self::Split(_) => None,
        }
    }

    /// Number and label, if this is a split result.
    pub fn as_split(&self) -> Option<(&str, &str)> {
        match self {
            Self::Joined(_) => None,
            Self::Split([number, label]) => Some((number.as_str(), label.as_str())),
        }
    }

    /// Consume into the joined string, if any.
    pub fn into_joined(self) -> Option<String> {
        match self {
            Self::Joined(s) => Some(s),
            Self::Split(_) => None,
        }
    }
}

/// Split results render as the number and label with nothing in between.
impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined(s) => f.write_str(s),
            Self::Split([number, label]) => write!(f, "{number}{label}"),
        }
    }
}

/// Format a byte count.
///
/// Returns `None` when `value` is NaN or infinite, or when `decimal_places`
/// exceeds [`MAX_DECIMAL_PLACES`].
///
/// # Example
///
/// ```
/// use bytefmt_core::{format, Formatted, FormatOptions};
///
/// let out = format(1_048_576.0, &FormatOptions::new().with_unit_separator(" "));
/// assert_eq!(out, Some(Formatted::Joined("1 MiB".into())));
/// ```
pub fn format(value: f64, options: &FormatOptions) -> Option<Formatted> {
    if !value.is_finite() {
        tracing::trace!(value, "refusing to format non-finite value");
        return None;
    }
    if options.decimal_places > MAX_DECIMAL_PLACES {
        tracing::trace!(places = options.decimal_places, "too many decimal places");
        return None;
    }

    let base = options.capacity_base;
    let unit = select_unit(value.abs(), options);
    tracing::trace!(value, %unit, %base, "selected unit");

    let mut number = numeral::to_fixed(value / base.magnitude(unit), options.decimal_places);
    if !options.fixed_decimals {
        number = numeral::strip_trailing_zeros(&number);
    }
    if !options.thousands_separator.is_empty() {
        number = numeral::group_thousands(&number, &options.thousands_separator);
    }

    let label = base.label(unit);
    if options.split_unit {
        Some(Formatted::Split([number, label.to_owned()]))
    } else {
        Some(Formatted::Joined(format!(
            "{number}{}{label}",
            options.unit_separator
        )))
    }
}

fn select_unit(magnitude: f64, options: &FormatOptions) -> Unit {
    if let Some(unit) = options.to_unit {
        return unit;
    }
    let base = options.capacity_base;
    let fits = |unit: &Unit| magnitude >= base.magnitude(*unit);
    let matched = if options.without_float {
        largest_unit(|unit| fits(unit) && divides_exactly(magnitude, base, *unit))
    } else {
        largest_unit(fits)
    };
    matched.unwrap_or(Unit::B)
}

fn largest_unit(predicate: impl FnMut(&Unit) -> bool) -> Option<Unit> {
    Unit::ALL.into_iter().rev().find(predicate)
}

fn divides_exactly(magnitude: f64, base: CapacityBase, unit: Unit) -> bool {
    let quotient = magnitude / base.magnitude(unit);
    quotient.round() == quotient
}
