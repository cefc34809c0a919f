//! Size string → size string in a chosen unit.

use crate::format::{Formatted, format};
use crate::options::{FormatOptions, ParseOptions};
use crate::parse::parse;
use crate::units::{CapacityBase, Unit};

/// Re-express a size string in `to_unit`.
///
/// The input is read in the same base as the output, so `"10TB"` becomes
/// `"10000GB"` under the decimal base and `"10240GiB"` under the binary base.
///
/// # Example
///
/// ```
/// use bytefmt_core::{parse_to_unit, CapacityBase, Unit};
///
/// assert_eq!(
///     parse_to_unit("10TB", Unit::Gb, CapacityBase::Binary).as_deref(),
///     Some("10240GiB")
/// );
/// assert_eq!(
///     parse_to_unit("10TB", Unit::Gb, CapacityBase::Decimal).as_deref(),
///     Some("10000GB")
/// );
/// ```
pub fn parse_to_unit(text: &str, to_unit: Unit, base: CapacityBase) -> Option<String> {
    let parse_options = ParseOptions::new()
        .with_capacity_base(base)
        .with_convert(base != CapacityBase::Decimal);
    let bytes = parse(text, &parse_options)?;

    let format_options = FormatOptions::new()
        .with_capacity_base(base)
        .with_to_unit(Some(to_unit));
    format(bytes, &format_options).and_then(Formatted::into_joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terabytes_to_gigabytes() {
        assert_eq!(
            parse_to_unit("10TB", Unit::Gb, CapacityBase::Binary).as_deref(),
            Some("10240GiB")
        );
        assert_eq!(
            parse_to_unit("10TB", Unit::Gb, CapacityBase::Decimal).as_deref(),
            Some("10000GB")
        );
    }

    #[test]
    fn test_binary_labels_in_input_are_accepted() {
        assert_eq!(
            parse_to_unit("1.5 GiB", Unit::Mb, CapacityBase::Binary).as_deref(),
            Some("1536MiB")
        );
    }

    #[test]
    fn test_down_to_bytes() {
        assert_eq!(
            parse_to_unit("2KB", Unit::B, CapacityBase::Decimal).as_deref(),
            Some("2000B")
        );
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_to_unit("lots", Unit::Gb, CapacityBase::Binary), None);
    }

    #[test]
    fn test_overflow_to_infinity_is_none() {
        assert_eq!(parse_to_unit("1.0e308ZB", Unit::B, CapacityBase::Binary), None);
    }
}
