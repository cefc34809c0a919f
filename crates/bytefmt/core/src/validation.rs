//! Advisory validation for [`FormatOptions`].
//!
//! Validation is advisory - it produces warnings but never prevents the options
//! from being used. They flag settings that are silently ignored or that leave
//! `format` with unreadable output or none at all.

use crate::format::MAX_DECIMAL_PLACES;
use crate::options::FormatOptions;

/// Beyond this many places the extra digits only expose binary noise.
const MAX_MEANINGFUL_PLACES: usize = 20;

/// An advisory warning about an options issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// JSON path to the problematic field.
    pub path: &'static str,
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Validate format options and return advisory warnings.
pub fn validate(opts: &FormatOptions) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];

    if let (Some(unit), true) = (opts.to_unit, opts.without_float) {
        warnings.push(AdvisoryWarning {
            code: "to_unit.overrides_without_float",
            path: "to_unit",
            message: format!("to_unit '{unit}' is used as-is; without_float has no effect"),
        });
    }

    if opts.split_unit && !opts.unit_separator.is_empty() {
        warnings.push(AdvisoryWarning {
            code: "unit_separator.ignored_when_split",
            path: "unit_separator",
            message: format!(
                "unit_separator '{}' is not used when split_unit is enabled",
                opts.unit_separator
            ),
        });
    }

    if opts.thousands_separator.chars().any(|c| c.is_ascii_digit()) {
        warnings.push(AdvisoryWarning {
            code: "thousands_separator.contains_digit",
            path: "thousands_separator",
            message: format!(
                "thousands_separator '{}' contains a digit; output will be ambiguous",
                opts.thousands_separator
            ),
        });
    }

    if opts.decimal_places > MAX_DECIMAL_PLACES {
        warnings.push(AdvisoryWarning {
            code: "decimal_places.exceeds_limit",
            path: "decimal_places",
            message: format!(
                "{} decimal places exceeds the limit of {MAX_DECIMAL_PLACES}; nothing will be formatted",
                opts.decimal_places
            ),
        });
    } else if opts.decimal_places > MAX_MEANINGFUL_PLACES {
        warnings.push(AdvisoryWarning {
            code: "decimal_places.exceeds_precision",
            path: "decimal_places",
            message: format!(
                "{} decimal places exceeds the {MAX_MEANINGFUL_PLACES} an f64 can carry",
                opts.decimal_places
            ),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn test_default_options_have_no_warnings() {
        let warnings = validate(&FormatOptions::default());
        assert!(
            warnings.is_empty(),
            "Default options should have no warnings: {:?}",
            warnings
        );
    }

    #[test]
    fn test_to_unit_with_without_float_warns() {
        let opts = FormatOptions::new()
            .with_to_unit(Some(Unit::Gb))
            .with_without_float(true);
        let warnings = validate(&opts);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "to_unit.overrides_without_float");
        assert!(warnings[0].message.contains("'GB'"));
    }

    #[test]
    fn test_separator_with_split_warns() {
        let opts = FormatOptions::new()
            .with_split_unit(true)
            .with_unit_separator(" ");
        let warnings = validate(&opts);
        assert!(
            warnings
                .iter()
                .any(|w| w.code == "unit_separator.ignored_when_split")
        );
    }

    #[test]
    fn test_digit_thousands_separator_warns() {
        let opts = FormatOptions::new().with_thousands_separator("0");
        let warnings = validate(&opts);
        assert!(
            warnings
                .iter()
                .any(|w| w.code == "thousands_separator.contains_digit")
        );
    }

    #[test]
    fn test_excess_decimal_places_warns() {
        assert!(validate(&FormatOptions::new().with_decimal_places(20)).is_empty());
        let warnings = validate(&FormatOptions::new().with_decimal_places(21));
        assert_eq!(warnings[0].path, "decimal_places");
        assert_eq!(warnings[0].code, "decimal_places.exceeds_precision");

        let warnings = validate(&FormatOptions::new().with_decimal_places(usize::MAX));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "decimal_places.exceeds_limit");
    }

    #[test]
    fn test_warning_display() {
        let warning = AdvisoryWarning {
            code: "test.code",
            path: "test.path",
            message: "Test message".into(),
        };
        assert_eq!(warning.to_string(), "[test.code] test.path: Test message");
    }
}
