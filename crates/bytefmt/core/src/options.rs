//! Per-call option records for [`format`](crate::format()) and [`parse`](crate::parse()).
//!
//! All fields use `#[serde(default)]` so partial option documents work.

use crate::error::Result;
use crate::units::{CapacityBase, Unit};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options controlling how a byte count is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FormatOptions {
    /// Capacity base: 1024 (binary, IEC labels) or 1000 (decimal, SI labels).
    #[schemars(with = "u32")]
    pub capacity_base: CapacityBase,

    /// Digits after the decimal point.
    pub decimal_places: usize,

    /// Keep trailing zeros instead of stripping them.
    pub fixed_decimals: bool,

    /// Return the number and unit label separately.
    pub split_unit: bool,

    /// Inserted between the number and the unit label.
    pub unit_separator: String,

    /// Inserted between digit groups of the integer part. Empty disables grouping.
    pub thousands_separator: String,

    /// Force this unit instead of picking one from the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_unit: Option<Unit>,

    /// Pick the largest unit that divides the value exactly.
    pub without_float: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            capacity_base: CapacityBase::Binary,
            decimal_places: 2,
            fixed_decimals: false,
            split_unit: false,
            unit_separator: String::new(),
            thousands_separator: String::new(),
            to_unit: None,
            without_float: false,
        }
    }
}

impl FormatOptions {
    /// Create format options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode options from a (possibly partial) JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the capacity base.
    pub fn with_capacity_base(mut self, capacity_base: CapacityBase) -> Self {
        self.capacity_base = capacity_base;
        self
    }

    /// Set the number of decimal places.
    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Keep or strip trailing zeros.
    pub fn with_fixed_decimals(mut self, fixed_decimals: bool) -> Self {
        self.fixed_decimals = fixed_decimals;
        self
    }

    /// Return number and unit separately.
    pub fn with_split_unit(mut self, split_unit: bool) -> Self {
        self.split_unit = split_unit;
        self
    }

    /// Set the separator between number and unit.
    pub fn with_unit_separator(mut self, separator: impl Into<String>) -> Self {
        self.unit_separator = separator.into();
        self
    }

    /// Set the thousands separator.
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    /// Force a target unit.
    pub fn with_to_unit(mut self, unit: Option<Unit>) -> Self {
        self.to_unit = unit;
        self
    }

    /// Only pick units that divide the value exactly.
    pub fn with_without_float(mut self, without_float: bool) -> Self {
        self.without_float = without_float;
        self
    }
}

/// Options controlling how a size string is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParseOptions {
    /// Capacity base: 1024 (binary) or 1000 (decimal).
    #[schemars(with = "u32")]
    pub capacity_base: CapacityBase,

    /// Under the decimal base, scale by the binary/decimal ratio so the result
    /// is still the binary byte count. Ignored under the binary base.
    pub convert: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            capacity_base: CapacityBase::Binary,
            convert: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_capacity_base(mut self, capacity_base: CapacityBase) -> Self {
        self.capacity_base = capacity_base;
        self
    }

    pub fn with_convert(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }
}
