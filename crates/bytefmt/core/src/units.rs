//! Units, capacity bases and their magnitude tables.
//!
//! Both tables share the same keys in the same order (smallest first), so a
//! [`Unit`] doubles as an index into either of them.

use crate::error::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary magnitudes, powers of 1024.
const BINARY_MAGNITUDES: [f64; 8] = [
    1.0,
    (1u128 << 10) as f64,
    (1u128 << 20) as f64,
    (1u128 << 30) as f64,
    (1u128 << 40) as f64,
    (1u128 << 50) as f64,
    (1u128 << 60) as f64,
    (1u128 << 70) as f64,
];

/// Decimal magnitudes, powers of 1000. All values are exact in an `f64`.
const DECIMAL_MAGNITUDES: [f64; 8] = [1.0, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18, 1e21];

/// A byte unit, ordered by increasing magnitude.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    /// Bytes.
    B,
    /// Kilobytes (KB / KiB).
    Kb,
    /// Megabytes (MB / MiB).
    Mb,
    /// Gigabytes (GB / GiB).
    Gb,
    /// Terabytes (TB / TiB).
    Tb,
    /// Petabytes (PB / PiB).
    Pb,
    /// Exabytes (EB / EiB).
    Eb,
    /// Zettabytes (ZB / ZiB).
    Zb,
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 8] = [
        Self::B,
        Self::Kb,
        Self::Mb,
        Self::Gb,
        Self::Tb,
        Self::Pb,
        Self::Eb,
        Self::Zb,
    ];

    /// Upper-case unit code (`"KB"`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
            Self::Tb => "TB",
            Self::Pb => "PB",
            Self::Eb => "EB",
            Self::Zb => "ZB",
        }
    }

    /// IEC label shown for this unit under the binary base (`"KiB"`).
    pub const fn binary_label(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::Kb => "KiB",
            Self::Mb => "MiB",
            Self::Gb => "GiB",
            Self::Tb => "TiB",
            Self::Pb => "PiB",
            Self::Eb => "EiB",
            Self::Zb => "ZiB",
        }
    }

    /// Case-insensitive lookup of a bare suffix such as `"mb"` or `"ZB"`.
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.code().eq_ignore_ascii_case(suffix))
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts unit codes in any case (`"kb"`, `"KB"`) and binary labels (`"KiB"`).
impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_suffix(trimmed)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|unit| unit.binary_label().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| Error::unknown_unit(trimmed))
    }
}

/// Capacity base: which magnitude table and which labels to use.
///
/// Serialized as the bare number (`1024` or `1000`). Any number other than
/// `1000` selects the binary base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum CapacityBase {
    /// Powers of 1024, IEC labels (KiB, MiB, ...).
    #[default]
    Binary,
    /// Powers of 1000, SI labels (KB, MB, ...).
    Decimal,
}

impl CapacityBase {
    /// Scale factor of `unit` in this base.
    pub const fn magnitude(self, unit: Unit) -> f64 {
        match self {
            Self::Binary => BINARY_MAGNITUDES[unit.index()],
            Self::Decimal => DECIMAL_MAGNITUDES[unit.index()],
        }
    }

    /// Label shown next to a formatted number.
    pub const fn label(self, unit: Unit) -> &'static str {
        match self {
            Self::Binary => unit.binary_label(),
            Self::Decimal => unit.code(),
        }
    }

    /// Numeric value of the base.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 1024,
            Self::Decimal => 1000,
        }
    }
}

impl From<u32> for CapacityBase {
    fn from(value: u32) -> Self {
        if value == 1000 {
            Self::Decimal
        } else {
            Self::Binary
        }
    }
}

impl From<CapacityBase> for u32 {
    fn from(base: CapacityBase) -> Self {
        base.radix()
    }
}

impl fmt::Display for CapacityBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}
