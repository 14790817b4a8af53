//! Ordinal strength labels derived from entropy bits.

use serde::Serialize;
use std::fmt;

/// Five-level strength label with fixed bit thresholds.
///
/// Boundary values belong to the higher bracket: exactly 28 bits is
/// `Weak`, exactly 80 bits is `VeryStrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    /// Below 28 bits.
    #[serde(rename = "very weak")]
    VeryWeak,
    /// 28 to 36 bits.
    #[serde(rename = "weak")]
    Weak,
    /// 36 to 60 bits.
    #[serde(rename = "acceptable")]
    Acceptable,
    /// 60 to 80 bits.
    #[serde(rename = "strong")]
    Strong,
    /// 80 bits and above.
    #[serde(rename = "very strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Maps an entropy bit count to its label.
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Self::VeryWeak
        } else if bits < 36.0 {
            Self::Weak
        } else if bits < 60.0 {
            Self::Acceptable
        } else if bits < 80.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Acceptable => "acceptable",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        };
        f.write_str(s)
    }
}
