//! The per-generation record.

use serde::Serialize;

use crate::analysis::StrengthLabel;
use crate::breach::BreachStatus;

/// One generated credential with its optional annotations.
///
/// Immutable after creation; one record is produced per generation
/// iteration and collected for batch output.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// The generated password or passphrase.
    pub value: String,
    /// Shannon entropy of `value` in bits, rounded to two decimals.
    /// `None` when entropy was not requested.
    pub entropy_bits: Option<f64>,
    /// Label derived from `entropy_bits`.
    pub strength_label: Option<StrengthLabel>,
    /// Breach lookup outcome; `None` when the check was not requested.
    pub breach_count: Option<BreachStatus>,
}

impl Record {
    /// Creates a bare record holding only the generated value.
    pub fn new(value: String) -> Self {
        Self {
            value,
            entropy_bits: None,
            strength_label: None,
            breach_count: None,
        }
    }

    /// Attaches entropy bits (rounded to two decimals) and the
    /// derived strength label.
    pub fn with_entropy(mut self, bits: f64) -> Self {
        let rounded = (bits * 100.0).round() / 100.0;
        self.entropy_bits = Some(rounded);
        self.strength_label = Some(StrengthLabel::from_bits(bits));
        self
    }

    /// Attaches a breach lookup outcome.
    pub fn with_breach(mut self, status: BreachStatus) -> Self {
        self.breach_count = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_record_serializes_nulls() {
        let json = serde_json::to_string(&Record::new("abc123".into())).unwrap();
        assert_eq!(
            json,
            r#"{"value":"abc123","entropy_bits":null,"strength_label":null,"breach_count":null}"#
        );
    }

    #[test]
    fn test_zero_entropy_record() {
        // "aaaaaaaa": a single repeated symbol carries no distributional
        // information, so the record reports 0.0 / very weak.
        let bits = crate::analysis::shannon_bits("aaaaaaaa");
        let record = Record::new("aaaaaaaa".into()).with_entropy(bits);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"value":"aaaaaaaa","entropy_bits":0.0,"strength_label":"very weak","breach_count":null}"#
        );
    }

    #[test]
    fn test_entropy_rounded_to_two_decimals() {
        let record = Record::new("x".into()).with_entropy(41.357);
        assert_eq!(record.entropy_bits, Some(41.36));
    }

    #[test]
    fn test_unavailable_breach_serializes_sentinel() {
        let record = Record::new("x".into()).with_breach(BreachStatus::Unavailable);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""breach_count":"unavailable""#));
    }
}
