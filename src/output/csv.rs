//! CSV output (RFC-4180 quoting via the `csv` crate).

use std::path::PathBuf;

use crate::breach::BreachStatus;

use super::{OutputError, Record};

/// Where CSV rows are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvDestination {
    /// Write to stdout (`--csv -`).
    Stdout,
    /// Write to a file.
    Path(PathBuf),
}

impl CsvDestination {
    /// Parses the `--csv` flag value; `-` selects stdout.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == "-" {
            Self::Stdout
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }
}

/// Writes a header row plus one row per record.
///
/// Optional fields render as empty cells; a failed breach lookup
/// renders as the `unavailable` sentinel.
pub fn write_records(records: &[Record], dest: &CsvDestination) -> Result<(), OutputError> {
    match dest {
        CsvDestination::Stdout => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            write_rows(records, &mut writer)
        }
        CsvDestination::Path(path) => {
            let mut writer = csv::Writer::from_path(path)?;
            write_rows(records, &mut writer)
        }
    }
}

fn write_rows<W: std::io::Write>(
    records: &[Record],
    writer: &mut csv::Writer<W>,
) -> Result<(), OutputError> {
    writer.write_record(["value", "entropy_bits", "strength_label", "breach_count"])?;

    for record in records {
        let entropy = record
            .entropy_bits
            .map(|b| format!("{:.2}", b))
            .unwrap_or_default();
        let label = record
            .strength_label
            .map(|l| l.to_string())
            .unwrap_or_default();
        let breach = match record.breach_count {
            Some(BreachStatus::Count(n)) => n.to_string(),
            Some(BreachStatus::Unavailable) => "unavailable".to_string(),
            None => String::new(),
        };

        writer.write_record([record.value.as_str(), &entropy, &label, &breach])?;
    }

    writer.flush()?;
    Ok(())
}
