//! Newline-delimited JSON output.

use std::io::Write;

use super::{OutputError, Record};

/// Writes each record as one compact JSON object per line.
pub fn write_ndjson<W: Write>(records: &[Record], mut writer: W) -> Result<(), OutputError> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_object_per_line() {
        let records = vec![Record::new("one".into()), Record::new("two".into())];

        let mut buf = Vec::new();
        write_ndjson(&records, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(parsed.get("value").is_some());
        }
    }
}
