//! Record accumulation and output formats.
//!
//! Text output streams per record; JSON and CSV buffer the full batch
//! and emit once after the generation loop.

mod csv;
mod json;
mod record;
mod text;

pub use self::csv::{write_records, CsvDestination};
pub use json::write_ndjson;
pub use record::Record;
pub use text::print_record;

/// Output encoding and I/O errors. Fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write csv output: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to encode json record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
