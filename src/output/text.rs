//! Human-readable per-record output.

use crate::breach::BreachStatus;

use super::Record;

/// Prints one record to stdout as it is generated.
///
/// The value always goes on its own line; entropy and breach lines
/// appear only when the corresponding annotation was computed.
pub fn print_record(record: &Record) {
    println!("{}", record.value);

    if let (Some(bits), Some(label)) = (record.entropy_bits, record.strength_label) {
        println!("entropy: {:.2} bits ({})", bits, label);
    }

    match record.breach_count {
        Some(BreachStatus::Count(0)) => {
            println!("breach: not found in known breaches");
        }
        Some(BreachStatus::Count(n)) => {
            println!("breach: found in {} known breaches, do not use this credential", n);
        }
        Some(BreachStatus::Unavailable) => {
            println!("breach: lookup unavailable");
        }
        None => {}
    }
}
