//! Entropy estimation and strength labelling.
//!
//! Both operations are pure functions on the generated string; see
//! [`shannon_bits`] for the caveat on what the metric does and does
//! not measure.

mod entropy;
mod strength;

pub use entropy::shannon_bits;
pub use strength::StrengthLabel;
