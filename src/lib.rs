//! Passmint Library
//!
//! Password and passphrase generation with entropy scoring and
//! k-anonymity breach checks. Credentials are drawn from an OS-seeded
//! ChaCha20 CSPRNG; everything around the draw is thin plumbing.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! pool → sampler → analysis (entropy + strength)
//!                → breach (optional k-anonymity lookup)
//!                → output (text / ndjson / csv)
//! ```
//!
//! # Design Principles
//!
//! - **Secure draws only**: every character and word comes from a
//!   CSPRNG, never a general-purpose PRNG
//! - **Degrade, don't crash**: breach lookups fold every failure into
//!   an explicit `Unavailable` state
//! - **Descriptive entropy**: the reported bits measure the generated
//!   string's own character distribution, not the generation process —
//!   a deliberate, documented limitation
//!
//! # Example
//!
//! ```
//! use passmint::{shannon_bits, CharacterClasses, SecureSampler, StrengthLabel};
//!
//! let pool = CharacterClasses::default().build_pool().unwrap();
//! let mut sampler = SecureSampler::from_os_entropy();
//!
//! let password = sampler.draw_string(&pool, 16).unwrap();
//! assert_eq!(password.chars().count(), 16);
//!
//! let bits = shannon_bits(&password);
//! let label = StrengthLabel::from_bits(bits);
//! println!("{password}: {bits:.2} bits ({label})");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod breach;
pub mod cli;
pub mod output;
pub mod pool;
pub mod sampler;

// Re-export commonly used types at crate root
pub use analysis::{shannon_bits, StrengthLabel};
pub use breach::{BreachChecker, BreachStatus};
pub use output::{CsvDestination, OutputError, Record};
pub use pool::{CharacterClasses, PoolError, Wordlist, WordlistError};
pub use sampler::{SampleError, SecureSampler};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
