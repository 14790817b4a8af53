//! Cryptographically secure sampling.
//!
//! Draws password characters and passphrase words uniformly from a
//! pool using an OS-seeded ChaCha20 CSPRNG.

mod secure;

pub use secure::{SampleError, SecureSampler};
