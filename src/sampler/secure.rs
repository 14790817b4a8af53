//! ChaCha-based secure sampler.
//!
//! All credential material is drawn through this type. The underlying
//! generator is a ChaCha20 CSPRNG seeded once from OS entropy; a
//! general-purpose PRNG is never used for draws.

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use thiserror::Error;

/// Errors for invalid draw requests.
#[derive(Debug, Clone, Error)]
pub enum SampleError {
    #[error("cannot draw from an empty pool")]
    EmptyPool,
    #[error("draw count must be positive")]
    NonPositiveCount,
}

/// A sampler backed by an OS-seeded ChaCha20 CSPRNG.
///
/// Each draw selects one element independently and uniformly at
/// random, with replacement. Uniformity comes from ranged draws
/// rather than a raw modulo, so no pool size introduces bias.
pub struct SecureSampler {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
}

impl SecureSampler {
    /// Creates a sampler seeded from the OS entropy source.
    ///
    /// This is the only non-test constructor.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);

        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Creates a sampler from a known seed (for testing only).
    #[cfg(test)]
    pub(crate) fn from_seed_for_testing(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }

    /// Draws `length` characters uniformly from `pool`.
    pub fn draw_string(&mut self, pool: &[char], length: usize) -> Result<String, SampleError> {
        if pool.is_empty() {
            return Err(SampleError::EmptyPool);
        }
        if length == 0 {
            return Err(SampleError::NonPositiveCount);
        }

        let value = (0..length)
            .map(|_| pool[self.inner.gen_range(0..pool.len())])
            .collect();
        Ok(value)
    }

    /// Draws `count` words uniformly from `words`, joined with single
    /// spaces.
    ///
    /// Draws are with replacement, the same policy as character draws.
    pub fn draw_phrase(&mut self, words: &[String], count: usize) -> Result<String, SampleError> {
        if words.is_empty() {
            return Err(SampleError::EmptyPool);
        }
        if count == 0 {
            return Err(SampleError::NonPositiveCount);
        }

        let picked: Vec<&str> = (0..count)
            .map(|_| words[self.inner.gen_range(0..words.len())].as_str())
            .collect();
        Ok(picked.join(" "))
    }
}
