//! Shannon entropy over a generated string.
//!
//! This is a descriptive statistic, not a proof of strength: it
//! measures the character-frequency distribution of one specific
//! string. It is NOT the entropy of the generation process
//! (`log2(pool_size) * length`), which is generally higher. A string
//! like "aaaaaaaa" scores 0 bits even when drawn from a large pool.

use std::collections::HashMap;

/// Computes total Shannon entropy of `s` in bits.
///
/// Per-symbol entropy `H = -sum(p(c) * log2(p(c)))` over the observed
/// character frequencies, scaled by the character count. Returns 0.0
/// for the empty string; never negative.
pub fn shannon_bits(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    let length = s.chars().count() as f64;
    let per_symbol: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -p * p.log2()
        })
        .sum();

    let bits = per_symbol * length;
    // A single repeated symbol yields -0.0; normalize the sign.
    if bits == 0.0 {
        0.0
    } else {
        bits
    }
}
