//! Range-response scanning and digest splitting.
//!
//! The k-anonymity protocol sends only the first five hex characters
//! of the candidate's SHA-1 digest; the service answers with every
//! known `SUFFIX:COUNT` pair under that prefix. The full digest and
//! the plaintext never leave the process.

use super::BreachStatus;

/// Number of hex characters of the digest sent to the service.
#[cfg(feature = "breach")]
pub(crate) const PREFIX_LEN: usize = 5;

/// Computes the uppercase-hex SHA-1 digest of `candidate` and splits
/// it into the transmitted prefix and the retained suffix.
#[cfg(feature = "breach")]
pub(crate) fn digest_split(candidate: &str) -> (String, String) {
    use sha1::{Digest, Sha1};

    let digest = Sha1::digest(candidate.as_bytes());
    let hex = hex::encode_upper(digest);
    let (prefix, suffix) = hex.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Scans a newline-delimited `SUFFIX:COUNT` body for `suffix`.
///
/// Returns the matched count, `Count(0)` if the suffix is absent, and
/// `Unavailable` if the matched line carries an unparseable count.
/// Malformed lines without a separator are skipped.
#[cfg_attr(not(feature = "breach"), allow(dead_code))]
pub(crate) fn scan_range(body: &str, suffix: &str) -> BreachStatus {
    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let Some((candidate_suffix, count)) = line.split_once(':') else {
            continue;
        };
        if candidate_suffix == suffix {
            return match count.trim().parse::<u64>() {
                Ok(n) => BreachStatus::Count(n),
                Err(_) => BreachStatus::Unavailable,
            };
        }
    }
    BreachStatus::Count(0)
}
