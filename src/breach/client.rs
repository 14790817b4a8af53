//! Blocking HTTP client for the breach range endpoint.
//!
//! Every failure path folds into [`BreachStatus::Unavailable`]; a
//! breach lookup can degrade but never abort a run.

use std::time::Duration;

use super::range::{digest_split, scan_range};
use super::BreachStatus;

/// Range-query endpoint (k-anonymity: receives digest prefixes only).
const RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

/// Fixed timeout for each lookup.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// A reusable blocking client for breach lookups.
pub struct BreachClient {
    http: reqwest::blocking::Client,
}

impl BreachClient {
    /// Builds the client with the fixed timeout and a crate User-Agent.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent(concat!("passmint/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Looks up `candidate` against the range endpoint.
    pub fn lookup(&self, candidate: &str) -> BreachStatus {
        let (prefix, suffix) = digest_split(candidate);
        let url = format!("{}/{}", RANGE_ENDPOINT, prefix);

        let response = match self.http.get(&url).send() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "breach range query failed");
                return BreachStatus::Unavailable;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "breach range query rejected");
            return BreachStatus::Unavailable;
        }

        match response.text() {
            Ok(body) => scan_range(&body, &suffix),
            Err(e) => {
                tracing::warn!(error = %e, "breach range response unreadable");
                BreachStatus::Unavailable
            }
        }
    }
}
