//! k-anonymity breach database lookups.
//!
//! The HTTP transport is an optional capability behind the `breach`
//! cargo feature. Availability is resolved once at startup via
//! [`BreachChecker::available`]; when the capability is absent every
//! lookup yields [`BreachStatus::Unavailable`] rather than an error.

#[cfg(feature = "breach")]
mod client;
mod range;

use serde::{Serialize, Serializer};

/// Outcome of a breach lookup.
///
/// `Count(0)` means the candidate was not found in any known breach;
/// `Unavailable` means the lookup could not be performed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// Number of known breaches the candidate appears in.
    Count(u64),
    /// The lookup failed or the capability is absent.
    Unavailable,
}

impl Serialize for BreachStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BreachStatus::Count(n) => serializer.serialize_u64(*n),
            BreachStatus::Unavailable => serializer.serialize_str("unavailable"),
        }
    }
}

/// Performs breach lookups when the capability is present.
///
/// Construct once per run; when built without the `breach` feature,
/// or when the HTTP client cannot be constructed, the checker still
/// exists and every [`check`](Self::check) returns `Unavailable`.
pub struct BreachChecker {
    #[cfg(feature = "breach")]
    client: Option<client::BreachClient>,
}

impl BreachChecker {
    /// Whether the HTTP capability was compiled in.
    pub fn available() -> bool {
        cfg!(feature = "breach")
    }

    /// Creates a checker, degrading (with a warning) on client
    /// construction failure.
    pub fn new() -> Self {
        #[cfg(feature = "breach")]
        {
            let client = match client::BreachClient::new() {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!(error = %e, "breach client unavailable, lookups will degrade");
                    None
                }
            };
            Self { client }
        }
        #[cfg(not(feature = "breach"))]
        {
            Self {}
        }
    }

    /// Looks up `candidate`, never failing past this boundary.
    pub fn check(&self, candidate: &str) -> BreachStatus {
        #[cfg(feature = "breach")]
        {
            match &self.client {
                Some(client) => client.lookup(candidate),
                None => BreachStatus::Unavailable,
            }
        }
        #[cfg(not(feature = "breach"))]
        {
            let _ = candidate;
            BreachStatus::Unavailable
        }
    }
}

impl Default for BreachChecker {
    fn default() -> Self {
        Self::new()
    }
}
