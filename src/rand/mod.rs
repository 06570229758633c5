//! Cryptographically secure randomness for password generation.
//!
//! Everything here draws from the operating system CSPRNG. There is no
//! seeding API: callers can choose *where* bytes come from only through
//! [`EntropySource`], and the only implementation shipped is [`OsEntropy`].

mod rng;
mod source;

pub use rng::SecureRng;
pub use source::{EntropySource, OsEntropy};

use thiserror::Error;

/// The OS randomness source failed. Always fatal: there is no weaker fallback.
#[derive(Debug, Error)]
#[error("secure random source unavailable: {reason}")]
pub struct EntropyError {
    reason: String,
}

impl EntropyError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<getrandom::Error> for EntropyError {
    fn from(err: getrandom::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Name of the entropy backend, for diagnostics.
pub fn entropy_source() -> &'static str {
    source::OS_SOURCE_NAME
}
