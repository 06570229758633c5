//! Raw entropy sources.

use super::EntropyError;

pub(super) const OS_SOURCE_NAME: &str = "OS CSPRNG (getrandom)";

/// Anything that can fill a buffer with unpredictable bytes.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system's secure random facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(EntropyError::from)
    }
}
