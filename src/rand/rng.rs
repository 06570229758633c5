//! Buffered CSPRNG with unbiased index draws and Fisher-Yates shuffling.

use zeroize::Zeroize;

use super::{EntropyError, EntropySource, OsEntropy};

const BUF_SIZE: usize = 512;

/// Buffered secure random generator.
///
/// Bytes are pulled from the wrapped [`EntropySource`] in `BUF_SIZE` chunks and
/// every byte is consumed at most once. The buffer is zeroized on drop so no
/// unused randomness outlives the generator.
pub struct SecureRng<S: EntropySource = OsEntropy> {
    source: S,
    buf: [u8; BUF_SIZE],
    pos: usize,
}

impl SecureRng<OsEntropy> {
    /// Generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for SecureRng<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> SecureRng<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            buf: [0u8; BUF_SIZE],
            // Empty: first draw triggers a refill
            pos: BUF_SIZE,
        }
    }

    #[inline]
    pub fn next_u64(&mut self) -> Result<u64, EntropyError> {
        if self.pos + 8 > BUF_SIZE {
            self.refill()?;
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.buf[self.pos..self.pos + 8].zeroize();
        self.pos += 8;
        let value = u64::from_le_bytes(word);
        word.zeroize();
        Ok(value)
    }

    /// Uniform index in `0..bound`, by rejection sampling.
    ///
    /// # Panics
    /// If `bound` is zero.
    pub fn below(&mut self, bound: usize) -> Result<usize, EntropyError> {
        assert!(bound > 0, "below() called with an empty range");
        let bound = bound as u64;
        // Largest multiple of `bound` that fits; values at or above it would skew
        // the low residues.
        let limit = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next_u64()?;
            if value < limit {
                return Ok((value % bound) as usize);
            }
        }
    }

    /// Uniformly chosen element of a non-empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Result<T, EntropyError> {
        Ok(items[self.below(items.len())?])
    }

    /// Fisher-Yates shuffle: every permutation is equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<(), EntropyError> {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }

    #[cold]
    fn refill(&mut self) -> Result<(), EntropyError> {
        if let Err(e) = self.source.fill(&mut self.buf) {
            // A partial fill must never be consumed
            self.buf.zeroize();
            self.pos = BUF_SIZE;
            return Err(e);
        }
        self.pos = 0;
        Ok(())
    }
}

impl<S: EntropySource> Drop for SecureRng<S> {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

impl<S: EntropySource> std::fmt::Debug for SecureRng<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureRng")
            .field("buffered", &(BUF_SIZE - self.pos))
            .finish_non_exhaustive()
    }
}
