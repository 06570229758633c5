use thiserror::Error;

use crate::rand::EntropyError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Character pool is empty. Enable at least one character type.")]
    EmptyPool,

    #[error("Length must be at least {required} to include one of each selected type.")]
    InsufficientLength { length: usize, required: usize },

    #[error("Length must be at most {max} characters.")]
    TooLong { length: usize, max: usize },

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

impl GenerateError {
    /// True for failures of the random source rather than of the request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Entropy(_))
    }
}
