//! Password generation.

pub mod charset;
mod error;
mod generate;
mod password;

pub use charset::{CharClass, ClassFlags, ClassSet, Pool};
pub use error::GenerateError;
pub use generate::{MAX_LENGTH, generate, generate_batch, generate_with};
pub use password::Password;
