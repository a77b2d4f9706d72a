//! Error types returned by the generators.

use thiserror::Error;

use crate::catalog::CharClass;
use crate::wordlist::WordListError;

/// Reasons a password or passphrase could not be produced.
///
/// A failed call never yields partial output.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Length must be greater than 0")]
    InvalidLength,
    #[error("Length {length} is too short for minimum character requirements ({required})")]
    UnsatisfiableConstraints { length: usize, required: usize },
    #[error("No characters available for generation")]
    EmptyAlphabet,
    #[error("Every {class} character was excluded but {class} characters are required")]
    ExhaustedClass { class: CharClass },
    #[error("No words available after applying exclusions")]
    EmptyWordPool,
    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(String),
    #[error("Word list unavailable: {0}")]
    WordList(#[from] WordListError),
    #[cfg(feature = "async")]
    #[error("Generation cancelled")]
    Cancelled,
}
