//! Secure randomness: uniform index selection and shuffling.
//!
//! Everything draws from the operating system CSPRNG. There is no
//! fallback: if the OS source fails, the call fails.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::GenerateError;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a uniform value in `[0, n)`.
    ///
    /// # Errors
    ///
    /// - `EmptyAlphabet` if `n == 0`
    /// - `RandomnessUnavailable` if the entropy source fails
    fn choice_index(&mut self, n: usize) -> Result<usize, GenerateError>;
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn choice_index(&mut self, n: usize) -> Result<usize, GenerateError> {
        if n == 0 {
            return Err(GenerateError::EmptyAlphabet);
        }
        let n = n as u64;
        // Largest multiple of n that fits; draws at or above it are rejected
        // so every residue is equally likely.
        let zone = (u64::MAX / n) * n;
        loop {
            let x = OsRng
                .try_next_u64()
                .map_err(|e| GenerateError::RandomnessUnavailable(e.to_string()))?;
            if x < zone {
                return Ok((x % n) as usize);
            }
        }
    }
}

/// Picks one element of `items` uniformly.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Result<&'a T, GenerateError>
where
    R: RandomSource + ?Sized,
{
    let idx = rng.choice_index(items.len())?;
    Ok(&items[idx])
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T]) -> Result<(), GenerateError>
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.choice_index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Test doubles shared by the engine tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A source whose entropy is permanently unavailable.
    pub struct Unavailable;

    impl RandomSource for Unavailable {
        fn choice_index(&mut self, _n: usize) -> Result<usize, GenerateError> {
            Err(GenerateError::RandomnessUnavailable(
                "entropy source offline".to_string(),
            ))
        }
    }

    /// Always returns the lowest index.
    pub struct Zero;

    impl RandomSource for Zero {
        fn choice_index(&mut self, n: usize) -> Result<usize, GenerateError> {
            if n == 0 {
                return Err(GenerateError::EmptyAlphabet);
            }
            Ok(0)
        }
    }
}
