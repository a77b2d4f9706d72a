//! Generation engines
//!
//! Each engine assembles a credential from working buffers it owns for
//! the duration of one call. The post-shuffle patch routines shared by
//! both live here.

pub(crate) mod passphrase;
pub(crate) mod password;

use crate::error::GenerateError;
use crate::random::{RandomSource, choose};

/// A minimum-count requirement checked after shuffling.
pub(crate) struct Minimum<'a, T> {
    pub required: usize,
    /// Replacement population; every element satisfies `matches`.
    pub fill: &'a [T],
    pub matches: &'a dyn Fn(&T) -> bool,
}

impl<T> Minimum<'_, T> {
    fn count(&self, buf: &[T]) -> usize {
        buf.iter().filter(|item| (self.matches)(item)).count()
    }
}

/// Overwrites uniformly random positions with fresh draws from `min.fill`
/// until `min` holds. Positions are picked blindly, so other classes may
/// lose members.
///
/// Returns the number of overwrites.
pub(crate) fn patch_random<T, R>(
    rng: &mut R,
    buf: &mut [T],
    min: &Minimum<'_, T>,
) -> Result<usize, GenerateError>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    if min.required == 0 || min.fill.is_empty() {
        return Ok(0);
    }
    if min.required > buf.len() {
        return Err(GenerateError::UnsatisfiableConstraints {
            length: buf.len(),
            required: min.required,
        });
    }

    let mut patched = 0;
    while min.count(buf) < min.required {
        let idx = rng.choice_index(buf.len())?;
        buf[idx] = choose(rng, min.fill)?.clone();
        patched += 1;
    }
    Ok(patched)
}

/// Restores every minimum in `mins`, in order, without pushing any other
/// minimum below its requirement.
///
/// Only positions that don't already satisfy the class being restored,
/// and whose loss leaves every other class at or above its minimum, are
/// eligible for overwriting.
///
/// # Errors
///
/// `UnsatisfiableConstraints` when no eligible position remains.
pub(crate) fn patch_all<T, R>(
    rng: &mut R,
    buf: &mut [T],
    mins: &[Minimum<'_, T>],
) -> Result<usize, GenerateError>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut patched = 0;

    for (i, min) in mins.iter().enumerate() {
        if min.required == 0 || min.fill.is_empty() {
            continue;
        }

        while min.count(buf) < min.required {
            let counts: Vec<usize> = mins.iter().map(|m| m.count(buf)).collect();
            let eligible: Vec<usize> = (0..buf.len())
                .filter(|&p| {
                    !(min.matches)(&buf[p])
                        && mins.iter().enumerate().all(|(j, other)| {
                            j == i || !(other.matches)(&buf[p]) || counts[j] > other.required
                        })
                })
                .collect();

            if eligible.is_empty() {
                return Err(GenerateError::UnsatisfiableConstraints {
                    length: buf.len(),
                    required: mins.iter().map(|m| m.required).sum(),
                });
            }

            let idx = *choose(rng, &eligible)?;
            buf[idx] = choose(rng, min.fill)?.clone();
            patched += 1;
        }
    }
    Ok(patched)
}
