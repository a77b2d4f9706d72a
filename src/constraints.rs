//! Minimum-count validation, including the all-digits PIN relaxation.

use crate::catalog::CharClass;
use crate::error::GenerateError;
use crate::spec::{CharacterClassSpec, PassphraseSpec, PasswordSpec};

/// Effective class settings after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirement {
    pub enabled: bool,
    pub min_count: usize,
}

impl Requirement {
    pub fn required(&self) -> usize {
        if self.enabled { self.min_count } else { 0 }
    }
}

/// A password request whose minimums fit within its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub uppercase: Requirement,
    pub lowercase: Requirement,
    pub digits: Requirement,
    pub symbols: Requirement,
    /// Sum of enabled minimums.
    pub required: usize,
    /// Whether the PIN relaxation disabled the non-digit classes.
    pub relaxed: bool,
}

impl Resolved {
    pub fn get(&self, class: CharClass) -> Requirement {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
            CharClass::Custom => Requirement::default(),
        }
    }
}

/// Checks that the minimums of `spec` fit in its length.
///
/// When they don't, one relaxation is tried: if digits are enabled and
/// their minimum equals the length, every other class is disabled and the
/// request becomes a PIN. Anything else fails.
///
/// # Errors
///
/// - `InvalidLength` if `length == 0`
/// - `UnsatisfiableConstraints` if the minimums exceed the length
pub fn validate_password(spec: &PasswordSpec) -> Result<Resolved, GenerateError> {
    if spec.length == 0 {
        return Err(GenerateError::InvalidLength);
    }

    let as_requirement = |c: &CharacterClassSpec| Requirement {
        enabled: c.enabled,
        min_count: c.min_count,
    };

    let mut resolved = Resolved {
        uppercase: as_requirement(&spec.uppercase),
        lowercase: as_requirement(&spec.lowercase),
        digits: as_requirement(&spec.digits),
        symbols: as_requirement(&spec.symbols),
        required: 0,
        relaxed: false,
    };
    resolved.required = CharClass::REQUIRED_ORDER
        .iter()
        .map(|&c| resolved.get(c).required())
        .sum();

    if resolved.required <= spec.length {
        return Ok(resolved);
    }

    if resolved.digits.enabled && resolved.digits.min_count == spec.length {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Minimums ({}) exceed length {}, relaxing to digits only",
            resolved.required,
            spec.length
        );
        let off = Requirement::default();
        resolved.uppercase = off;
        resolved.lowercase = off;
        resolved.symbols = off;
        resolved.required = resolved.digits.min_count;
        resolved.relaxed = true;
        return Ok(resolved);
    }

    Err(GenerateError::UnsatisfiableConstraints {
        length: spec.length,
        required: resolved.required,
    })
}

/// Passphrase extras add tokens rather than compete for slots, so only
/// the word count needs checking.
pub fn validate_passphrase(spec: &PassphraseSpec) -> Result<(), GenerateError> {
    if spec.word_count == 0 {
        return Err(GenerateError::InvalidLength);
    }
    Ok(())
}
