//! Built-in character alphabets, keyed by class and readability mode.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Uppercase without `I` and `O`.
pub const UPPERCASE_TYPE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Lowercase without `i`, `l` and `o`.
pub const LOWERCASE_TYPE: &str = "abcdefghjkmnpqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// Digits without `0` and `1`.
pub const DIGITS_READ: &str = "23456789";
pub const SYMBOLS_TYPE: &str = "!@#$%&*+-=";
pub const SYMBOLS_READ: &str = "!@#$%^&*-+=";
pub const SYMBOLS_FULL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character categories a password is assembled from.
///
/// `Custom` is the synthetic class holding a caller's include list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
    Custom,
}

impl CharClass {
    /// Classes seeded with their minimums, in seeding order.
    pub const REQUIRED_ORDER: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digit",
            CharClass::Symbols => "symbol",
            CharClass::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Which glyphs to favor.
///
/// - `Read`: drop look-alike digits, capitalize passphrase words
/// - `Type`: drop letters that are awkward to type, lowercase words
/// - `Full`: no restriction, full symbol set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Readability {
    #[default]
    Read,
    Type,
    Full,
}

/// Returns the built-in alphabet for `class` under `mode`.
///
/// `Symbols` resolves to the auto symbol set. `Custom` has no built-in
/// alphabet and yields an empty string.
pub fn builtin(class: CharClass, mode: Readability) -> &'static str {
    match class {
        CharClass::Uppercase => match mode {
            Readability::Type => UPPERCASE_TYPE,
            Readability::Read | Readability::Full => UPPERCASE,
        },
        CharClass::Lowercase => match mode {
            Readability::Type => LOWERCASE_TYPE,
            Readability::Read | Readability::Full => LOWERCASE,
        },
        CharClass::Digits => match mode {
            Readability::Read => DIGITS_READ,
            Readability::Type | Readability::Full => DIGITS,
        },
        CharClass::Symbols => auto_symbols(mode),
        CharClass::Custom => "",
    }
}

/// Auto symbol alphabet for `mode`.
pub fn auto_symbols(mode: Readability) -> &'static str {
    match mode {
        Readability::Type => SYMBOLS_TYPE,
        Readability::Read => SYMBOLS_READ,
        Readability::Full => SYMBOLS_FULL,
    }
}
