//! Request types describing what to generate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{CharClass, Readability};

/// Where a class takes its characters from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Charset {
    /// Built-in alphabet picked by readability mode.
    #[default]
    Auto,
    /// Caller-supplied characters, used verbatim.
    Custom(Vec<char>),
}

/// Settings for one character class.
///
/// `min_count` has no effect while `enabled` is false.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharacterClassSpec {
    pub enabled: bool,
    pub min_count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub charset: Charset,
}

impl CharacterClassSpec {
    /// An enabled class requiring at least `min_count` characters.
    pub fn enabled(min_count: usize) -> Self {
        Self {
            enabled: true,
            min_count,
            charset: Charset::Auto,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Characters this class demands: `min_count` if enabled, else zero.
    pub fn required(&self) -> usize {
        if self.enabled { self.min_count } else { 0 }
    }

    #[cfg(feature = "serde")]
    fn enabled_one() -> Self {
        Self::enabled(1)
    }
}

/// How far the post-shuffle check goes in restoring minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Enforcement {
    /// Re-verify symbols (and passphrase digits) independently by
    /// overwriting random positions. Other classes may drop below their
    /// minimum as a result.
    #[default]
    SymbolsOnly,
    /// Re-verify every class with a minimum, only overwriting positions
    /// whose loss keeps all other minimums intact.
    AllClasses,
}

/// Parameters for a character password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PasswordSpec {
    pub length: usize,
    #[cfg_attr(feature = "serde", serde(default = "CharacterClassSpec::enabled_one"))]
    pub uppercase: CharacterClassSpec,
    #[cfg_attr(feature = "serde", serde(default = "CharacterClassSpec::enabled_one"))]
    pub lowercase: CharacterClassSpec,
    #[cfg_attr(feature = "serde", serde(default = "CharacterClassSpec::enabled_one"))]
    pub digits: CharacterClassSpec,
    #[cfg_attr(feature = "serde", serde(default = "CharacterClassSpec::enabled_one"))]
    pub symbols: CharacterClassSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub include: Vec<char>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude: Vec<char>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub readability: Readability,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enforcement: Enforcement,
}

impl PasswordSpec {
    /// Every class enabled with a minimum of one, auto alphabets, `Read` mode.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            uppercase: CharacterClassSpec::enabled(1),
            lowercase: CharacterClassSpec::enabled(1),
            digits: CharacterClassSpec::enabled(1),
            symbols: CharacterClassSpec::enabled(1),
            include: Vec::new(),
            exclude: Vec::new(),
            readability: Readability::Read,
            enforcement: Enforcement::SymbolsOnly,
        }
    }

    pub fn with_uppercase(mut self, class: CharacterClassSpec) -> Self {
        self.uppercase = class;
        self
    }

    pub fn with_lowercase(mut self, class: CharacterClassSpec) -> Self {
        self.lowercase = class;
        self
    }

    pub fn with_digits(mut self, class: CharacterClassSpec) -> Self {
        self.digits = class;
        self
    }

    pub fn with_symbols(mut self, class: CharacterClassSpec) -> Self {
        self.symbols = class;
        self
    }

    pub fn with_include(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.include = chars.into_iter().collect();
        self
    }

    pub fn with_exclude(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.exclude = chars.into_iter().collect();
        self
    }

    pub fn with_readability(mut self, readability: Readability) -> Self {
        self.readability = readability;
        self
    }

    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }

    /// Settings for one of the four requirement-bearing classes.
    ///
    /// Returns `None` for `CharClass::Custom`, which is driven by `include`.
    pub fn class(&self, class: CharClass) -> Option<&CharacterClassSpec> {
        match class {
            CharClass::Uppercase => Some(&self.uppercase),
            CharClass::Lowercase => Some(&self.lowercase),
            CharClass::Digits => Some(&self.digits),
            CharClass::Symbols => Some(&self.symbols),
            CharClass::Custom => None,
        }
    }
}

/// Parameters for a word-based passphrase.
///
/// Digit and symbol minimums add extra tokens on top of `word_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassphraseSpec {
    pub word_count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub digits: CharacterClassSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbols: CharacterClassSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_words: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude: Vec<char>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub readability: Readability,
    #[cfg_attr(feature = "serde", serde(default = "default_separator"))]
    pub separator: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enforcement: Enforcement,
}

#[cfg(feature = "serde")]
fn default_separator() -> String {
    " ".to_string()
}

impl PassphraseSpec {
    /// Words only, `Read` mode, space separated.
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count,
            digits: CharacterClassSpec::disabled(),
            symbols: CharacterClassSpec::disabled(),
            include_words: Vec::new(),
            exclude: Vec::new(),
            readability: Readability::Read,
            separator: " ".to_string(),
            enforcement: Enforcement::SymbolsOnly,
        }
    }

    pub fn with_digits(mut self, class: CharacterClassSpec) -> Self {
        self.digits = class;
        self
    }

    pub fn with_symbols(mut self, class: CharacterClassSpec) -> Self {
        self.symbols = class;
        self
    }

    pub fn with_include_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.exclude = chars.into_iter().collect();
        self
    }

    pub fn with_readability(mut self, readability: Readability) -> Self {
        self.readability = readability;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }
}

/// A password or passphrase request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum PassRequest {
    Password(PasswordSpec),
    Passphrase(PassphraseSpec),
}

impl From<PasswordSpec> for PassRequest {
    fn from(spec: PasswordSpec) -> Self {
        PassRequest::Password(spec)
    }
}

impl From<PassphraseSpec> for PassRequest {
    fn from(spec: PassphraseSpec) -> Self {
        PassRequest::Passphrase(spec)
    }
}
