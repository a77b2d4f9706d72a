//! Character set building for password generation.

use crate::catalog::{self, CharClass, Readability};
use crate::spec::Charset;

/// Ordered, de-duplicated sampling population.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Keeps the first occurrence of every character.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut out: Vec<char> = Vec::new();
        for c in chars {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        Alphabet(out)
    }

    /// Resolves a class charset: the catalog for `Auto`, the caller's list otherwise.
    pub fn resolve(class: CharClass, charset: &Charset, mode: Readability) -> Self {
        match charset {
            Charset::Auto => Self::from_chars(catalog::builtin(class, mode).chars()),
            Charset::Custom(chars) => Self::from_chars(chars.iter().copied()),
        }
    }

    /// Drops every character present in `exclude`.
    pub fn without(mut self, exclude: &[char]) -> Self {
        self.0.retain(|c| !exclude.contains(c));
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Usable alphabet per class for a single generation call.
///
/// A `None` slot means the class is disabled or was emptied by exclusion.
#[derive(Debug, Clone, Default)]
pub struct ClassAlphabets {
    pub uppercase: Option<Alphabet>,
    pub lowercase: Option<Alphabet>,
    pub digits: Option<Alphabet>,
    pub symbols: Option<Alphabet>,
    pub custom: Option<Alphabet>,
}

impl ClassAlphabets {
    pub fn get(&self, class: CharClass) -> Option<&Alphabet> {
        self.slot(class).as_ref()
    }

    fn slot(&self, class: CharClass) -> &Option<Alphabet> {
        match class {
            CharClass::Uppercase => &self.uppercase,
            CharClass::Lowercase => &self.lowercase,
            CharClass::Digits => &self.digits,
            CharClass::Symbols => &self.symbols,
            CharClass::Custom => &self.custom,
        }
    }

    fn slot_mut(&mut self, class: CharClass) -> &mut Option<Alphabet> {
        match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
            CharClass::Custom => &mut self.custom,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Alphabet> {
        [
            &self.uppercase,
            &self.lowercase,
            &self.digits,
            &self.symbols,
            &self.custom,
        ]
        .into_iter()
        .flatten()
    }

    /// De-duplicated union of every alphabet, in class order.
    pub fn union(&self) -> Alphabet {
        Alphabet::from_chars(self.iter().flat_map(|a| a.chars().iter().copied()))
    }
}

/// Builds the per-class alphabets for one call.
///
/// `classes` lists the enabled classes with their charset. A non-empty
/// `include` adds the `Custom` class. Excluded characters are removed
/// from every alphabet, and classes left empty are dropped.
pub fn build(
    classes: &[(CharClass, &Charset)],
    mode: Readability,
    include: &[char],
    exclude: &[char],
) -> ClassAlphabets {
    let mut sets = ClassAlphabets::default();

    for &(class, charset) in classes {
        *sets.slot_mut(class) = Some(Alphabet::resolve(class, charset, mode));
    }

    if !include.is_empty() {
        sets.custom = Some(Alphabet::from_chars(include.iter().copied()));
    }

    for class in [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
        CharClass::Custom,
    ] {
        let slot = sets.slot_mut(class);
        *slot = slot
            .take()
            .map(|a| a.without(exclude))
            .filter(|a| !a.is_empty());
    }

    sets
}
