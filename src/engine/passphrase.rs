//! Word-based passphrase assembly.

use zeroize::Zeroizing;

use super::{Minimum, patch_all, patch_random};
use crate::catalog::{self, CharClass};
use crate::charset::Alphabet;
use crate::constraints::validate_passphrase;
use crate::error::GenerateError;
use crate::random::{RandomSource, choose, shuffle};
use crate::spec::{Enforcement, PassphraseSpec};
use crate::wordlist::WordList;

/// Generates a passphrase of `word_count` words plus the requested digit
/// and symbol tokens, shuffled together and joined by `spec.separator`.
pub(crate) fn generate<R>(
    spec: &PassphraseSpec,
    words: &WordList,
    rng: &mut R,
) -> Result<String, GenerateError>
where
    R: RandomSource + ?Sized,
{
    validate_passphrase(spec)?;

    let pool = words.pool(&spec.exclude, &spec.include_words, spec.readability);
    if pool.is_empty() {
        return Err(GenerateError::EmptyWordPool);
    }

    // Extras must not contain the separator, or the phrase would split into extra tokens.
    let reserved: Vec<char> = spec.exclude.iter().copied().chain(spec.separator.chars()).collect();

    // Digits always come from the catalog range; only symbols honor a custom charset.
    let digit_alphabet =
        Alphabet::from_chars(catalog::builtin(CharClass::Digits, spec.readability).chars())
            .without(&reserved);
    let symbol_alphabet =
        Alphabet::resolve(CharClass::Symbols, &spec.symbols.charset, spec.readability)
            .without(&reserved);

    let digit_count = spec.digits.required();
    let symbol_count = spec.symbols.required();
    if digit_count > 0 && digit_alphabet.is_empty() {
        return Err(GenerateError::ExhaustedClass {
            class: CharClass::Digits,
        });
    }
    if symbol_count > 0 && symbol_alphabet.is_empty() {
        return Err(GenerateError::ExhaustedClass {
            class: CharClass::Symbols,
        });
    }

    let digit_tokens = single_char_tokens(&digit_alphabet);
    let symbol_tokens = single_char_tokens(&symbol_alphabet);

    let mut tokens: Zeroizing<Vec<String>> =
        Zeroizing::new(Vec::with_capacity(spec.word_count + digit_count + symbol_count));

    for _ in 0..spec.word_count {
        tokens.push(choose(rng, pool.words())?.clone());
    }
    for _ in 0..digit_count {
        tokens.push(choose(rng, &digit_tokens)?.clone());
    }
    for _ in 0..symbol_count {
        tokens.push(choose(rng, &symbol_tokens)?.clone());
    }

    shuffle(rng, tokens.as_mut_slice())?;

    let has_symbol = |t: &String| t.chars().any(|c| symbol_alphabet.contains(c));
    let digits_min = Minimum {
        required: digit_count,
        fill: &digit_tokens,
        matches: &is_numeric,
    };
    let symbols_min = Minimum {
        required: symbol_count,
        fill: &symbol_tokens,
        matches: &has_symbol,
    };

    let _patched = match spec.enforcement {
        Enforcement::SymbolsOnly => {
            patch_random(rng, tokens.as_mut_slice(), &digits_min)?
                + patch_random(rng, tokens.as_mut_slice(), &symbols_min)?
        }
        Enforcement::AllClasses => {
            patch_all(rng, tokens.as_mut_slice(), &[digits_min, symbols_min])?
        }
    };

    #[cfg(feature = "tracing")]
    {
        if _patched > 0 {
            tracing::debug!("Post-shuffle check overwrote {} passphrase tokens", _patched);
        }
    }

    Ok(tokens.join(spec.separator.as_str()))
}

fn single_char_tokens(alphabet: &Alphabet) -> Vec<String> {
    alphabet.chars().iter().map(char::to_string).collect()
}

/// A token counts as a digit only if every character is one.
fn is_numeric(token: &String) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Readability;
    use crate::random::OsRandom;
    use crate::random::testing::Unavailable;
    use crate::spec::{CharacterClassSpec, Charset};

    const WORDS: &[&str] = &["apple", "orbit", "lantern", "meadow", "quartz", "velvet", "harbor"];

    fn dictionary() -> WordList {
        WordList::parse(&WORDS.join("\n")).expect("Failed to parse words")
    }

    fn split<'a>(phrase: &'a str, separator: &str) -> Vec<&'a str> {
        phrase.split(separator).collect()
    }

    #[test]
    fn test_words_only() {
        let spec = PassphraseSpec::new(4).with_readability(Readability::Type);
        let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
        let tokens = split(&phrase, " ");
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|t| WORDS.contains(t)));
    }

    #[test]
    fn test_token_count_with_extras() {
        // '-' is in the read-mode symbol set; it must never be drawn as an extra.
        let spec = PassphraseSpec::new(5)
            .with_digits(CharacterClassSpec::enabled(1))
            .with_symbols(CharacterClassSpec::enabled(1))
            .with_separator("-");
        for _ in 0..500 {
            let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
            let tokens = split(&phrase, "-");
            assert_eq!(tokens.len(), 7, "{phrase}");
            assert!(tokens.iter().all(|t| !t.is_empty()), "{phrase}");
            assert!(tokens.iter().filter(|t| is_numeric(&t.to_string())).count() >= 1);
            assert!(tokens.iter().any(|t| t.len() == 1 && catalog::SYMBOLS_READ.contains(*t)));
        }
    }

    #[test]
    fn test_separator_reserved_from_digits() {
        let spec = PassphraseSpec::new(3)
            .with_digits(CharacterClassSpec::enabled(4))
            .with_separator("2");
        for _ in 0..50 {
            let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
            assert_eq!(split(&phrase, "2").len(), 7, "{phrase}");
        }
    }

    #[test]
    fn test_separator_only_symbols_exhausted() {
        let spec = PassphraseSpec::new(2)
            .with_symbols(CharacterClassSpec::enabled(1).with_charset(Charset::Custom(vec!['-'])))
            .with_separator("-");
        assert!(matches!(
            generate(&spec, &dictionary(), &mut OsRandom),
            Err(GenerateError::ExhaustedClass {
                class: CharClass::Symbols,
            })
        ));
    }

    #[test]
    fn test_read_mode_capitalizes_and_uses_readable_digits() {
        let spec = PassphraseSpec::new(6)
            .with_digits(CharacterClassSpec::enabled(6))
            .with_readability(Readability::Read);
        let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
        for token in split(&phrase, " ") {
            if is_numeric(&token.to_string()) {
                assert!(catalog::DIGITS_READ.contains(token), "{token}");
            } else {
                assert!(token.chars().next().unwrap().is_uppercase(), "{token}");
            }
        }
    }

    #[test]
    fn test_type_mode_lowercases_words() {
        let words = WordList::parse("Orbit\nMEADOW").unwrap();
        let spec = PassphraseSpec::new(8).with_readability(Readability::Type);
        let phrase = generate(&spec, &words, &mut OsRandom).unwrap();
        assert_eq!(phrase, phrase.to_lowercase());
    }

    #[test]
    fn test_excluded_word_never_drawn() {
        let spec = PassphraseSpec::new(10)
            .with_exclude(['a'])
            .with_readability(Readability::Type);
        for _ in 0..30 {
            let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
            assert!(!phrase.contains("apple"));
            assert!(!phrase.contains('a'));
        }
    }

    #[test]
    fn test_include_word_kept_unfiltered() {
        let words = WordList::parse("apple").unwrap();
        let spec = PassphraseSpec::new(3)
            .with_include_words(["zyx@q"])
            .with_exclude(['a', '@', 'q'])
            .with_readability(Readability::Type);
        let phrase = generate(&spec, &words, &mut OsRandom).unwrap();
        assert_eq!(phrase, "zyx@q zyx@q zyx@q");
    }

    #[test]
    fn test_excluded_extras_never_appear() {
        let exclude: Vec<char> = "2345!@#$%".chars().collect();
        let spec = PassphraseSpec::new(3)
            .with_digits(CharacterClassSpec::enabled(3))
            .with_symbols(CharacterClassSpec::enabled(3))
            .with_exclude(exclude.iter().copied());
        for _ in 0..30 {
            let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
            assert!(!phrase.chars().any(|c| exclude.contains(&c)), "{phrase}");
        }
    }

    #[test]
    fn test_custom_symbol_charset() {
        let spec = PassphraseSpec::new(2)
            .with_symbols(CharacterClassSpec::enabled(2).with_charset(Charset::Custom(vec!['~'])));
        let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
        assert_eq!(phrase.matches('~').count(), 2);
    }

    #[test]
    fn test_disabled_extras_ignore_minimum() {
        let spec = PassphraseSpec::new(3).with_digits(CharacterClassSpec {
            enabled: false,
            min_count: 4,
            charset: Charset::Auto,
        });
        let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
        assert_eq!(split(&phrase, " ").len(), 3);
    }

    #[test]
    fn test_zero_words() {
        assert!(matches!(
            generate(&PassphraseSpec::new(0), &dictionary(), &mut OsRandom),
            Err(GenerateError::InvalidLength)
        ));
    }

    #[test]
    fn test_empty_pool() {
        let words = WordList::parse("aa\nab").unwrap();
        let spec = PassphraseSpec::new(2).with_exclude(['a', 'A']);
        assert!(matches!(
            generate(&spec, &words, &mut OsRandom),
            Err(GenerateError::EmptyWordPool)
        ));
    }

    #[test]
    fn test_symbols_excluded_away() {
        let spec = PassphraseSpec::new(2)
            .with_symbols(CharacterClassSpec::enabled(1).with_charset(Charset::Custom(vec!['@'])))
            .with_exclude(['@']);
        assert!(matches!(
            generate(&spec, &dictionary(), &mut OsRandom),
            Err(GenerateError::ExhaustedClass {
                class: CharClass::Symbols,
            })
        ));
    }

    #[test]
    fn test_rng_failure_yields_no_passphrase() {
        assert!(matches!(
            generate(&PassphraseSpec::new(3), &dictionary(), &mut Unavailable),
            Err(GenerateError::RandomnessUnavailable(_))
        ));
    }

    #[test]
    fn test_all_classes_enforcement() {
        let spec = PassphraseSpec::new(2)
            .with_digits(CharacterClassSpec::enabled(2))
            .with_symbols(CharacterClassSpec::enabled(2))
            .with_enforcement(Enforcement::AllClasses);
        for _ in 0..30 {
            let phrase = generate(&spec, &dictionary(), &mut OsRandom).unwrap();
            let tokens = split(&phrase, " ");
            assert_eq!(tokens.len(), 6);
            assert!(tokens.iter().filter(|t| is_numeric(&t.to_string())).count() >= 2);
        }
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&"2024".to_string()));
        assert!(!is_numeric(&"a1".to_string()));
        assert!(!is_numeric(&String::new()));
    }
}
