//! Character password assembly.

use zeroize::Zeroizing;

use super::{Minimum, patch_all, patch_random};
use crate::catalog::CharClass;
use crate::charset::{self, Alphabet};
use crate::constraints::validate_password;
use crate::error::GenerateError;
use crate::random::{RandomSource, choose, shuffle};
use crate::spec::{Charset, Enforcement, PasswordSpec};

/// Generates a password of exactly `spec.length` characters.
///
/// Minimums are seeded per class (uppercase, lowercase, digits, symbols),
/// the rest is filled from the union of every built alphabet, then the
/// whole buffer is shuffled and re-checked.
pub(crate) fn generate<R>(spec: &PasswordSpec, rng: &mut R) -> Result<String, GenerateError>
where
    R: RandomSource + ?Sized,
{
    let resolved = validate_password(spec)?;

    let enabled: Vec<(CharClass, &Charset)> = CharClass::REQUIRED_ORDER
        .iter()
        .filter(|&&class| resolved.get(class).enabled)
        .filter_map(|&class| spec.class(class).map(|c| (class, &c.charset)))
        .collect();
    let sets = charset::build(&enabled, spec.readability, &spec.include, &spec.exclude);

    let all = sets.union();
    if all.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    for class in CharClass::REQUIRED_ORDER {
        if resolved.get(class).required() > 0 && sets.get(class).is_none() {
            return Err(GenerateError::ExhaustedClass { class });
        }
    }

    let mut buf: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(spec.length));

    for class in CharClass::REQUIRED_ORDER {
        if let Some(alphabet) = sets.get(class) {
            for _ in 0..resolved.get(class).required() {
                buf.push(*choose(rng, alphabet.chars())?);
            }
        }
    }

    while buf.len() < spec.length {
        buf.push(*choose(rng, all.chars())?);
    }

    shuffle(rng, buf.as_mut_slice())?;

    let _patched = match spec.enforcement {
        Enforcement::SymbolsOnly => match sets.get(CharClass::Symbols) {
            Some(symbols) => {
                let matches = member_of(symbols);
                let min = Minimum {
                    required: resolved.symbols.required(),
                    fill: symbols.chars(),
                    matches: &matches,
                };
                patch_random(rng, buf.as_mut_slice(), &min)?
            }
            None => 0,
        },
        Enforcement::AllClasses => {
            let present: Vec<(usize, &Alphabet)> = CharClass::REQUIRED_ORDER
                .iter()
                .filter_map(|&class| sets.get(class).map(|a| (resolved.get(class).required(), a)))
                .filter(|(required, _)| *required > 0)
                .collect();
            let matchers: Vec<_> = present
                .iter()
                .map(|&(_, alphabet)| member_of(alphabet))
                .collect();
            let mins: Vec<Minimum<'_, char>> = present
                .iter()
                .zip(&matchers)
                .map(|(&(required, alphabet), matches)| Minimum {
                    required,
                    fill: alphabet.chars(),
                    matches,
                })
                .collect();
            patch_all(rng, buf.as_mut_slice(), &mins)?
        }
    };

    #[cfg(feature = "tracing")]
    {
        if resolved.relaxed {
            tracing::debug!("Generated digits-only password after relaxation");
        }
        if _patched > 0 {
            tracing::debug!("Post-shuffle check overwrote {} password positions", _patched);
        }
    }

    Ok(buf.iter().collect())
}

fn member_of(alphabet: &Alphabet) -> impl Fn(&char) -> bool + '_ {
    move |c| alphabet.contains(*c)
}
