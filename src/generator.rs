//! Public generation entry points.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::engine::{passphrase, password};
use crate::error::GenerateError;
use crate::random::OsRandom;
use crate::spec::{PassRequest, PassphraseSpec, PasswordSpec};
use crate::wordlist::{self, WordList};

/// Generates a password satisfying `spec`.
///
/// # Errors
///
/// - `InvalidLength` if `spec.length == 0`
/// - `UnsatisfiableConstraints` if the minimums don't fit and the PIN
///   relaxation doesn't apply
/// - `EmptyAlphabet` / `ExhaustedClass` if exclusions leave nothing to draw
/// - `RandomnessUnavailable` if the OS random source fails
pub fn generate_password(spec: &PasswordSpec) -> Result<SecretString, GenerateError> {
    let result = password::generate(spec, &mut OsRandom);
    seal(result)
}

/// Generates a passphrase from the shared word list.
///
/// The word list is loaded from `PWD_GEN_WORDLIST_PATH` (or
/// `./assets/words.txt`) on first use unless `init_wordlist_from_path`
/// ran earlier.
///
/// # Errors
///
/// Same as [`generate_passphrase_with`], plus `WordList` if the shared
/// list cannot be loaded.
pub fn generate_passphrase(spec: &PassphraseSpec) -> Result<SecretString, GenerateError> {
    let words = wordlist::shared()?;
    generate_passphrase_with(spec, words)
}

/// Generates a passphrase drawing words from `words`.
///
/// # Errors
///
/// - `InvalidLength` if `spec.word_count == 0`
/// - `EmptyWordPool` if exclusions remove every word and no words are included
/// - `ExhaustedClass` if required digits or symbols were all excluded
/// - `RandomnessUnavailable` if the OS random source fails
pub fn generate_passphrase_with(
    spec: &PassphraseSpec,
    words: &WordList,
) -> Result<SecretString, GenerateError> {
    let result = passphrase::generate(spec, words, &mut OsRandom);
    seal(result)
}

/// Generates whichever credential `request` asks for.
pub fn generate(request: &PassRequest) -> Result<SecretString, GenerateError> {
    match request {
        PassRequest::Password(spec) => generate_password(spec),
        PassRequest::Passphrase(spec) => generate_passphrase(spec),
    }
}

fn seal(result: Result<String, GenerateError>) -> Result<SecretString, GenerateError> {
    match result {
        Ok(pass) => Ok(SecretString::new(pass.into())),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Generation failed: {}", e);
            Err(e)
        }
    }
}

/// Async version that sends the generation result via channel.
///
/// Sends `Err(Cancelled)` if `token` is already cancelled. Generation
/// itself never awaits.
#[cfg(feature = "async")]
pub async fn generate_tx(
    request: &PassRequest,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, GenerateError>>,
) {
    let result = if token.is_cancelled() {
        Err(GenerateError::Cancelled)
    } else {
        generate(request)
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generation result: receiver dropped");
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_generate_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let request = PassRequest::from(PasswordSpec::new(12));

        generate_tx(&request, token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result.unwrap().expose_secret().len(), 12);
    }

    #[tokio::test]
    async fn test_generate_tx_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let request = PassRequest::from(PasswordSpec::new(12));

        generate_tx(&request, token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert!(matches!(result, Err(GenerateError::Cancelled)));
    }

    #[tokio::test]
    async fn test_generate_tx_sends_errors() {
        let (tx, mut rx) = mpsc::channel(1);
        let request = PassRequest::from(PasswordSpec::new(0));

        generate_tx(&request, CancellationToken::new(), tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert!(matches!(result, Err(GenerateError::InvalidLength)));
    }

    #[tokio::test]
    async fn test_generate_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let request = PassRequest::from(PasswordSpec::new(8));
        generate_tx(&request, CancellationToken::new(), tx).await;
    }
}
