//! Password and passphrase generation library
//!
//! This library produces passwords and passphrases that satisfy explicit
//! character-class minimums, include/exclude lists and a readability mode,
//! drawing every choice from the operating system CSPRNG.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-based adapter with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` on the request types
//!
//! Run the test suite with `--all-features` as well as the defaults; the
//! serde request tests only build with `serde` enabled.
//!
//! # Environment Variables
//!
//! - `PWD_GEN_WORDLIST_PATH`: Custom path to the passphrase word list
//!   (default: `./assets/words.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{init_wordlist, generate_password, generate_passphrase};
//! use pwd_gen::{CharacterClassSpec, PassphraseSpec, PasswordSpec};
//! use secrecy::ExposeSecret;
//!
//! // Load the word list eagerly (otherwise the first passphrase loads it)
//! init_wordlist().expect("Failed to load word list");
//!
//! let spec = PasswordSpec::new(20).with_symbols(CharacterClassSpec::enabled(3));
//! let password = generate_password(&spec).expect("generation failed");
//! println!("Password: {}", password.expose_secret());
//!
//! let spec = PassphraseSpec::new(5)
//!     .with_digits(CharacterClassSpec::enabled(1))
//!     .with_separator("-");
//! let phrase = generate_passphrase(&spec).expect("generation failed");
//! println!("Passphrase: {}", phrase.expose_secret());
//! ```

// Internal modules
mod catalog;
mod charset;
mod constraints;
mod engine;
mod error;
mod generator;
mod random;
mod spec;
mod wordlist;

// Public API
pub use catalog::{CharClass, Readability};
pub use error::GenerateError;
pub use generator::{generate, generate_passphrase, generate_passphrase_with, generate_password};
pub use spec::{CharacterClassSpec, Charset, Enforcement, PassRequest, PassphraseSpec, PasswordSpec};
pub use wordlist::{
    WordList, WordListError, get_wordlist, get_wordlist_path, init_wordlist,
    init_wordlist_from_path,
};

#[cfg(feature = "async")]
pub use generator::generate_tx;
