//! Word list management module
//!
//! Handles loading the passphrase dictionary and building per-call word pools.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Readability;

static WORDLIST: OnceCell<WordList> = OnceCell::new();

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Candidate words, one per non-blank line of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parses line-delimited words. Lines are trimmed and blank ones skipped.
    ///
    /// # Errors
    ///
    /// Returns `EmptyFile` if no words remain.
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(WordListError::EmptyFile);
        }
        Ok(WordList { words })
    }

    /// Reads and parses a word list file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WordListError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Builds the working pool for one passphrase.
    ///
    /// A word is dropped if it contains an excluded character either as
    /// listed or after casing for `mode`. `include` words are cased and
    /// appended without filtering.
    pub fn pool(&self, exclude: &[char], include: &[String], mode: Readability) -> WordPool {
        let clean = |w: &str| !w.chars().any(|c| exclude.contains(&c));
        let mut words: Vec<String> = self
            .words
            .iter()
            .filter(|w| clean(w.as_str()))
            .map(|w| apply_casing(w, mode))
            .filter(|w| clean(w.as_str()))
            .collect();
        words.extend(include.iter().map(|w| apply_casing(w, mode)));
        WordPool { words }
    }
}

/// Words eligible for a single passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// `Type` lowercases the word; otherwise only the first character is
/// uppercased and the rest is left alone.
pub fn apply_casing(word: &str, mode: Readability) -> String {
    match mode {
        Readability::Type => word.to_lowercase(),
        Readability::Read | Readability::Full => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_WORDLIST_PATH`
/// 2. Default path `./assets/words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_GEN_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/words.txt"))
}

/// Initializes the shared word list from the configured path.
///
/// Call once at startup to load eagerly; otherwise the first passphrase
/// request loads it.
///
/// # Errors
///
/// Returns error if the file is missing, unreadable or empty.
pub fn init_wordlist() -> Result<usize, WordListError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Initializes the shared word list from a specific file path.
///
/// Idempotent: once a list is loaded, later calls return its size without
/// touching `path`. Concurrent first calls run the loader at most once.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, WordListError> {
    load(path.as_ref()).map(WordList::len)
}

/// Returns the shared word list, or `None` if it has not been loaded.
pub fn get_wordlist() -> Option<&'static WordList> {
    WORDLIST.get()
}

/// Returns the shared word list, loading it from the configured path on first use.
pub(crate) fn shared() -> Result<&'static WordList, WordListError> {
    match WORDLIST.get() {
        Some(list) => Ok(list),
        None => load(&get_wordlist_path()),
    }
}

fn load(path: &Path) -> Result<&'static WordList, WordListError> {
    WORDLIST.get_or_try_init(|| {
        let list = WordList::from_path(path).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list initialization FAILED: {} ({:?})", _e, path);
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Word list initialized: {} words from {:?}", list.len(), path);

        Ok(list)
    })
}
