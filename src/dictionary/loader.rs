//! Dictionary loading utilities
//!
//! Reads newline-separated word lists from disk.

use super::{Dictionary, DictionaryError};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// One word per line; blank lines and entries outside 2 to 7 letters are
/// skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read and
/// `DictionaryError::Empty` if it contains no playable words.
///
/// # Examples
/// ```no_run
/// use word_slayer::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loading custom word list");
    Dictionary::load(content.lines().filter(|line| !line.trim().is_empty()))
}
