//! Stop-word list loading
//!
//! Loads stop sets from any reader or from a file: one entry per line,
//! blank lines and `#` comment lines ignored, surrounding whitespace
//! trimmed. What belongs in a list is a corpus question and out of scope
//! here; no built-in list is shipped.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::acip::stream::AnalysisError;

/// The default stop set used when an analyzer is built without one.
///
/// Deliberately empty: the crate makes no claim about which ACIP particles
/// should be stopped. Hosts load their own list with [load_stop_words].
pub static DEFAULT_STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(HashSet::new);

/// Load a stop set from a reader. One word per line; `#` starts a comment
/// line; blank lines are skipped.
pub fn load_stop_words<R: Read>(reader: R) -> Result<HashSet<String>, AnalysisError> {
    let reader = BufReader::new(reader);
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.insert(word.to_string());
    }
    Ok(words)
}

/// Load a stop set from a file path.
pub fn load_stop_words_file<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, AnalysisError> {
    let file = File::open(path)?;
    load_stop_words(file)
}
