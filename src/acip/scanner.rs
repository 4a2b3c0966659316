//! Scanner
//!
//! This module is the lexical automaton for ACIP transliteration text: it
//! consumes characters and repeatedly produces the next classified match
//! (kind + byte span), or signals end-of-stream. It knows nothing about
//! position increments or maximum token lengths; that bookkeeping lives in
//! the [tokenizer](crate::acip::tokenizer) adapter one layer up.
//!
//! Structure:
//!     The classification grammar is expressed with the logos derive macro
//!     (see [tokens]), and [matcher::Scanner] drives it with a byte cursor so
//!     matches can be pulled one at a time and the automaton can be rebound
//!     to a new source without reallocation of the session object.
//!
//! Classification policy:
//! - Punctuation characters separate words and are themselves emitted as
//!   PUNCTUATION matches.
//! - A dot that is not followed by whitespace stays inside the preceding
//!   word (`E.G` scans as one WORD); a dot followed by whitespace is split
//!   off as its own PUNCTUATION match.
//! - Digit runs are NUMBER; `@`-prefixed page references are FOLIO_NUMBER;
//!   bracketed runs are COMMENT; everything else that is word text is WORD.
//! - Bytes outside the grammar (control characters, non-ASCII) act as
//!   separators: they are consumed and never produce a match.

pub mod matcher;
pub mod tokens;

pub use matcher::{RawMatch, Scanner};
pub use tokens::RawToken;

use crate::acip::stream::AnalysisError;

/// Scan an entire source string into raw matches.
///
/// Convenience over driving [Scanner] by hand; used by the CLI token dump
/// and by tests that want the full classified stream at once.
pub fn scan_all(source: &str) -> Result<Vec<RawMatch>, AnalysisError> {
    let mut scanner = Scanner::from_source(source.to_string());
    let mut matches = Vec::new();
    while let Some(m) = scanner.next_match()? {
        matches.push(m);
    }
    Ok(matches)
}
