//! Token records and the token-source capability
//!
//! This module defines the data that flows between the tokenizer and
//! downstream filters: the `Token` record, the `FinalPosition` end marker,
//! and the `TokenSource` trait that the tokenizer and every filter implement.
//!
//! Design principles:
//! - Tokens are fixed, statically-typed records. There is no open attribute
//!   bag; the five fields below are the whole contract.
//! - Filters are plain composition: a filter is a `TokenSource` that wraps
//!   another `TokenSource`. No inheritance hierarchy, no framework base type.
//! - End-of-stream is a first-class result (`Ok(None)`), never an error.

use serde::Serialize;
use std::fmt;
use std::io;

/// The closed set of token classifications produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A run of word text.
    Word,
    /// A bracketed commentary run, e.g. `[COMMENT TEXT]`.
    Comment,
    /// A folio/page reference, e.g. `@001A`.
    FolioNumber,
    /// A run of digits.
    Number,
    /// A single separating punctuation character.
    Punctuation,
}

impl TokenKind {
    /// Canonical display label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Word => "<WORD>",
            TokenKind::Comment => "<COMMENT>",
            TokenKind::FolioNumber => "<FOLIONO>",
            TokenKind::Number => "<NUMBER>",
            TokenKind::Punctuation => "<PUNCTUATION>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified, bounded span of text produced by one scan session.
///
/// Offsets are byte positions in the original input (after routing through
/// the tokenizer's offset-correction hook) and are monotonically
/// non-decreasing across a session. `position_increment` is the number of
/// logical token slots this token advances past the previous emitted token;
/// it exceeds 1 when oversized matches were skipped in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub position_increment: u32,
}

/// The synthetic end-of-stream marker reported by [`TokenSource::end`].
///
/// `offset` is the zero-width end-of-text position; `position_increment`
/// carries any skipped positions still pending when the stream ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalPosition {
    pub offset: usize,
    pub position_increment: u32,
}

/// A pull-based source of tokens.
///
/// Implemented by the tokenizer and by every filter stage. Filters wrap
/// another `TokenSource` and delegate, so chains of any length present the
/// same three-operation surface to the consumer:
///
/// ```ignore
/// let mut stream = StopFilter::new(LowercaseFilter::new(tokenizer), stops);
/// while let Some(token) = stream.next_token()? {
///     index.add(token);
/// }
/// let end = stream.end()?;
/// stream.close()?;
/// ```
pub trait TokenSource {
    /// Produce the next token, or `Ok(None)` at end of stream.
    fn next_token(&mut self) -> Result<Option<Token>, AnalysisError>;

    /// Finalize the session after `next_token` has returned `Ok(None)`.
    ///
    /// Reports the zero-width end-of-text position and folds any pending
    /// skipped positions into the returned increment. Call exactly once per
    /// session, after exhaustion.
    fn end(&mut self) -> Result<FinalPosition, AnalysisError>;

    /// Release the bound input. Safe to call more than once.
    fn close(&mut self) -> Result<(), AnalysisError>;
}

/// Errors that can occur during analysis
#[derive(Debug)]
pub enum AnalysisError {
    /// The bound input failed to read. Propagated as-is; retrying is the
    /// host pipeline's concern, not this layer's.
    Input(io::Error),
    /// `max_token_length` was set to a non-positive value.
    InvalidMaxTokenLength(usize),
    /// The session was used after `close()`.
    SessionClosed,
    /// The scanner produced a zero-length non-EOF match. This is a fatal
    /// invariant violation; the session is aborted instead of looping.
    ScannerStalled { offset: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Input(err) => write!(f, "input error: {}", err),
            AnalysisError::InvalidMaxTokenLength(len) => {
                write!(f, "invalid max token length: {}", len)
            }
            AnalysisError::SessionClosed => write!(f, "token source is closed"),
            AnalysisError::ScannerStalled { offset } => {
                write!(f, "scanner stalled on zero-length match at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AnalysisError {
    fn from(err: io::Error) -> Self {
        AnalysisError::Input(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(TokenKind::Word.label(), "<WORD>");
        assert_eq!(TokenKind::Comment.label(), "<COMMENT>");
        assert_eq!(TokenKind::FolioNumber.label(), "<FOLIONO>");
        assert_eq!(TokenKind::Number.label(), "<NUMBER>");
        assert_eq!(TokenKind::Punctuation.label(), "<PUNCTUATION>");
    }

    #[test]
    fn test_kind_display_matches_label() {
        assert_eq!(TokenKind::Word.to_string(), "<WORD>");
        assert_eq!(TokenKind::Punctuation.to_string(), "<PUNCTUATION>");
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InvalidMaxTokenLength(0);
        assert_eq!(err.to_string(), "invalid max token length: 0");

        let err = AnalysisError::ScannerStalled { offset: 7 };
        assert_eq!(
            err.to_string(),
            "scanner stalled on zero-length match at offset 7"
        );
    }

    #[test]
    fn test_error_source_chains_io() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "boom");
        let err = AnalysisError::from(io_err);
        assert!(matches!(err, AnalysisError::Input(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
