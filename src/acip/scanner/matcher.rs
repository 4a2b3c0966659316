//! Pull-based scanner over the raw token grammar
//!
//! The scanner owns the source buffer and a byte cursor. Each call to
//! [`Scanner::next_match`] resumes the logos automaton at the cursor,
//! classifies the next span, and advances. Rebinding to a new source resets
//! the cursor to zero and retains nothing from the previous binding.

use logos::Logos;

use crate::acip::scanner::tokens::RawToken;
use crate::acip::stream::{AnalysisError, TokenKind};

/// One classified span produced by the scanner.
///
/// `start` and `end` are byte offsets into the bound source. The matched
/// spans are ASCII by grammar construction, so byte and character lengths
/// coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl RawMatch {
    /// Length of the matched span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The lexical automaton driver for one source binding.
#[derive(Debug, Default)]
pub struct Scanner {
    source: String,
    cursor: usize,
}

impl Scanner {
    /// Create a scanner with no bound source. `next_match` reports
    /// end-of-stream until a source is bound.
    pub fn new() -> Self {
        Scanner::default()
    }

    /// Create a scanner bound to `source`, positioned at the start.
    pub fn from_source(source: String) -> Self {
        Scanner { source, cursor: 0 }
    }

    /// Rebind to a new source and rewind to position zero.
    pub fn rebind(&mut self, source: String) {
        self.source = source;
        self.cursor = 0;
    }

    /// The bound source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current byte position. After exhaustion this is the end-of-text
    /// position used for the session's final offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The matched text for a span produced by this scanner.
    pub fn text(&self, m: &RawMatch) -> &str {
        &self.source[m.start..m.end]
    }

    /// Produce the next match, or `Ok(None)` at end of stream.
    ///
    /// Deterministic longest-match classification; never produces a
    /// zero-length match (that condition aborts with
    /// [`AnalysisError::ScannerStalled`] instead of looping). Bytes the
    /// grammar does not cover are consumed as separators.
    pub fn next_match(&mut self) -> Result<Option<RawMatch>, AnalysisError> {
        loop {
            if self.cursor >= self.source.len() {
                return Ok(None);
            }

            let mut lexer = RawToken::lexer(&self.source[self.cursor..]);
            let Some(result) = lexer.next() else {
                // Only skippable content remained; park at end-of-text
                self.cursor = self.source.len();
                return Ok(None);
            };

            let span = lexer.span();
            if span.is_empty() {
                return Err(AnalysisError::ScannerStalled {
                    offset: self.cursor + span.start,
                });
            }

            let start = self.cursor + span.start;
            let end = self.cursor + span.end;
            self.cursor = end;

            match result {
                Ok(raw) => {
                    return Ok(Some(RawMatch {
                        kind: raw.kind(),
                        start,
                        end,
                    }));
                }
                // Bytes outside the grammar act as separators
                Err(()) => continue,
            }
        }
    }
}
