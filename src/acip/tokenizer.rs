//! Tokenizer adapter over the scanner
//!
//! This module turns raw scanner matches into the externally consumed token
//! stream. It is the component with the subtlest invariants:
//!
//! - Matches longer than `max_token_length` are never emitted, but each one
//!   advances the position bookkeeping so downstream phrase matching still
//!   sees the skipped slot.
//! - `skipped_positions` is cleared at the start of every `next_token` call
//!   and folded into the increment of the word emitted by that call. Skips
//!   recorded by a call that runs into end-of-stream stay pending and are
//!   reported by [`AcipTokenizer::end`] as the final marker's increment.
//! - Every emitted offset is routed through the offset-correction hook so
//!   upstream character-level preprocessing cannot desynchronize reported
//!   positions from the original document text.
//!
//! Session lifecycle: a tokenizer is bound to one input at a time, iterated
//! to exhaustion, finalized with `end`, and may be rebound with `reset` to
//! amortize allocation across sequential uses. Rebinding behaves identically
//! to constructing a fresh session. `close` is terminal.

use log::{debug, trace};
use std::io::Read;

use crate::acip::scanner::Scanner;
use crate::acip::stream::{AnalysisError, FinalPosition, Token, TokenKind, TokenSource};

/// Default maximum allowed token length
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// Offset correction supplied by the host pipeline.
///
/// Maps scanner-internal byte positions back to original-document positions
/// when an upstream character filter changed character counts. Identity by
/// default.
pub type OffsetCorrection = Box<dyn Fn(usize) -> usize>;

enum Binding {
    /// No input bound yet; behaves as an empty session
    Unbound,
    /// Input bound but not yet buffered; buffering happens on the first
    /// `next_token` call so read failures surface there
    Pending(Box<dyn Read>),
    /// Input buffered into the scanner
    Active,
    /// Terminal; the input has been released
    Closed,
}

/// The ACIP token stream adapter.
///
/// Wraps a [Scanner], applies the length filter, and exposes the pull-based
/// [TokenSource] contract. Only WORD-classified matches are emitted; the
/// other kinds are classified and length-checked but stay below this
/// adapter (use the scanner directly to observe them).
pub struct AcipTokenizer {
    scanner: Scanner,
    binding: Binding,
    /// Limit active for the current session
    max_token_length: usize,
    /// Limit applied at the next `reset`
    pending_max_token_length: usize,
    skipped_positions: u32,
    correct_offset: OffsetCorrection,
}

impl AcipTokenizer {
    /// Create an unbound tokenizer with default settings.
    pub fn new() -> Self {
        AcipTokenizer {
            scanner: Scanner::new(),
            binding: Binding::Unbound,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            pending_max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            skipped_positions: 0,
            correct_offset: Box::new(|offset| offset),
        }
    }

    /// Create a tokenizer bound to `input`.
    pub fn from_reader<R: Read + 'static>(input: R) -> Self {
        let mut tokenizer = AcipTokenizer::new();
        // A fresh tokenizer is never closed, so binding cannot fail
        let _ = tokenizer.reset(input);
        tokenizer
    }

    /// Install an offset-correction hook. Every emitted offset (including
    /// the final end-of-text offset) is routed through it.
    pub fn with_offset_correction(mut self, correct: OffsetCorrection) -> Self {
        self.correct_offset = correct;
        self
    }

    /// Set the max allowed token length. Any match longer than this is
    /// skipped. Takes effect at the next `reset`, not retroactively for the
    /// session in flight.
    pub fn set_max_token_length(&mut self, length: usize) -> Result<(), AnalysisError> {
        if length == 0 {
            return Err(AnalysisError::InvalidMaxTokenLength(length));
        }
        self.pending_max_token_length = length;
        Ok(())
    }

    /// The configured max token length (the value the next session will use).
    pub fn max_token_length(&self) -> usize {
        self.pending_max_token_length
    }

    /// Rebind to a new input and restart all counters.
    ///
    /// Safe to call any number of times: before first use, mid-session, or
    /// after exhaustion for reuse. The rebound session behaves identically
    /// to a freshly constructed one. Fails only after `close`.
    pub fn reset<R: Read + 'static>(&mut self, input: R) -> Result<(), AnalysisError> {
        if matches!(self.binding, Binding::Closed) {
            return Err(AnalysisError::SessionClosed);
        }
        self.binding = Binding::Pending(Box::new(input));
        self.scanner.rebind(String::new());
        self.skipped_positions = 0;
        self.max_token_length = self.pending_max_token_length;
        Ok(())
    }

    /// Buffer pending input into the scanner. Read failures propagate to
    /// the `next_token` caller.
    fn fill(&mut self) -> Result<(), AnalysisError> {
        match &mut self.binding {
            Binding::Pending(input) => {
                let mut source = String::new();
                input.read_to_string(&mut source)?;
                trace!("buffered {} bytes of input", source.len());
                self.scanner.rebind(source);
                self.binding = Binding::Active;
                Ok(())
            }
            Binding::Closed => Err(AnalysisError::SessionClosed),
            Binding::Unbound | Binding::Active => Ok(()),
        }
    }
}

impl Default for AcipTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for AcipTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>, AnalysisError> {
        self.fill()?;
        self.skipped_positions = 0;

        loop {
            let Some(m) = self.scanner.next_match()? else {
                return Ok(None);
            };

            if m.len() > self.max_token_length {
                // A skipped over-long match still advances the position
                debug!(
                    "skipping over-long match at {}..{} (len {} > {})",
                    m.start,
                    m.end,
                    m.len(),
                    self.max_token_length
                );
                self.skipped_positions += 1;
                continue;
            }

            if m.kind == TokenKind::Word {
                return Ok(Some(Token {
                    kind: m.kind,
                    text: self.scanner.text(&m).to_string(),
                    start_offset: (self.correct_offset)(m.start),
                    end_offset: (self.correct_offset)(m.end),
                    position_increment: self.skipped_positions + 1,
                }));
            }
            // Non-word kinds within the length limit are classified but not
            // surfaced by this adapter, and they leave the skip counter
            // untouched so pending skips still reach the next word
        }
    }

    fn end(&mut self) -> Result<FinalPosition, AnalysisError> {
        if matches!(self.binding, Binding::Closed) {
            return Err(AnalysisError::SessionClosed);
        }
        Ok(FinalPosition {
            offset: (self.correct_offset)(self.scanner.cursor()),
            position_increment: self.skipped_positions,
        })
    }

    fn close(&mut self) -> Result<(), AnalysisError> {
        // Dropping the binding releases the reader; repeated calls are no-ops
        self.binding = Binding::Closed;
        Ok(())
    }
}
