//! Analyzer composition point
//!
//! An analyzer owns the settings that outlive any single stream (the stop
//! set and the max token length) and builds a fresh
//! tokenizer-plus-filter chain per input:
//!
//!     input -> AcipTokenizer -> LowercaseFilter -> StopFilter
//!
//! Settings apply to streams built after the change; a stream already in
//! flight keeps the settings it was built with. There is no cached or
//! shared stream: each call to `token_stream` returns a chain the caller
//! exclusively owns.

use log::debug;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::acip::filters::{LowercaseFilter, StopFilter};
use crate::acip::stopwords;
use crate::acip::stream::{AnalysisError, TokenSource};
use crate::acip::tokenizer::{AcipTokenizer, DEFAULT_MAX_TOKEN_LENGTH};

/// Builds analysis chains for ACIP text.
pub struct AcipAnalyzer {
    stop_words: HashSet<String>,
    max_token_length: usize,
}

impl AcipAnalyzer {
    /// Analyzer with the default (empty) stop set.
    pub fn new() -> Self {
        AcipAnalyzer {
            stop_words: stopwords::DEFAULT_STOP_WORDS.clone(),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Analyzer with the given stop set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        AcipAnalyzer {
            stop_words,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Analyzer with stop words loaded from a reader.
    pub fn from_stop_words_reader<R: Read>(reader: R) -> Result<Self, AnalysisError> {
        Ok(Self::with_stop_words(stopwords::load_stop_words(reader)?))
    }

    /// Analyzer with stop words loaded from a file.
    pub fn from_stop_words_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        Ok(Self::with_stop_words(stopwords::load_stop_words_file(
            path,
        )?))
    }

    /// Set the maximum allowed token length. Streams built after this call
    /// use the new limit; streams already built are unaffected.
    pub fn set_max_token_length(&mut self, length: usize) -> Result<(), AnalysisError> {
        if length == 0 {
            return Err(AnalysisError::InvalidMaxTokenLength(length));
        }
        self.max_token_length = length;
        Ok(())
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Build the full analysis chain over `input`.
    pub fn token_stream<R: Read + 'static>(
        &self,
        input: R,
    ) -> Result<impl TokenSource, AnalysisError> {
        debug!(
            "building analysis chain (max_token_length={}, stop_words={})",
            self.max_token_length,
            self.stop_words.len()
        );
        let mut tokenizer = AcipTokenizer::new();
        tokenizer.set_max_token_length(self.max_token_length)?;
        tokenizer.reset(input)?;
        Ok(StopFilter::new(
            LowercaseFilter::new(tokenizer),
            self.stop_words.clone(),
        ))
    }
}

impl Default for AcipAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
