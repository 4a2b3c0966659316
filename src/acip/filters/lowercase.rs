//! Lower-casing filter
//!
//! ACIP sources are transliterated in upper case; search pipelines usually
//! fold case before stop-word removal and indexing. This filter lowercases
//! token text and passes every other field through untouched.

use crate::acip::stream::{AnalysisError, FinalPosition, Token, TokenSource};

/// Lowercases the text of every token from the wrapped source.
pub struct LowercaseFilter<S> {
    input: S,
}

impl<S: TokenSource> LowercaseFilter<S> {
    /// Construct filtering `input`.
    pub fn new(input: S) -> Self {
        LowercaseFilter { input }
    }
}

impl<S: TokenSource> TokenSource for LowercaseFilter<S> {
    fn next_token(&mut self) -> Result<Option<Token>, AnalysisError> {
        Ok(self.input.next_token()?.map(|mut token| {
            // The scanner grammar is ASCII, so ASCII folding is exact
            token.text.make_ascii_lowercase();
            token
        }))
    }

    fn end(&mut self) -> Result<FinalPosition, AnalysisError> {
        self.input.end()
    }

    fn close(&mut self) -> Result<(), AnalysisError> {
        self.input.close()
    }
}
