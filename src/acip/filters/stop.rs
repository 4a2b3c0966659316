//! Stop-word removal filter
//!
//! Drops tokens whose text is in the stop set and accumulates the dropped
//! position increments into the next surviving token, so a downstream
//! phrase query still sees the gap left by the removed words. Increments
//! pending when the stream runs out are folded into the final end-of-stream
//! marker.
//!
//! Matching is exact on token text; in the usual chain this filter sits
//! after [LowercaseFilter](crate::acip::filters::LowercaseFilter) so the
//! stop set can be stored lower-cased.

use std::collections::HashSet;

use crate::acip::stream::{AnalysisError, FinalPosition, Token, TokenSource};

/// Removes stop-listed tokens from the wrapped source, preserving position
/// increments across the removals.
pub struct StopFilter<S> {
    input: S,
    stop_words: HashSet<String>,
    pending_increments: u32,
}

impl<S: TokenSource> StopFilter<S> {
    /// Construct filtering `input` with the given stop set.
    pub fn new(input: S, stop_words: HashSet<String>) -> Self {
        StopFilter {
            input,
            stop_words,
            pending_increments: 0,
        }
    }
}

impl<S: TokenSource> TokenSource for StopFilter<S> {
    fn next_token(&mut self) -> Result<Option<Token>, AnalysisError> {
        loop {
            let Some(mut token) = self.input.next_token()? else {
                return Ok(None);
            };

            if self.stop_words.contains(&token.text) {
                self.pending_increments += token.position_increment;
                continue;
            }

            token.position_increment += self.pending_increments;
            self.pending_increments = 0;
            return Ok(Some(token));
        }
    }

    fn end(&mut self) -> Result<FinalPosition, AnalysisError> {
        let mut end = self.input.end()?;
        // Tail-end removals fold into the final marker
        end.position_increment += self.pending_increments;
        self.pending_increments = 0;
        Ok(end)
    }

    fn close(&mut self) -> Result<(), AnalysisError> {
        self.input.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acip::testing::factories::{mk_word, FixedTokens};

    fn stop_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_removes_stop_words() {
        let source = FixedTokens::new(vec![
            mk_word("gi", 0),
            mk_word("sems", 3),
            mk_word("kyi", 8),
            mk_word("nyid", 12),
        ]);
        let mut filter = StopFilter::new(source, stop_set(&["gi", "kyi"]));

        let texts: Vec<String> = std::iter::from_fn(|| filter.next_token().unwrap())
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["sems", "nyid"]);
    }

    #[test]
    fn test_accumulates_increments_across_removals() {
        let source = FixedTokens::new(vec![
            mk_word("gi", 0),
            mk_word("kyi", 3),
            mk_word("sems", 7),
        ]);
        let mut filter = StopFilter::new(source, stop_set(&["gi", "kyi"]));

        let token = filter.next_token().unwrap().unwrap();
        assert_eq!(token.text, "sems");
        // Two removed single-slot tokens plus its own slot
        assert_eq!(token.position_increment, 3);
    }

    #[test]
    fn test_tail_removals_fold_into_end_marker() {
        let source = FixedTokens::new(vec![mk_word("sems", 0), mk_word("gi", 5)]);
        let mut filter = StopFilter::new(source, stop_set(&["gi"]));

        assert_eq!(filter.next_token().unwrap().unwrap().text, "sems");
        assert_eq!(filter.next_token().unwrap(), None);
        assert_eq!(filter.end().unwrap().position_increment, 1);
    }

    #[test]
    fn test_empty_stop_set_passes_everything() {
        let source = FixedTokens::new(vec![mk_word("sems", 0), mk_word("nyid", 5)]);
        let mut filter = StopFilter::new(source, HashSet::new());

        assert_eq!(filter.next_token().unwrap().unwrap().text, "sems");
        assert_eq!(filter.next_token().unwrap().unwrap().text, "nyid");
    }
}
